//! Recorded executions of a hull algorithm.
//!
//! A [`Trace`] is an ordered, non-empty list of [`TraceStep`]s. Every step
//! carries a full copy of the hull stack as it stands after the step, so a
//! trace can be replayed from any index without recomputation.
use serde::{Deserialize, Serialize};
use std::ops::Index;

use crate::data::{Hull, Point};
use crate::{Orientation, HIGHLIGHT_EPSILON};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StepKind {
  HighlightPoint,
  HighlightLine,
  AddToHull,
  RemoveFromHull,
  FinalHull,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceStep {
  kind: StepKind,
  points: Vec<Point>,
  hull: Vec<Point>,
  description: String,
}

impl TraceStep {
  pub fn kind(&self) -> StepKind {
    self.kind
  }

  /// Points the step is about: the compared triple, the pushed or popped
  /// point, the sorted input, etc.
  pub fn points(&self) -> &[Point] {
    &self.points
  }

  /// The hull stack after this step.
  pub fn hull(&self) -> &[Point] {
    &self.hull
  }

  pub fn description(&self) -> &str {
    &self.description
  }

  /// Does `pt` take part in this step? Uses [`HIGHLIGHT_EPSILON`].
  pub fn involves(&self, pt: &Point) -> bool {
    self
      .points
      .iter()
      .any(|p| p.approx_eq(pt, HIGHLIGHT_EPSILON))
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Trace {
  steps: Vec<TraceStep>,
}

impl Trace {
  pub fn len(&self) -> usize {
    self.steps.len()
  }

  /// Always false. Traces end with a [`StepKind::FinalHull`] step.
  pub fn is_empty(&self) -> bool {
    self.steps.is_empty()
  }

  pub fn get(&self, index: usize) -> Option<&TraceStep> {
    self.steps.get(index)
  }

  pub fn steps(&self) -> &[TraceStep] {
    &self.steps
  }

  pub fn iter(&self) -> std::slice::Iter<'_, TraceStep> {
    self.steps.iter()
  }

  pub fn last(&self) -> &TraceStep {
    // Non-empty by construction.
    &self.steps[self.steps.len() - 1]
  }

  /// The hull carried by the terminal [`StepKind::FinalHull`] step.
  pub fn final_hull(&self) -> Hull {
    Hull::new(self.last().hull.clone())
  }

  /// Number of steps of the given kind.
  pub fn count(&self, kind: StepKind) -> usize {
    self.steps.iter().filter(|step| step.kind == kind).count()
  }
}

impl Index<usize> for Trace {
  type Output = TraceStep;
  fn index(&self, index: usize) -> &TraceStep {
    &self.steps[index]
  }
}

impl<'a> IntoIterator for &'a Trace {
  type Item = &'a TraceStep;
  type IntoIter = std::slice::Iter<'a, TraceStep>;
  fn into_iter(self) -> Self::IntoIter {
    self.steps.iter()
  }
}

///////////////////////////////////////////////////////////////////////////////
// TraceBuilder

/// Mirrors the hull stack of a running algorithm and records a step for every
/// decision made on it.
///
/// The recorded snapshot is `base ++ stack`: `base` holds chains that are
/// already complete (the lower hull while the upper hull is being scanned),
/// `stack` is the chain under construction.
#[derive(Debug, Clone)]
pub struct TraceBuilder {
  steps: Vec<TraceStep>,
  base: Vec<Point>,
  stack: Vec<Point>,
  chain: &'static str,
}

impl Default for TraceBuilder {
  fn default() -> Self {
    TraceBuilder::new()
  }
}

impl TraceBuilder {
  pub fn new() -> TraceBuilder {
    TraceBuilder {
      steps: Vec::new(),
      base: Vec::new(),
      stack: Vec::new(),
      chain: "hull",
    }
  }

  /// The chain under construction.
  pub fn stack(&self) -> &[Point] {
    &self.stack
  }

  pub fn snapshot(&self) -> Vec<Point> {
    let mut snapshot = Vec::with_capacity(self.base.len() + self.stack.len());
    snapshot.extend_from_slice(&self.base);
    snapshot.extend_from_slice(&self.stack);
    snapshot
  }

  /// Start a new chain called `label`. The current chain, minus its last
  /// point, becomes part of the fixed snapshot prefix.
  pub fn begin_chain(&mut self, label: &'static str) {
    let mut done = std::mem::take(&mut self.stack);
    done.pop();
    self.base.extend(done);
    self.chain = label;
  }

  pub fn highlight_points(&mut self, points: Vec<Point>, description: String) {
    self.record(StepKind::HighlightPoint, points, description);
  }

  /// Compare the two topmost stack points with `candidate`.
  ///
  /// Records a [`StepKind::HighlightLine`] step with the snapshot before any
  /// pop. Returns `None` without recording anything if the stack holds fewer
  /// than two points.
  pub fn compare(&mut self, candidate: &Point) -> Option<Orientation> {
    let n = self.stack.len();
    if n < 2 {
      return None;
    }
    let (p1, p2) = (self.stack[n - 2], self.stack[n - 1]);
    let turn = p1.orientation(&p2, candidate);
    let description = format!(
      "Checking the turn {} -> {} -> {}: {}",
      p1,
      p2,
      candidate,
      turn.describe()
    );
    self.record(StepKind::HighlightLine, vec![p1, p2, *candidate], description);
    Some(turn)
  }

  pub fn push(&mut self, pt: Point) {
    self.stack.push(pt);
    let description = format!("Adding {} to the {}", pt, self.chain);
    self.record(StepKind::AddToHull, vec![pt], description);
  }

  pub fn pop(&mut self) -> Option<Point> {
    let pt = self.stack.pop()?;
    let description = format!(
      "{} does not make a left turn, removing it from the {}",
      pt, self.chain
    );
    self.record(StepKind::RemoveFromHull, vec![pt], description);
    Some(pt)
  }

  /// Pop until the top of the stack turns left towards `candidate`, then push
  /// it. Every comparison and every pop is recorded.
  pub fn scan(&mut self, candidate: Point) {
    while let Some(turn) = self.compare(&candidate) {
      if turn.is_ccw() {
        break;
      }
      self.pop();
    }
    self.push(candidate);
  }

  /// Pop until the last two stack points turn left towards `first`, closing
  /// the polygon. Needs at least three points on the stack.
  pub fn close(&mut self, first: &Point) {
    while self.stack.len() >= 3 {
      match self.compare(first) {
        Some(turn) if !turn.is_ccw() => {
          self.pop();
        }
        _ => break,
      }
    }
  }

  /// Record the terminal [`StepKind::FinalHull`] step and return the trace.
  pub fn finish(mut self, hull: Vec<Point>, description: String) -> Trace {
    self.steps.push(TraceStep {
      kind: StepKind::FinalHull,
      points: hull.clone(),
      hull,
      description,
    });
    Trace { steps: self.steps }
  }

  fn record(&mut self, kind: StepKind, points: Vec<Point>, description: String) {
    log::trace!("{:?}: {}", kind, description);
    let hull = self.snapshot();
    self.steps.push(TraceStep {
      kind,
      points,
      hull,
      description,
    });
  }
}

/// The one-step trace produced for inputs too small to have a proper hull.
pub fn degenerate(points: &[Point]) -> Trace {
  TraceBuilder::new().finish(
    points.to_vec(),
    format!(
      "A convex hull needs at least 3 points, got {}. The hull is the input itself",
      points.len()
    ),
  )
}

/// Summary used for the [`StepKind::FinalHull`] step.
pub(crate) fn summary(hull: &[Point], input: usize) -> String {
  format!(
    "Convex hull complete: {} of {} points are hull vertices",
    hull.len(),
    input
  )
}
