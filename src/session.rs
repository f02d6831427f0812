//! Interactive state: the point set, the selected algorithm and either a
//! finished hull or a trace being stepped through.
//!
//! A [`Session`] never waits on a clock. The host calls [`Session::advance`]
//! on its own schedule (a timer, a frame loop or a test) and reads
//! [`Session::speed`] to decide how often.
use rand::Rng;
use std::fmt;
use std::time::{Duration, Instant};

use crate::algorithms::Algorithm;
use crate::data::Point;
use crate::trace::{Trace, TraceStep};

/// Fewest points for which running an algorithm does anything.
pub const MIN_POINTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
  pub algorithm: Algorithm,
  /// Delay between two automatic steps while playing.
  pub speed: Duration,
}

impl Default for SessionConfig {
  fn default() -> Self {
    SessionConfig {
      algorithm: Algorithm::default(),
      speed: Duration::from_millis(500),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
  /// No points.
  Empty,
  /// Fewer than [`MIN_POINTS`] points.
  Accumulating,
  /// Enough points, nothing computed yet.
  ReadyToRun,
  /// Stepping through a trace; the cursor is in `1..total`.
  Running(usize),
  Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
  StateChanged,
  StepChanged { current: usize, total: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(usize);

type Observer = Box<dyn FnMut(&SessionEvent)>;

pub struct Session {
  points: Vec<Point>,
  algorithm: Algorithm,
  hull: Vec<Point>,
  trace: Option<Trace>,
  // Number of trace steps applied. 0 means no hull yet.
  cursor: usize,
  finished: bool,
  playing: bool,
  speed: Duration,
  elapsed: Option<Duration>,
  observers: Vec<(ObserverId, Observer)>,
  next_observer: usize,
}

impl Default for Session {
  fn default() -> Self {
    Session::new()
  }
}

impl fmt::Debug for Session {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Session")
      .field("points", &self.points.len())
      .field("algorithm", &self.algorithm)
      .field("hull", &self.hull)
      .field("cursor", &self.cursor)
      .field("total_steps", &self.total_steps())
      .field("finished", &self.finished)
      .field("playing", &self.playing)
      .field("speed", &self.speed)
      .field("elapsed", &self.elapsed)
      .field("observers", &self.observers.len())
      .finish()
  }
}

impl Session {
  pub fn new() -> Session {
    Session::with_config(SessionConfig::default())
  }

  pub fn with_config(config: SessionConfig) -> Session {
    Session {
      points: Vec::new(),
      algorithm: config.algorithm,
      hull: Vec::new(),
      trace: None,
      cursor: 0,
      finished: false,
      playing: false,
      speed: config.speed,
      elapsed: None,
      observers: Vec::new(),
      next_observer: 0,
    }
  }

  ///////////////////////////////////////////////////////////////////////////
  // Observers

  /// Register a callback for every [`SessionEvent`].
  pub fn subscribe<F>(&mut self, observer: F) -> ObserverId
  where
    F: FnMut(&SessionEvent) + 'static,
  {
    let id = ObserverId(self.next_observer);
    self.next_observer += 1;
    self.observers.push((id, Box::new(observer)));
    id
  }

  /// Returns false if `id` was not registered.
  pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
    let before = self.observers.len();
    self.observers.retain(|(other, _)| *other != id);
    self.observers.len() != before
  }

  fn notify(&mut self, event: SessionEvent) {
    for (_, observer) in self.observers.iter_mut() {
      observer(&event);
    }
  }

  fn notify_step(&mut self) {
    self.notify(SessionEvent::StateChanged);
    let (current, total) = (self.cursor, self.total_steps());
    self.notify(SessionEvent::StepChanged { current, total });
  }

  ///////////////////////////////////////////////////////////////////////////
  // Point set

  pub fn add_point(&mut self, pt: Point) {
    self.points.push(pt);
    self.invalidate();
    self.notify(SessionEvent::StateChanged);
  }

  pub fn add_points<I>(&mut self, pts: I)
  where
    I: IntoIterator<Item = Point>,
  {
    for pt in pts {
      self.add_point(pt);
    }
  }

  /// Add `count` random points with integer coordinates inside a
  /// `width` × `height` canvas. Does nothing on an empty canvas.
  pub fn add_random_points<R: Rng + ?Sized>(
    &mut self,
    count: usize,
    width: u32,
    height: u32,
    rng: &mut R,
  ) {
    if width == 0 || height == 0 {
      return;
    }
    for _ in 0..count {
      let pt = Point::random_in(width, height, rng);
      self.add_point(pt);
    }
  }

  /// Remove all points and everything computed from them.
  pub fn clear(&mut self) {
    self.points.clear();
    self.invalidate();
    self.elapsed = None;
    log::debug!("session cleared");
    self.notify(SessionEvent::StateChanged);
  }

  pub fn select_algorithm(&mut self, algorithm: Algorithm) {
    self.algorithm = algorithm;
    self.invalidate();
    log::debug!("selected {}", algorithm);
    self.notify(SessionEvent::StateChanged);
  }

  // Drop the hull, the trace and the cursor. Stops playback.
  fn invalidate(&mut self) {
    self.hull.clear();
    self.trace = None;
    self.cursor = 0;
    self.finished = false;
    self.playing = false;
  }

  ///////////////////////////////////////////////////////////////////////////
  // Running

  /// Compute the hull in one go, skipping the trace.
  ///
  /// Does nothing with fewer than [`MIN_POINTS`] points or when the session
  /// is already finished.
  pub fn compute_instant(&mut self) {
    if self.finished || self.points.len() < MIN_POINTS {
      return;
    }
    let start = Instant::now();
    let hull = self.algorithm.compute_hull(&self.points);
    let elapsed = start.elapsed();

    self.hull = hull.into_inner();
    self.trace = None;
    self.cursor = 0;
    self.playing = false;
    self.finished = true;
    self.elapsed = Some(elapsed);
    log::debug!(
      "{}: {} hull points in {:?}",
      self.algorithm,
      self.hull.len(),
      elapsed
    );
    self.notify(SessionEvent::StateChanged);
  }

  /// Generate the trace for the current points and algorithm unless it
  /// already exists.
  pub fn build_trace(&mut self) {
    if self.trace.is_some() {
      return;
    }
    let start = Instant::now();
    let trace = self.algorithm.generate_trace(&self.points);
    let elapsed = start.elapsed();
    log::debug!(
      "{}: {} steps for {} points in {:?}",
      self.algorithm,
      trace.len(),
      self.points.len(),
      elapsed
    );
    self.elapsed = Some(elapsed);
    self.trace = Some(trace);
  }

  /// Apply the next trace step, building the trace first if needed.
  ///
  /// Applying the last step finishes the session and stops playback. Does
  /// nothing once finished.
  pub fn step_forward(&mut self) {
    if self.finished {
      return;
    }
    self.build_trace();
    let Some(trace) = &self.trace else {
      return;
    };
    let total = trace.len();
    if self.cursor >= total {
      return;
    }
    self.cursor += 1;
    self.hull = trace[self.cursor - 1].hull().to_vec();
    log::trace!(
      "step {}/{}: {}",
      self.cursor,
      total,
      trace[self.cursor - 1].description()
    );
    if self.cursor == total {
      self.finished = true;
      self.playing = false;
    }
    self.notify_step();
  }

  /// Undo the last applied step. Stepping back from the end un-finishes the
  /// session.
  pub fn step_backward(&mut self) {
    if self.cursor == 0 {
      return;
    }
    self.cursor -= 1;
    self.hull = match (&self.trace, self.cursor) {
      (Some(trace), cursor) if cursor > 0 => trace[cursor - 1].hull().to_vec(),
      _ => Vec::new(),
    };
    self.finished = false;
    log::trace!("step back to {}/{}", self.cursor, self.total_steps());
    self.notify_step();
  }

  ///////////////////////////////////////////////////////////////////////////
  // Playback

  /// Start automatic stepping. Requires at least [`MIN_POINTS`] points.
  pub fn play(&mut self) {
    if self.points.len() < MIN_POINTS || self.finished {
      return;
    }
    self.build_trace();
    self.playing = true;
    log::debug!("playing every {:?}", self.speed);
  }

  pub fn pause(&mut self) {
    self.playing = false;
  }

  /// Change the delay between automatic steps. The host picks it up with
  /// its next tick.
  pub fn set_speed(&mut self, speed: Duration) {
    self.speed = speed;
  }

  /// Timer tick. Steps forward while playing; returns whether it did.
  pub fn advance(&mut self) -> bool {
    if !self.playing {
      return false;
    }
    let before = self.cursor;
    self.step_forward();
    self.cursor != before
  }

  ///////////////////////////////////////////////////////////////////////////
  // Accessors

  pub fn points(&self) -> &[Point] {
    &self.points
  }

  /// The visible hull: the snapshot of the current step, or the instantly
  /// computed hull. Implicitly closed.
  pub fn hull(&self) -> &[Point] {
    &self.hull
  }

  pub fn algorithm(&self) -> Algorithm {
    self.algorithm
  }

  pub fn algorithm_name(&self) -> &'static str {
    self.algorithm.name()
  }

  pub fn trace(&self) -> Option<&Trace> {
    self.trace.as_ref()
  }

  /// The most recently applied trace step.
  pub fn current_step(&self) -> Option<&TraceStep> {
    let trace = self.trace.as_ref()?;
    self.cursor.checked_sub(1).and_then(|idx| trace.get(idx))
  }

  pub fn current_step_index(&self) -> usize {
    self.cursor
  }

  pub fn total_steps(&self) -> usize {
    self.trace.as_ref().map_or(0, Trace::len)
  }

  /// Is `pt` part of the current step? Tolerates small coordinate
  /// differences.
  pub fn is_highlighted(&self, pt: &Point) -> bool {
    self.current_step().is_some_and(|step| step.involves(pt))
  }

  pub fn is_finished(&self) -> bool {
    self.finished
  }

  pub fn is_playing(&self) -> bool {
    self.playing
  }

  pub fn speed(&self) -> Duration {
    self.speed
  }

  pub fn elapsed(&self) -> Option<Duration> {
    self.elapsed
  }

  /// Wall-clock time of the last computation, 0 if nothing ran yet.
  pub fn elapsed_secs(&self) -> f64 {
    self.elapsed.map_or(0.0, |elapsed| elapsed.as_secs_f64())
  }

  pub fn state(&self) -> SessionState {
    if self.finished {
      SessionState::Finished
    } else if self.cursor > 0 {
      SessionState::Running(self.cursor)
    } else if self.points.is_empty() {
      SessionState::Empty
    } else if self.points.len() < MIN_POINTS {
      SessionState::Accumulating
    } else {
      SessionState::ReadyToRun
    }
  }

  pub fn status_line(&self) -> String {
    format!(
      "Algorithm: {} | Time: {:.4} s",
      self.algorithm_name(),
      self.elapsed_secs()
    )
  }
}
