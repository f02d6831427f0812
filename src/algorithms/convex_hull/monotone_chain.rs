use crate::data::{Hull, Point};
use crate::trace::{self, Trace, TraceBuilder};

// https://en.wikibooks.org/wiki/Algorithm_Implementation/Geometry/Convex_hull/Monotone_chain

// Properties:
//    No panics.
//    Colinear points are dropped from the hull.
//    No points are outside the resulting convex polygon.
/// $O(n \log n)$ Convex hull of a set of points.
///
/// [Andrew's monotone chain][wiki]: sort the points by x (then y), build the
/// lower hull left to right and the upper hull right to left, keeping only
/// left turns on each chain.
///
/// Inputs of fewer than three points are returned as-is.
///
/// # Examples
///
/// ```rust
/// # use hullviz::algorithms::convex_hull::monotone_chain::convex_hull;
/// # use hullviz::data::Point;
/// let pts = vec![
///   Point::new([0., 0.]),
///   Point::new([1., 0.]),
///   Point::new([2., 0.]),
/// ];
/// let hull = convex_hull(&pts);
/// assert_eq!(hull.as_slice(), &[Point::new([0., 0.]), Point::new([2., 0.])]);
/// ```
///
/// [wiki]: https://en.wikibooks.org/wiki/Algorithm_Implementation/Geometry/Convex_hull/Monotone_chain
pub fn convex_hull(points: &[Point]) -> Hull {
  if points.len() < 3 {
    return Hull::new(points.to_vec());
  }
  let pts = sorted(points);

  let mut lower = build_half(pts.iter());
  let mut upper = build_half(pts.iter().rev());

  // The last point of each chain is the first point of the other.
  lower.pop();
  upper.pop();
  lower.extend(upper);
  log::debug!(
    "monotone chain: {} of {} points on the hull",
    lower.len(),
    points.len()
  );
  Hull::new(lower)
}

/// Same computation as [`convex_hull`], recording every step.
pub fn trace(points: &[Point]) -> Trace {
  if points.len() < 3 {
    return trace::degenerate(points);
  }
  let pts = sorted(points);

  let mut builder = TraceBuilder::new();
  builder.highlight_points(
    pts.clone(),
    format!("Sorted {} points by x, breaking ties by y", pts.len()),
  );

  builder.begin_chain("lower hull");
  for pt in pts.iter() {
    builder.scan(*pt);
  }
  let mut lower = builder.stack().to_vec();
  builder.highlight_points(
    lower.clone(),
    format!(
      "Lower hull done with {} points, scanning right to left for the upper hull",
      lower.len()
    ),
  );

  builder.begin_chain("upper hull");
  for pt in pts.iter().rev() {
    builder.scan(*pt);
  }
  let mut upper = builder.stack().to_vec();

  lower.pop();
  upper.pop();
  lower.extend(upper);
  let summary = trace::summary(&lower, points.len());
  let trace = builder.finish(lower, summary);
  log::debug!("monotone chain: recorded {} steps", trace.len());
  trace
}

fn sorted(points: &[Point]) -> Vec<Point> {
  let mut pts = points.to_vec();
  pts.sort_by(Point::lexicographic_cmp);
  pts
}

// Keep only left turns. Pops the middle point of every right turn or
// colinear triple.
fn build_half<'a>(pts: impl Iterator<Item = &'a Point>) -> Vec<Point> {
  let mut chain: Vec<Point> = Vec::new();
  for pt in pts {
    while let [.., p1, p2] = chain.as_slice() {
      if p1.orientation(p2, pt).is_ccw() {
        break;
      }
      chain.pop();
    }
    chain.push(*pt);
  }
  chain
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::trace::StepKind;

  use claims::assert_ok;

  #[test]
  fn convex_hull_colinear() {
    let points = vec![
      Point::new([0., 0.]),
      Point::new([1., 0.]),
      Point::new([2., 0.]),
      Point::new([3., 0.]),
      Point::new([4., 0.]),
      Point::new([1., 1.]),
    ];
    let hull = convex_hull(&points);
    assert_ok!(hull.validate());
    assert_eq!(
      hull.as_slice(),
      &[Point::new([0., 0.]), Point::new([4., 0.]), Point::new([1., 1.])]
    );
  }

  #[test]
  fn convex_hull_square_with_center() {
    let points = vec![
      Point::new([2., 2.]),
      Point::new([0., 2.]),
      Point::new([1., 1.]),
      Point::new([0., 0.]),
      Point::new([2., 0.]),
    ];
    let hull = convex_hull(&points);
    // Counter-clockwise, starting from the leftmost-lowest point.
    assert_eq!(
      hull.as_slice(),
      &[
        Point::new([0., 0.]),
        Point::new([2., 0.]),
        Point::new([2., 2.]),
        Point::new([0., 2.]),
      ]
    );
  }

  #[test]
  fn duplicates() {
    let points = vec![Point::new([1., 1.]); 4];
    let hull = convex_hull(&points);
    assert_eq!(hull.len(), 2);
    assert!(hull.iter().all(|pt| pt == &Point::new([1., 1.])));
  }

  #[test]
  fn trace_triangle() {
    let points = vec![
      Point::new([0., 0.]),
      Point::new([4., 0.]),
      Point::new([2., 3.]),
    ];
    let trace = trace(&points);
    assert_eq!(trace[0].kind(), StepKind::HighlightPoint);
    assert_eq!(
      trace[0].points(),
      &[Point::new([0., 0.]), Point::new([2., 3.]), Point::new([4., 0.])]
    );
    // Lower hull: (2,3) is pushed, then popped on the right turn to (4,0).
    // The upper hull only turns left.
    assert_eq!(trace.count(StepKind::RemoveFromHull), 1);
    assert_eq!(trace.last().kind(), StepKind::FinalHull);
    assert_eq!(
      trace.last().hull(),
      &[Point::new([0., 0.]), Point::new([4., 0.]), Point::new([2., 3.])]
    );
    assert!(trace.last().description().contains("3 of 3"));
  }

  #[test]
  fn trace_upper_snapshot_includes_lower_hull() {
    let points = vec![
      Point::new([0., 0.]),
      Point::new([4., 0.]),
      Point::new([2., 3.]),
    ];
    let trace = trace(&points);
    let upper_start = trace
      .iter()
      .position(|step| {
        step.kind() == StepKind::AddToHull && step.description().contains("upper hull")
      })
      .unwrap();
    // The lower hull (0,0),(4,0) stays visible while the upper hull grows.
    assert_eq!(
      trace[upper_start].hull(),
      &[Point::new([0., 0.]), Point::new([4., 0.])]
    );
  }
}
