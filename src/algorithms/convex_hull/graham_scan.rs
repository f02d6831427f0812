use ordered_float::OrderedFloat;
use std::cmp::Ordering;

use crate::data::{Hull, Point};
use crate::trace::{self, Trace, TraceBuilder};

// https://en.wikipedia.org/wiki/Graham_scan

// Properties:
//    No panics, for any finite input.
//    Colinear points are dropped from the hull.
//    No points are outside the resulting convex polygon.
//    Exact for inputs whose cross products are exact (e.g. integer coordinates).
/// $O(n \log n)$ Convex hull of a set of points.
///
/// [Graham scan][wiki]: pick the lowest point (leftmost on ties) as the
/// pivot, sort the remaining points counter-clockwise around it and walk
/// them with a stack that only keeps left turns.
///
/// Inputs of fewer than three points are returned as-is.
///
/// # Examples
///
/// ```rust
/// # use hullviz::algorithms::convex_hull::graham_scan::convex_hull;
/// # use hullviz::data::Point;
/// let pts = vec![
///   Point::new([2., 3.]),
///   Point::new([4., 0.]),
///   Point::new([2., 1.]),
///   Point::new([0., 0.]),
/// ];
/// let hull = convex_hull(&pts);
/// assert_eq!(
///   hull.as_slice(),
///   &[Point::new([0., 0.]), Point::new([4., 0.]), Point::new([2., 3.])]
/// );
/// ```
///
/// [wiki]: https://en.wikipedia.org/wiki/Graham_scan
pub fn convex_hull(points: &[Point]) -> Hull {
  if points.len() < 3 {
    return Hull::new(points.to_vec());
  }
  let (pivot, pts) = sorted_around_pivot(points);

  // Only the pivot is pushed up front. The first two sorted points go through
  // the pop loop like every other point, which drops colinear ones.
  let mut hull = vec![pivot];
  for pt in pts {
    while let [.., p1, p2] = hull.as_slice() {
      if p1.orientation(p2, &pt).is_ccw() {
        break;
      }
      hull.pop();
    }
    hull.push(pt);
  }
  // Close the polygon. With rounded coordinates the angular order can be off
  // for points nearly colinear with the pivot, leaving a last vertex that does
  // not turn left back to it.
  while let [_, .., p1, p2] = hull.as_slice() {
    if p1.orientation(p2, &pivot).is_ccw() {
      break;
    }
    hull.pop();
  }
  log::debug!(
    "graham scan: pivot {}, {} of {} points on the hull",
    pivot,
    hull.len(),
    points.len()
  );
  Hull::new(hull)
}

/// Same computation as [`convex_hull`], recording every step.
pub fn trace(points: &[Point]) -> Trace {
  if points.len() < 3 {
    return trace::degenerate(points);
  }
  let (pivot, pts) = sorted_around_pivot(points);

  let mut builder = TraceBuilder::new();
  builder.highlight_points(
    vec![pivot],
    format!("Pivot {} is the lowest point, leftmost on ties", pivot),
  );
  builder.highlight_points(
    pts.clone(),
    format!(
      "Sorted the other {} points by angle around the pivot, nearest first on ties",
      pts.len()
    ),
  );

  builder.push(pivot);
  for pt in pts {
    builder.scan(pt);
  }
  builder.close(&pivot);
  let hull = builder.stack().to_vec();
  let summary = trace::summary(&hull, points.len());
  let trace = builder.finish(hull, summary);
  log::debug!("graham scan: recorded {} steps", trace.len());
  trace
}

// Split off the pivot and sort the remaining points counter-clockwise around
// it. Points at the same angle are ordered by distance from the pivot.
//
// The sort key is computed per point, so the order is total even where
// rounding makes pairwise orientation tests contradict each other.
fn sorted_around_pivot(points: &[Point]) -> (Point, Vec<Point>) {
  let mut pivot_idx = 0;
  for (idx, pt) in points.iter().enumerate().skip(1) {
    if pt.lowest_cmp(&points[pivot_idx]) == Ordering::Less {
      pivot_idx = idx;
    }
  }
  let pivot = points[pivot_idx];

  let mut pts: Vec<Point> = points
    .iter()
    .enumerate()
    .filter(|(idx, _)| *idx != pivot_idx)
    .map(|(_, pt)| *pt)
    .collect();
  pts.sort_by_key(|pt| {
    (
      OrderedFloat(pseudo_angle(&pivot, pt)),
      OrderedFloat(pivot.squared_euclidean_distance(pt)),
    )
  });
  (pivot, pts)
}

// Increases with the angle of `pt - pivot` over [0, π]: 0 along +x, 2 along
// -x. Requires `pt` not below the pivot. Equal directions with integer (or
// other exactly representable) offsets get equal values.
fn pseudo_angle(pivot: &Point, pt: &Point) -> f64 {
  let dx = pt.x_coord() - pivot.x_coord();
  let dy = pt.y_coord() - pivot.y_coord();
  let len = dx.abs() + dy;
  if len == 0.0 {
    0.0
  } else {
    1.0 - dx / len
  }
}
