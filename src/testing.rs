// Strategies for points, point sets and algorithms.
//
// Grid coordinates are small integers stored as f64. Cross products of such
// points are exact, and the small range makes duplicates and colinear
// triples common. Fractional grid points are multiples of 1/16 and keep that
// exactness. Points near rays use decimal steps, whose cross products round.
use crate::algorithms::Algorithm;
use crate::data::Point;

use core::ops::Range;
use proptest::collection::*;
use proptest::prelude::*;
use proptest::sample::{select, Select};

pub const GRID: Range<i32> = -50..50;

pub fn any_grid_point() -> impl Strategy<Value = Point> {
  (GRID, GRID).prop_map(|(x, y)| Point::new([f64::from(x), f64::from(y)]))
}

pub fn grid_points(size: Range<usize>) -> impl Strategy<Value = Vec<Point>> {
  vec(any_grid_point(), size)
}

pub fn any_fractional_point() -> impl Strategy<Value = Point> {
  let sixteenths = GRID.start * 16..GRID.end * 16;
  (sixteenths.clone(), sixteenths)
    .prop_map(|(x, y)| Point::new([f64::from(x) / 16.0, f64::from(y) / 16.0]))
}

pub fn fractional_points(size: Range<usize>) -> impl Strategy<Value = Vec<Point>> {
  vec(any_fractional_point(), size)
}

// Directions of the rays through the origin, all pointing upwards.
const RAYS: [(f64, f64); 3] = [(0.1, 0.3), (0.7, 0.2), (-0.3, 0.5)];

/// The origin plus points at decimal steps along a few rays through it, some
/// nudged sideways by a few nanometres. The origin is the lowest point, so it
/// is the Graham pivot.
pub fn near_ray_points(size: Range<usize>) -> impl Strategy<Value = Vec<Point>> {
  vec((0..RAYS.len(), 1u32..200, -2i32..=2), size).prop_map(|picks| {
    let mut pts = vec![Point::new([0., 0.])];
    pts.extend(picks.into_iter().map(|(ray, step, nudge)| {
      let (dx, dy) = RAYS[ray];
      let t = f64::from(step);
      Point::new([t * dx + f64::from(nudge) * 1e-9, t * dy])
    }));
    pts
  })
}

impl Arbitrary for Algorithm {
  type Strategy = Select<Algorithm>;
  type Parameters = ();
  fn arbitrary_with(_params: ()) -> Self::Strategy {
    select(Algorithm::ALL.to_vec())
  }
}
