use serde::{Deserialize, Serialize};
use std::ops::Deref;

use super::{Point, PointLocation};
use crate::{Error, Orientation};

///////////////////////////////////////////////////////////////////////////////
// DirectedEdge

// Directed edge from A to B, including A and excluding B.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectedEdge {
  pub src: Point,
  pub dst: Point,
}

impl DirectedEdge {
  /// Is `pt` on the closed segment between `src` and `dst`?
  pub fn contains(&self, pt: &Point) -> bool {
    if !self.src.orientation(&self.dst, pt).is_colinear() {
      return false;
    }
    let (min_x, max_x) = min_max(self.src.x_coord(), self.dst.x_coord());
    let (min_y, max_y) = min_max(self.src.y_coord(), self.dst.y_coord());
    (min_x..=max_x).contains(&pt.x_coord()) && (min_y..=max_y).contains(&pt.y_coord())
  }
}

fn min_max(a: f64, b: f64) -> (f64, f64) {
  if a <= b {
    (a, b)
  } else {
    (b, a)
  }
}

///////////////////////////////////////////////////////////////////////////////
// Hull

/// Vertices of a convex hull in counter-clockwise order.
///
/// The polygon is implicitly closed: the last vertex connects back to the
/// first. Hulls of fewer than three points (or of colinear points) are
/// degenerate and contain the extreme points only.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hull(Vec<Point>);

impl Hull {
  pub fn new(vertices: Vec<Point>) -> Hull {
    Hull(vertices)
  }

  pub fn into_inner(self) -> Vec<Point> {
    self.0
  }

  pub fn as_slice(&self) -> &[Point] {
    &self.0
  }

  /// $O(n)$ Iterate the boundary edges, including the closing edge.
  ///
  /// A single vertex has no edges. Two vertices have two opposite edges.
  pub fn edges(&self) -> impl Iterator<Item = DirectedEdge> + '_ {
    let n = if self.0.len() < 2 { 0 } else { self.0.len() };
    (0..n).map(move |i| DirectedEdge {
      src: self.0[i],
      dst: self.0[(i + 1) % n],
    })
  }

  /// $O(n)$ Locate a point relative to the hull.
  ///
  /// Works for degenerate hulls: a hull of one vertex only has that vertex on
  /// its boundary, a hull of two vertices is the segment between them.
  pub fn locate(&self, pt: &Point) -> PointLocation {
    match self.0.len() {
      0 => PointLocation::Outside,
      1 if &self.0[0] == pt => PointLocation::OnBoundary,
      1 => PointLocation::Outside,
      2 => {
        if self.edges().any(|edge| edge.contains(pt)) {
          PointLocation::OnBoundary
        } else {
          PointLocation::Outside
        }
      }
      _ => {
        let mut on_boundary = false;
        for edge in self.edges() {
          match edge.src.orientation(&edge.dst, pt) {
            Orientation::ClockWise => return PointLocation::Outside,
            Orientation::CoLinear => on_boundary = true,
            Orientation::CounterClockWise => {}
          }
        }
        if on_boundary {
          PointLocation::OnBoundary
        } else {
          PointLocation::Inside
        }
      }
    }
  }

  /// $O(n)$ Check that the hull is a strictly convex, counter-clockwise polygon.
  pub fn validate(&self) -> Result<(), Error> {
    let n = self.0.len();
    if n < 3 {
      return Err(Error::InsufficientVertices);
    }
    for i in 0..n {
      let prev = &self.0[(i + n - 1) % n];
      let next = &self.0[(i + 1) % n];
      if prev.orientation(&self.0[i], next) != Orientation::CounterClockWise {
        return Err(Error::ConvexViolation);
      }
    }
    Ok(())
  }

  /// Same cyclic sequence of vertices, allowing rotation and reflection.
  pub fn is_cyclic_equivalent(&self, other: &Hull) -> bool {
    let n = self.0.len();
    if n != other.0.len() {
      return false;
    }
    if n == 0 {
      return true;
    }
    let reversed: Vec<Point> = other.0.iter().rev().copied().collect();
    (0..n).any(|shift| {
      (0..n).all(|i| self.0[i] == other.0[(i + shift) % n])
        || (0..n).all(|i| self.0[i] == reversed[(i + shift) % n])
    })
  }

  /// Smallest and largest corners of the axis aligned bounding box.
  pub fn bounding_box(&self) -> Option<(Point, Point)> {
    bounding_box(&self.0)
  }
}

/// Smallest and largest corners of the axis aligned bounding box of `pts`.
pub fn bounding_box(pts: &[Point]) -> Option<(Point, Point)> {
  let first = pts.first()?;
  let (mut min, mut max) = (first.array, first.array);
  for pt in pts {
    for axis in 0..2 {
      min[axis] = min[axis].min(pt[axis]);
      max[axis] = max[axis].max(pt[axis]);
    }
  }
  Some((Point::new(min), Point::new(max)))
}

impl Deref for Hull {
  type Target = [Point];
  fn deref(&self) -> &[Point] {
    &self.0
  }
}

impl From<Vec<Point>> for Hull {
  fn from(vertices: Vec<Point>) -> Hull {
    Hull(vertices)
  }
}

impl From<Hull> for Vec<Point> {
  fn from(hull: Hull) -> Vec<Point> {
    hull.0
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  use claims::{assert_err_eq, assert_none, assert_ok};

  fn hull(pts: &[(f64, f64)]) -> Hull {
    Hull::new(pts.iter().copied().map(Point::from).collect())
  }

  #[test]
  fn triangle_locate() {
    let tri = hull(&[(0., 0.), (4., 0.), (2., 3.)]);
    assert_ok!(tri.validate());
    assert_eq!(tri.locate(&Point::new([2., 1.])), PointLocation::Inside);
    assert_eq!(tri.locate(&Point::new([2., 0.])), PointLocation::OnBoundary);
    assert_eq!(tri.locate(&Point::new([0., 0.])), PointLocation::OnBoundary);
    assert_eq!(tri.locate(&Point::new([5., 5.])), PointLocation::Outside);
    assert_eq!(tri.locate(&Point::new([2., -0.5])), PointLocation::Outside);
  }

  #[test]
  fn degenerate_locate() {
    assert_eq!(Hull::default().locate(&Point::new([0., 0.])), PointLocation::Outside);

    let single = hull(&[(1., 1.)]);
    assert_eq!(single.locate(&Point::new([1., 1.])), PointLocation::OnBoundary);
    assert_eq!(single.locate(&Point::new([1., 2.])), PointLocation::Outside);

    let segment = hull(&[(0., 0.), (2., 0.)]);
    assert_eq!(segment.locate(&Point::new([1., 0.])), PointLocation::OnBoundary);
    assert_eq!(segment.locate(&Point::new([3., 0.])), PointLocation::Outside);
    assert_eq!(segment.locate(&Point::new([1., 1.])), PointLocation::Outside);
  }

  #[test]
  fn validate_rejects_clockwise() {
    let cw = hull(&[(0., 0.), (2., 3.), (4., 0.)]);
    assert_err_eq!(cw.validate(), Error::ConvexViolation);
  }

  #[test]
  fn validate_rejects_colinear_vertex() {
    let square = hull(&[(0., 0.), (1., 0.), (2., 0.), (2., 2.), (0., 2.)]);
    assert_err_eq!(square.validate(), Error::ConvexViolation);
  }

  #[test]
  fn validate_rejects_small() {
    assert_err_eq!(hull(&[(0., 0.), (1., 0.)]).validate(), Error::InsufficientVertices);
  }

  #[test]
  fn edges_close_the_polygon() {
    let tri = hull(&[(0., 0.), (4., 0.), (2., 3.)]);
    let edges: Vec<DirectedEdge> = tri.edges().collect();
    assert_eq!(edges.len(), 3);
    assert_eq!(edges[2].src, Point::new([2., 3.]));
    assert_eq!(edges[2].dst, Point::new([0., 0.]));
    assert_eq!(hull(&[(1., 1.)]).edges().count(), 0);
    assert_eq!(hull(&[(1., 1.), (2., 2.)]).edges().count(), 2);
  }

  #[test]
  fn cyclic_equivalence() {
    let a = hull(&[(0., 0.), (4., 0.), (2., 3.)]);
    let rotated = hull(&[(4., 0.), (2., 3.), (0., 0.)]);
    let reflected = hull(&[(2., 3.), (4., 0.), (0., 0.)]);
    let other = hull(&[(0., 0.), (4., 0.), (2., 4.)]);
    assert!(a.is_cyclic_equivalent(&rotated));
    assert!(a.is_cyclic_equivalent(&reflected));
    assert!(!a.is_cyclic_equivalent(&other));
    assert!(!a.is_cyclic_equivalent(&hull(&[(0., 0.), (4., 0.)])));
  }

  #[test]
  fn bounds() {
    let tri = hull(&[(0., 0.), (4., 0.), (2., 3.)]);
    assert_eq!(
      tri.bounding_box(),
      Some((Point::new([0., 0.]), Point::new([4., 3.])))
    );
    assert_none!(Hull::default().bounding_box());
  }
}
