use serde::{Deserialize, Serialize};

use crate::data::Point;

#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone, Hash, Serialize, Deserialize)]
pub enum Orientation {
  CoLinear,
  ClockWise,
  CounterClockWise,
}

impl Orientation {
  /// Determine the direction you have to turn if you walk from `p1`
  /// to `p2` to `p3`.
  ///
  /// The sign of the cross product `(p2 - p1) × (p3 - p2)` is tested against
  /// exactly zero. No tolerance is applied, so nearly colinear points are
  /// reported as turning.
  ///
  /// # Examples
  ///
  /// ```rust
  /// # use hullviz::data::Point;
  /// # use hullviz::Orientation;
  /// let p1 = Point::new([0., 0.]);
  /// let p2 = Point::new([0., 1.]); // One unit above p1.
  /// // (0,0) -> (0,1) -> (0,2) == Orientation::CoLinear
  /// assert!(Orientation::new(&p1, &p2, &Point::new([0., 2.])).is_colinear());
  /// // (0,0) -> (0,1) -> (-1,2) == Orientation::CounterClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new([-1., 2.])).is_ccw());
  /// // (0,0) -> (0,1) -> (1,2) == Orientation::ClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new([1., 2.])).is_cw());
  /// ```
  pub fn new(p1: &Point, p2: &Point, p3: &Point) -> Orientation {
    let cross = (p2.x_coord() - p1.x_coord()) * (p3.y_coord() - p2.y_coord())
      - (p2.y_coord() - p1.y_coord()) * (p3.x_coord() - p2.x_coord());
    if cross > 0.0 {
      Orientation::CounterClockWise
    } else if cross < 0.0 {
      Orientation::ClockWise
    } else {
      Orientation::CoLinear
    }
  }

  pub fn is_colinear(self) -> bool {
    matches!(self, Orientation::CoLinear)
  }

  pub fn is_ccw(self) -> bool {
    matches!(self, Orientation::CounterClockWise)
  }

  pub fn is_cw(self) -> bool {
    matches!(self, Orientation::ClockWise)
  }

  /// Human readable name, used in trace descriptions.
  pub fn describe(self) -> &'static str {
    match self {
      Orientation::CounterClockWise => "a left turn",
      Orientation::ClockWise => "a right turn",
      Orientation::CoLinear => "colinear",
    }
  }
}

/// Shorthand for [`Orientation::new`].
pub fn orientation(a: &Point, b: &Point, c: &Point) -> Orientation {
  Orientation::new(a, b, c)
}
