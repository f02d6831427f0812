use array_init::array_init;
use ordered_float::OrderedFloat;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Deref;
use std::ops::Index;
use std::str::FromStr;

use crate::{Error, Orientation};

/// A point in the plane.
///
/// Points are plain values without identity. Two points compare equal with
/// `==` only if both coordinates are bit-for-bit equal; use
/// [`Point::approx_eq`] for display purposes.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct Point {
  pub array: [f64; 2],
}

// Random sampling in the unit square.
impl Distribution<Point> for Standard {
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point {
    Point {
      array: array_init(|_| rng.gen()),
    }
  }
}

impl Point {
  pub const fn new(array: [f64; 2]) -> Point {
    Point { array }
  }

  /// Like [`Point::new`] but rejects NaN and infinite coordinates.
  pub fn try_new(x: f64, y: f64) -> Result<Point, Error> {
    for coord in [x, y] {
      if !coord.is_finite() {
        return Err(Error::NonFiniteCoordinate(coord));
      }
    }
    Ok(Point::new([x, y]))
  }

  /// Uniformly sample a point with integer coordinates in `[0, width) × [0, height)`.
  ///
  /// # Panics
  ///
  /// Panics if `width` or `height` is zero.
  pub fn random_in<R: Rng + ?Sized>(width: u32, height: u32, rng: &mut R) -> Point {
    Point::new([
      f64::from(rng.gen_range(0..width)),
      f64::from(rng.gen_range(0..height)),
    ])
  }

  pub fn x_coord(&self) -> f64 {
    self.array[0]
  }

  pub fn y_coord(&self) -> f64 {
    self.array[1]
  }

  pub fn orientation(&self, q: &Point, r: &Point) -> Orientation {
    Orientation::new(self, q, r)
  }

  pub fn squared_euclidean_distance(&self, rhs: &Point) -> f64 {
    self
      .array
      .iter()
      .zip(rhs.array.iter())
      .map(|(a, b)| {
        let diff = a - b;
        diff * diff
      })
      .sum()
  }

  /// Compare the distances from `self` to `p` and from `self` to `q`.
  pub fn cmp_distance_to(&self, p: &Point, q: &Point) -> Ordering {
    OrderedFloat(self.squared_euclidean_distance(p))
      .cmp(&OrderedFloat(self.squared_euclidean_distance(q)))
  }

  /// Order by x, breaking ties by y. Total over all floats: `-0.0 == 0.0` and
  /// NaN sorts last.
  pub fn lexicographic_cmp(&self, other: &Point) -> Ordering {
    OrderedFloat(self.x_coord())
      .cmp(&OrderedFloat(other.x_coord()))
      .then_with(|| OrderedFloat(self.y_coord()).cmp(&OrderedFloat(other.y_coord())))
  }

  /// Order by y, breaking ties by x. The minimum is the Graham scan pivot.
  pub fn lowest_cmp(&self, other: &Point) -> Ordering {
    OrderedFloat(self.y_coord())
      .cmp(&OrderedFloat(other.y_coord()))
      .then_with(|| OrderedFloat(self.x_coord()).cmp(&OrderedFloat(other.x_coord())))
  }

  /// Both coordinates within `eps` of each other.
  pub fn approx_eq(&self, other: &Point, eps: f64) -> bool {
    (self.x_coord() - other.x_coord()).abs() <= eps && (self.y_coord() - other.y_coord()).abs() <= eps
  }
}

impl Index<usize> for Point {
  type Output = f64;
  fn index(&self, key: usize) -> &f64 {
    self.array.index(key)
  }
}

impl Deref for Point {
  type Target = [f64; 2];
  fn deref(&self) -> &[f64; 2] {
    &self.array
  }
}

impl From<(f64, f64)> for Point {
  fn from(point: (f64, f64)) -> Point {
    Point {
      array: [point.0, point.1],
    }
  }
}

impl From<Point> for (f64, f64) {
  fn from(point: Point) -> (f64, f64) {
    (point.array[0], point.array[1])
  }
}

impl fmt::Display for Point {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "({}, {})", self.x_coord(), self.y_coord())
  }
}

/// Parses `"x,y"`, optionally wrapped in parentheses.
impl FromStr for Point {
  type Err = Error;
  fn from_str(s: &str) -> Result<Point, Error> {
    let invalid = || Error::InvalidPoint(s.to_string());
    let inner = s
      .trim()
      .trim_start_matches('(')
      .trim_end_matches(')');
    let (x, y) = inner.split_once(',').ok_or_else(invalid)?;
    let x: f64 = x.trim().parse().map_err(|_| invalid())?;
    let y: f64 = y.trim().parse().map_err(|_| invalid())?;
    Point::try_new(x, y)
  }
}
