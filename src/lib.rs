#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
//! Convex hulls, one step at a time.
//!
//! Two classic planar convex hull algorithms ([Andrew's monotone
//! chain][algorithms::convex_hull::monotone_chain] and
//! [Graham scan][algorithms::convex_hull::graham_scan]) that can either run
//! to completion or record every stack decision into a replayable
//! [`Trace`](trace::Trace). A [`Session`](session::Session) owns a point set
//! and plays such a trace forwards and backwards for a rendering layer.
//!
//! ```rust
//! # use hullviz::algorithms::Algorithm;
//! # use hullviz::data::Point;
//! let pts = vec![
//!   Point::new([0., 0.]),
//!   Point::new([4., 0.]),
//!   Point::new([2., 3.]),
//!   Point::new([2., 1.]),
//! ];
//! let hull = Algorithm::GrahamScan.compute_hull(&pts);
//! assert_eq!(hull.len(), 3);
//! assert!(!hull.contains(&Point::new([2., 1.])));
//! ```

pub mod algorithms;
pub mod data;
mod orientation;
pub mod render;
pub mod session;
pub mod trace;

pub use orientation::{orientation, Orientation};

/// Tolerance used when asking whether a point takes part in a trace step.
///
/// The hull arithmetic itself is exact. This tolerance only applies to
/// highlighting.
pub const HIGHLIGHT_EPSILON: f64 = 0.01;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
  #[error("Coordinate is not finite: {0}")]
  NonFiniteCoordinate(f64),
  #[error("Invalid point {0:?}, expected \"x,y\"")]
  InvalidPoint(String),
  #[error("Unknown algorithm {0:?}, expected \"monotone-chain\" or \"graham-scan\"")]
  UnknownAlgorithm(String),
  #[error("Insufficient vertices")]
  InsufficientVertices,
  /// Two consecutive edges are either colinear or oriented clockwise.
  #[error("Convex violation")]
  ConvexViolation,
  #[error("Serialization failed: {0}")]
  Serialization(String),
}

#[cfg(test)]
pub mod testing;
