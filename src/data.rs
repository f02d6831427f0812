pub(crate) mod point;
pub mod polygon;

#[doc(inline)]
pub use polygon::{DirectedEdge, Hull};
pub use point::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PointLocation {
  Inside,
  OnBoundary,
  Outside,
}
