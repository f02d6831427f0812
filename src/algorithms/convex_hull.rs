//! Convex hull strategies.
//!
//! Both strategies return the hull in counter-clockwise order without a
//! duplicated closing vertex. Inputs of fewer than three points are returned
//! unchanged.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::data::{Hull, Point};
use crate::trace::Trace;
use crate::Error;

pub mod graham_scan;
pub mod monotone_chain;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
  /// Andrew's monotone chain.
  #[default]
  MonotoneChain,
  GrahamScan,
}

impl Algorithm {
  pub const ALL: [Algorithm; 2] = [Algorithm::MonotoneChain, Algorithm::GrahamScan];

  /// $O(n \log n)$ Convex hull of `points`.
  pub fn compute_hull(self, points: &[Point]) -> Hull {
    match self {
      Algorithm::MonotoneChain => monotone_chain::convex_hull(points),
      Algorithm::GrahamScan => graham_scan::convex_hull(points),
    }
  }

  /// $O(n \log n)$ Record every step of the hull computation.
  ///
  /// The hull of the final step equals [`Algorithm::compute_hull`].
  pub fn generate_trace(self, points: &[Point]) -> Trace {
    match self {
      Algorithm::MonotoneChain => monotone_chain::trace(points),
      Algorithm::GrahamScan => graham_scan::trace(points),
    }
  }

  pub fn name(self) -> &'static str {
    match self {
      Algorithm::MonotoneChain => "Andrew (Monotonic Chain)",
      Algorithm::GrahamScan => "Graham Scan",
    }
  }
}

impl fmt::Display for Algorithm {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

impl FromStr for Algorithm {
  type Err = Error;
  fn from_str(s: &str) -> Result<Algorithm, Error> {
    match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
      "monotone-chain" | "monotone" | "andrew" => Ok(Algorithm::MonotoneChain),
      "graham-scan" | "graham" => Ok(Algorithm::GrahamScan),
      _ => Err(Error::UnknownAlgorithm(s.to_string())),
    }
  }
}
