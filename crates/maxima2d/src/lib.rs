//! Maximal points of finite 2D point sets.
//!
//! A point dominates another when it is strictly greater in both
//! coordinates; the maximal points are those dominated by nobody. The
//! solver in `frontier` is the classic divide-and-conquer over an
//! x-sorted sequence, with an O(n²) referee kept alongside for tests and
//! benches.

pub mod frontier;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Convenience re-exports so callers can write `maxima2d::Point`.
pub use frontier::{dominates, maximal_points, maximal_points_naive, Point};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::frontier::rand::{draw_point_cloud, CloudCfg, ReplayToken};
    pub use crate::frontier::{dominates, maximal_points, maximal_points_naive, Point};
}
