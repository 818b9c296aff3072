//! Point type and the dominance predicate.
//!
//! - `Point`: integer 2D coordinate pair, compared by value.
//! - `dominates`: strict-on-both-axes order underlying maximality.

use nalgebra::Vector2;

/// 2D point with exact integer coordinates.
///
/// Invariants:
/// - No identity beyond the coordinate values; equality is componentwise.
/// - The full `i64` range is valid on both axes (no sentinel values are
///   reserved anywhere in this module tree).
pub type Point = Vector2<i64>;

/// Strict dominance: `a` dominates `b` iff `a.x > b.x && a.y > b.y`.
///
/// Equal coordinates never dominate, so two coincident points are mutually
/// undominated.
#[inline]
pub fn dominates(a: Point, b: Point) -> bool {
    a.x > b.x && a.y > b.y
}
