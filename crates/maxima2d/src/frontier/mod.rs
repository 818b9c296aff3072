//! 2D maxima (strict dominance frontier).
//!
//! Purpose
//! - Provide one solver, `maximal_points`, returning every point of the
//!   input that no other point strictly exceeds in both coordinates.
//! - Keep the API minimal (KISS, YAGNI): borrowed slice in, owned `Vec` out,
//!   no solver state.
//!
//! Semantics
//! - Dominance is strict on both axes: equal x or equal y never dominates.
//!   Coincident duplicates are therefore mutually undominated and both
//!   appear in the result.
//! - The naive O(n²) check in `util` is the source of truth; the divide-
//!   and-conquer solver must agree with it on every input.

pub mod rand;
mod solve;
mod types;
mod util;

pub use solve::maximal_points;
pub use types::{dominates, Point};
pub use util::maximal_points_naive;
