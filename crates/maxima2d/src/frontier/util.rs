//! Naive pairwise reference solver.

use super::types::{dominates, Point};

/// O(n²) maxima by checking every pair.
///
/// Referee for the divide-and-conquer solver: the two must return the same
/// multiset on every input. Result keeps the input order.
pub fn maximal_points_naive(points: &[Point]) -> Vec<Point> {
    points
        .iter()
        .copied()
        .filter(|&p| !points.iter().any(|&q| dominates(q, p)))
        .collect()
}
