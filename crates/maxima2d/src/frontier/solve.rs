//! Divide-and-conquer maxima solver.
//!
//! Purpose
//! - O(n log n) computation of the strict-dominance maxima of a point set.
//!
//! Why this design
//! - Once the points are x-sorted, a left point can never dominate a right
//!   point, so every right maximum is a maximum of the whole range and the
//!   combine only has to discard left maxima against the right sub-slice.
//! - The combine consults the *whole* right sub-slice, not just its maxima:
//!   a dominating point need not itself be maximal.
//! - A suffix maximum of y plus one binary search per left maximum keeps the
//!   discard test exact under tied x and tied y, where comparing against the
//!   right sub-slice's single peak y would over-discard (equal x and equal y
//!   never dominate).

use super::types::Point;

/// All maximal points of `points` under strict dominance.
///
/// - Empty input yields an empty result (not an error).
/// - Every returned point is one of the input points; coincident duplicates
///   are kept, and no returned point dominates another.
/// - Output order is unspecified; callers needing a canonical order sort
///   the result themselves. The input slice is never reordered.
pub fn maximal_points(points: &[Point]) -> Vec<Point> {
    if points.is_empty() {
        return Vec::new();
    }
    let mut sorted = points.to_vec();
    // Lexicographic (x, y): the x order is what the divide step needs; the
    // y tiebreak only makes runs deterministic.
    sorted.sort_unstable_by_key(|p| (p.x, p.y));
    solve(&sorted)
}

/// Recursive solve over a non-empty x-sorted slice.
fn solve(pts: &[Point]) -> Vec<Point> {
    debug_assert!(!pts.is_empty());
    if pts.len() == 1 {
        return vec![pts[0]];
    }

    let (left, right) = pts.split_at(pts.len() / 2);
    let maxima_left = solve(left);
    let mut maxima = solve(right);

    // suffix_max_y[i] = max y over right[i..]. Seeded from the last element
    // rather than a fixed minimum, so i64::MIN coordinates stay valid.
    let mut suffix_max_y = vec![right[right.len() - 1].y; right.len()];
    for i in (0..right.len() - 1).rev() {
        suffix_max_y[i] = right[i].y.max(suffix_max_y[i + 1]);
    }

    // A left maximum survives iff no right point strictly exceeds it on
    // both axes. Right points sharing its x are skipped by the partition:
    // equal x never dominates.
    for p in maxima_left {
        let beyond = right.partition_point(|q| q.x <= p.x);
        let dominated = beyond < right.len() && suffix_max_y[beyond] > p.y;
        if !dominated {
            maxima.push(p);
        }
    }
    maxima
}
