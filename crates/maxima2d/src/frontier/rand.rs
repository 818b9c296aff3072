//! Random integer point clouds (replay tokens for reproducibility).
//!
//! Purpose
//! - Provide a small, deterministic sampler for test and bench inputs. The
//!   generator is parameterizable, reproducible, and returns plain `Point`
//!   vectors ready for the solver.
//!
//! Model
//! - Coordinates are drawn independently and uniformly from a closed range.
//!   Small ranges are useful on purpose: they force tied x, tied y, and
//!   coincident duplicates, the cases where dominance strictness matters.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use super::types::Point;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Point-cloud sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct CloudCfg {
    /// Number of points to draw.
    pub count: usize,
    /// Inclusive lower bound for both coordinates.
    pub coord_min: i64,
    /// Inclusive upper bound for both coordinates.
    pub coord_max: i64,
}

impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            count: 64,
            coord_min: -1_000,
            coord_max: 1_000,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a random point cloud.
///
/// Bounds are swapped if given in reverse order, so any `(min, max)` pair is
/// accepted.
pub fn draw_point_cloud(cfg: CloudCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let lo = cfg.coord_min.min(cfg.coord_max);
    let hi = cfg.coord_min.max(cfg.coord_max);
    (0..cfg.count)
        .map(|_| Point::new(rng.gen_range(lo..=hi), rng.gen_range(lo..=hi)))
        .collect()
}
