//! Reproducible random scenes (distance chains with optional cross links).
//!
//! Model
//! - Walk `len` points from a random start, each step a random direction and a
//!   length in `[min_dist, max_dist]`. Consecutive points get a distance link.
//! - `extra_links` random pairs get a link at their current separation, so every
//!   generated scene validates at its initial positions.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.
//!
//! Used by benchmarks, tests and the CLI `random` command. Solving cost grows
//! roughly geometrically with `len` when `extra_links > 0`; keep chains short.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::SolveError;
use crate::geom::point_distance;
use crate::scene::Scene;

/// Random chain configuration.
#[derive(Clone, Copy, Debug)]
pub struct ChainCfg {
    pub len: usize,
    pub min_dist: f64,
    pub max_dist: f64,
    /// Additional distance links between random non-identical pairs.
    pub extra_links: usize,
    /// Pin the first point with a fixed constraint at its start position.
    pub anchored: bool,
}

impl Default for ChainCfg {
    fn default() -> Self {
        Self {
            len: 8,
            min_dist: 1.0,
            max_dist: 10.0,
            extra_links: 0,
            anchored: true,
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
        // SplitMix64 finalizer
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        StdRng::seed_from_u64(mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15))))
    }
}

/// Draw a random chain scene.
pub fn random_chain(cfg: ChainCfg, tok: ReplayToken) -> Result<Scene, SolveError> {
    let mut rng = tok.to_std_rng();
    let lo = cfg.min_dist.max(0.0);
    let hi = cfg.max_dist.max(lo);
    let mut scene = Scene::new();
    let mut pts = Vec::with_capacity(cfg.len);
    if cfg.len == 0 {
        return Ok(scene);
    }

    let first = scene.add_point(rng.gen_range(-50.0..50.0), rng.gen_range(-50.0..50.0));
    if cfg.anchored {
        scene.fix(&first, first.untagged())?;
    }
    pts.push(first);
    for _ in 1..cfg.len {
        let prev = pts[pts.len() - 1];
        let theta: f64 = rng.gen::<f64>() * std::f64::consts::TAU;
        let step = if hi > lo { rng.gen_range(lo..=hi) } else { lo };
        let p = scene.add_point(prev.x() + step * theta.cos(), prev.y() + step * theta.sin());
        scene.distance(&p, &prev, point_distance(&p, &prev))?;
        pts.push(p);
    }
    if pts.len() >= 2 {
        for _ in 0..cfg.extra_links {
            let i = rng.gen_range(0..pts.len());
            let mut j = rng.gen_range(0..pts.len() - 1);
            if j >= i {
                j += 1;
            }
            scene.distance(&pts[i], &pts[j], point_distance(&pts[i], &pts[j]))?;
        }
    }
    Ok(scene)
}
