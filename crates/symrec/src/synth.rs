//! Synthetic pen strokes (uniform jitter + replay tokens).
//!
//! Purpose
//! - Reproducible noisy gestures for benchmarks, tests and the CLI demo: a
//!   straight stroke between two points, a closed circular stroke, and one
//!   stroke per side of a closed polygon.
//!
//! Model
//! - `samples` evenly spaced points along the ideal curve, each displaced by an
//!   independent uniform offset in `[-jitter, jitter]` per axis.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geom::Point;

/// Stroke sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct StrokeCfg {
    /// Points per stroke. Clamped to at least 2.
    pub samples: usize,
    /// Maximum absolute displacement per axis.
    pub jitter: f64,
}
impl Default for StrokeCfg {
    fn default() -> Self {
        Self {
            samples: 48,
            jitter: 0.5,
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
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    /// Token for the `k`-th sub-draw of this one.
    #[inline]
    pub fn child(self, k: u64) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_mul(1024).wrapping_add(k),
        }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing.
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

#[inline]
fn jittered<R: Rng>(rng: &mut R, p: Point, jitter: f64) -> Point {
    let j = jitter.max(0.0);
    let dx = (rng.gen::<f64>() * 2.0 - 1.0) * j;
    let dy = (rng.gen::<f64>() * 2.0 - 1.0) * j;
    Point::new(p.x + dx, p.y + dy)
}

fn segment_with<R: Rng>(rng: &mut R, a: Point, b: Point, cfg: StrokeCfg) -> Vec<Point> {
    let n = cfg.samples.max(2);
    (0..n)
        .map(|i| {
            let t = i as f64 / (n - 1) as f64;
            jittered(rng, a + (b - a) * t, cfg.jitter)
        })
        .collect()
}

/// Noisy straight stroke from `a` to `b`.
pub fn line_stroke(a: Point, b: Point, cfg: StrokeCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    segment_with(&mut rng, a, b, cfg)
}

/// Noisy closed circular stroke starting at a random phase.
pub fn circle_stroke(center: Point, radius: f64, cfg: StrokeCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let n = cfg.samples.max(2);
    let phase = rng.gen::<f64>() * std::f64::consts::TAU;
    let delta = std::f64::consts::TAU / n as f64;
    (0..n)
        .map(|k| {
            let th = phase + k as f64 * delta;
            let p = center + Point::new(th.cos(), th.sin()) * radius;
            jittered(&mut rng, p, cfg.jitter)
        })
        .collect()
}

/// One noisy stroke per side of the closed polygon through `vertices`.
pub fn polygon_strokes(vertices: &[Point], cfg: StrokeCfg, tok: ReplayToken) -> Vec<Vec<Point>> {
    let mut rng = tok.to_std_rng();
    let n = vertices.len();
    if n < 2 {
        return Vec::new();
    }
    (0..n)
        .map(|i| segment_with(&mut rng, vertices[i], vertices[(i + 1) % n], cfg))
        .collect()
}
