//! Injectable randomness for the hand-drawn look.
//!
//! Builders never reach for ambient global randomness. Everything that wiggles takes a
//! `&mut dyn RandomSource`, so tests can pin a seed or switch jitter off with [`Midpoint`].

use rand::SeedableRng as _;
use rand_pcg::Pcg32;

use crate::foundation::core::{Point, Vec2};

/// Uniform sampler used by jitter and randomized effects.
pub trait RandomSource {
    /// Sample uniformly from `[low, high]`. `low == high` returns `low`.
    fn uniform(&mut self, low: f64, high: f64) -> f64;
}

/// Always returns the middle of the requested range: symmetric jitter becomes zero and randomized
/// effects collapse to their centered layout.
#[derive(Clone, Copy, Debug, Default)]
pub struct Midpoint;

impl RandomSource for Midpoint {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        (low + high) * 0.5
    }
}

/// Reproducible PCG32 stream.
#[derive(Clone, Debug)]
pub struct Seeded(Pcg32);

impl Seeded {
    pub fn new(seed: u64) -> Self {
        Self(Pcg32::seed_from_u64(seed))
    }
}

impl RandomSource for Seeded {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        sample(&mut self.0, low, high)
    }
}

/// Fresh, non-reproducible randomness from the thread-local generator.
#[derive(Debug, Default)]
pub struct ThreadEntropy;

impl RandomSource for ThreadEntropy {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        sample(&mut rand::thread_rng(), low, high)
    }
}

fn sample<R: rand::Rng + ?Sized>(rng: &mut R, low: f64, high: f64) -> f64 {
    let (lo, hi) = if low <= high { (low, high) } else { (high, low) };
    if lo == hi || !lo.is_finite() || !hi.is_finite() {
        return lo;
    }
    rng.gen_range(lo..=hi)
}

/// Independent offset within `±epsilon` on each axis.
pub fn jitter_offset(src: &mut dyn RandomSource, epsilon: f64) -> Vec2 {
    if epsilon <= 0.0 {
        return Vec2::ZERO;
    }
    let x = src.uniform(-epsilon, epsilon);
    let y = src.uniform(-epsilon, epsilon);
    Vec2::new(x, y)
}

pub fn jitter_point(src: &mut dyn RandomSource, p: Point, epsilon: f64) -> Point {
    p + jitter_offset(src, epsilon)
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/jitter.rs"]
mod tests;
