//! Injectable randomness source
//!
//! The analysis engines perturb their heuristic scores with random draws
//! standing in for unavailable models. Production draws from the process-wide
//! thread RNG with no per-request seeding; deterministic tests substitute
//! [`FixedSource`].

use rand::Rng;

/// Source of random draws used by the analysis engines
pub trait RandomSource: Send {
    /// Uniform draw in `[lo, hi]`
    fn uniform(&mut self, lo: f64, hi: f64) -> f64;

    /// Fair boolean draw
    fn coin(&mut self) -> bool;

    /// Index draw in `[0, len)`
    fn pick_index(&mut self, len: usize) -> usize;
}

/// Production source backed by the process-wide thread RNG
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngSource;

impl RandomSource for ThreadRngSource {
    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        rand::thread_rng().gen_range(lo..=hi)
    }

    fn coin(&mut self) -> bool {
        rand::thread_rng().gen_bool(0.5)
    }

    fn pick_index(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Deterministic source for tests
///
/// Uniform draws return `value` clamped into the requested range, coins
/// return `coin`, and index draws return `index` clamped below `len`.
#[derive(Debug, Clone, Copy)]
pub struct FixedSource {
    pub value: f64,
    pub coin: bool,
    pub index: usize,
}

impl FixedSource {
    /// Source where every uniform perturbation collapses to 0.0 (or the
    /// nearest range bound), coins are false and index draws take the
    /// first choice.
    pub fn zero() -> Self {
        Self {
            value: 0.0,
            coin: false,
            index: 0,
        }
    }
}

impl RandomSource for FixedSource {
    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        self.value.clamp(lo, hi)
    }

    fn coin(&mut self) -> bool {
        self.coin
    }

    fn pick_index(&mut self, len: usize) -> usize {
        if len == 0 {
            0
        } else {
            self.index.min(len - 1)
        }
    }
}
