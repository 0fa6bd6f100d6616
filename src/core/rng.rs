//! Random number source shared by every roll in the simulation
//!
//! All probability checks and uniform draws go through [`RandomSource`], so a
//! test can replay an exact sequence with [`ScriptedRandom`] while real play
//! uses a seeded ChaCha stream.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::VecDeque;

/// A source of uniform draws in `[0, 1)`
pub trait RandomSource {
    /// Next uniform draw in `[0, 1)`
    fn next_unit(&mut self) -> f64;

    /// True with probability `p` (draw `< p`)
    fn chance(&mut self, p: f64) -> bool {
        self.next_unit() < p
    }

    /// Uniform real in `[lo, hi)`
    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next_unit() * (hi - lo)
    }

    /// Uniform integer in `[min, max]` (inclusive)
    fn range_inclusive(&mut self, min: i64, max: i64) -> i64 {
        let span = (max - min + 1) as f64;
        min + ((self.next_unit() * span).floor() as i64).min(max - min)
    }

    /// Uniform index into a collection of `len` items. `len` must be non-zero.
    fn pick(&mut self, len: usize) -> usize {
        ((self.next_unit() * len as f64).floor() as usize).min(len.saturating_sub(1))
    }

    /// `-1.0` or `+1.0` with equal probability
    fn sign(&mut self) -> f64 {
        if self.next_unit() < 0.5 {
            -1.0
        } else {
            1.0
        }
    }
}

/// Deterministic ChaCha-backed source
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: ChaCha8Rng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Seed from OS entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Replays a fixed list of draws, then repeats `fallback` forever
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    draws: VecDeque<f64>,
    fallback: f64,
}

impl ScriptedRandom {
    pub fn new(draws: impl IntoIterator<Item = f64>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
            fallback: 0.99,
        }
    }

    /// Source that always returns `value`
    pub fn constant(value: f64) -> Self {
        Self {
            draws: VecDeque::new(),
            fallback: value,
        }
    }

    /// Draw returned once the script runs out
    pub fn with_fallback(mut self, fallback: f64) -> Self {
        self.fallback = fallback;
        self
    }

    /// Draws not yet consumed
    pub fn remaining(&self) -> usize {
        self.draws.len()
    }
}

impl RandomSource for ScriptedRandom {
    fn next_unit(&mut self) -> f64 {
        self.draws.pop_front().unwrap_or(self.fallback)
    }
}
