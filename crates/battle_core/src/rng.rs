//! Random sources injected into the battle engine.
//!
//! Every draw is half-open: `draw(min, max)` yields a value in `[min, max)`.
//! An empty range (`max <= min`) yields `min`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const DEFAULT_SEED: u64 = 42;

pub trait RandomSource {
    fn draw(&mut self, min: u32, max: u32) -> u32;
}

/// Reproducible source backed by a seeded `StdRng`.
#[derive(Clone, Debug)]
pub struct SeededRandom {
    seed: u64,
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Default for SeededRandom {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl RandomSource for SeededRandom {
    fn draw(&mut self, min: u32, max: u32) -> u32 {
        if max <= min {
            return min;
        }
        self.rng.gen_range(min..max)
    }
}

/// Replays a fixed sequence of values, cycling once exhausted.
///
/// Each value is clamped into the requested range, so a scripted 15 drawn
/// from `[5, 15)` comes out as 14.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRandom {
    values: Vec<u32>,
    index: usize,
}

impl ScriptedRandom {
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        Self {
            values: values.into(),
            index: 0,
        }
    }

    pub fn constant(value: u32) -> Self {
        Self::new(vec![value])
    }

    /// Number of draws served so far.
    pub fn draws(&self) -> usize {
        self.index
    }
}

impl RandomSource for ScriptedRandom {
    fn draw(&mut self, min: u32, max: u32) -> u32 {
        if self.values.is_empty() || max <= min {
            self.index += 1;
            return min;
        }
        let value = self.values[self.index % self.values.len()];
        self.index += 1;
        value.clamp(min, max - 1)
    }
}
