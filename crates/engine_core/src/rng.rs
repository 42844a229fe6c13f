//! Injectable random source.
//!
//! Every randomized decision in the game (sample points, yaw, coin flips,
//! chest counts) goes through [`RandomSource`]. Any `rand::Rng` is a random
//! source, so production code passes a `StdRng` and tests pin outcomes with
//! `StdRng::seed_from_u64` or a [`ScriptedRandom`].

use rand::Rng;

/// Source of uniform random values.
pub trait RandomSource {
    /// Uniform value in [0, 1).
    fn unit(&mut self) -> f32;

    /// Uniform integer in `low..=high`. Returns `low` when the range is empty.
    fn int_inclusive(&mut self, low: u32, high: u32) -> u32 {
        if high <= low {
            return low;
        }
        let span = u64::from(high - low) + 1;
        let offset = (f64::from(self.unit()) * span as f64) as u64;
        low + offset.min(span - 1) as u32
    }

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "index requires a non-empty range");
        ((self.unit() * len as f32) as usize).min(len.saturating_sub(1))
    }

    /// Fair coin.
    fn coin_flip(&mut self) -> bool {
        self.unit() < 0.5
    }
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn unit(&mut self) -> f32 {
        self.gen::<f32>()
    }

    fn int_inclusive(&mut self, low: u32, high: u32) -> u32 {
        if high <= low {
            return low;
        }
        self.gen_range(low..=high)
    }

    fn index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "index requires a non-empty range");
        self.gen_range(0..len.max(1))
    }
}

/// Replays a fixed list of unit values, cycling when exhausted.
///
/// Intended for tests that need to force a particular branch (a coin flip,
/// a chest count) without searching for a matching seed.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    values: Vec<f32>,
    cursor: usize,
}

impl ScriptedRandom {
    /// Values outside [0, 1) are clamped into it. An empty script yields 0.0.
    pub fn new(values: impl Into<Vec<f32>>) -> Self {
        let values = values
            .into()
            .into_iter()
            .map(|v| v.clamp(0.0, 0.999_999))
            .collect();
        Self { values, cursor: 0 }
    }

    /// Number of values consumed so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRandom {
    fn unit(&mut self) -> f32 {
        if self.values.is_empty() {
            self.cursor += 1;
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}
