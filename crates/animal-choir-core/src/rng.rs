//! Random number generator abstraction for determinism.
//!
//! In production, this wraps a real RNG. In tests, a seeded or scripted
//! implementation is injected so shuffled output can be asserted exactly.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Abstraction over random number generation.
pub trait DeterministicRng: Send + Sync {
    /// Generate a random `u32` in the range `[min, max]` inclusive.
    fn next_u32_range(&mut self, min: u32, max: u32) -> u32;
}

/// Production RNG backed by `rand`'s standard generator.
#[derive(Debug, Clone)]
pub struct SystemRng(StdRng);

impl SystemRng {
    /// Creates an RNG seeded from operating system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self(StdRng::from_os_rng())
    }

    /// Creates an RNG whose sequence is fully determined by `seed`.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl DeterministicRng for SystemRng {
    fn next_u32_range(&mut self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        self.0.random_range(min..=max)
    }
}

/// Shuffles `items` in place (Fisher–Yates).
///
/// Walks from the last index down to 1, swapping each position with an
/// index drawn from `next_u32_range(0, i)`. Draws exactly `len - 1` values
/// for non-empty slices and none otherwise. Out-of-range draws are clamped.
pub fn shuffle<T>(items: &mut [T], rng: &mut dyn DeterministicRng) {
    for i in (1..items.len()).rev() {
        let bound = u32::try_from(i).unwrap_or(u32::MAX);
        let j = (rng.next_u32_range(0, bound) as usize).min(i);
        items.swap(i, j);
    }
}
