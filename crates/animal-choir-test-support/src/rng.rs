//! Test RNG — deterministic `DeterministicRng` implementations for tests.

use animal_choir_core::rng::DeterministicRng;

/// A no-op RNG that always returns `min` from `next_u32_range`. Suitable for
/// tests that only care about which sounds appear, not the order a shuffle
/// leaves them in.
#[derive(Debug)]
pub struct MockRng;

impl DeterministicRng for MockRng {
    fn next_u32_range(&mut self, min: u32, _max: u32) -> u32 {
        min
    }
}

/// An RNG that returns values from a predetermined sequence. Panics if the
/// sequence is exhausted. Used in tests that need an exact shuffle
/// permutation (e.g., feeding `i` at every step leaves a slice untouched).
#[derive(Debug)]
pub struct SequenceRng {
    values: Vec<u32>,
    index: usize,
}

impl SequenceRng {
    /// Create a new `SequenceRng` with the given values.
    #[must_use]
    pub fn new(values: Vec<u32>) -> Self {
        Self { values, index: 0 }
    }

    /// Returns how many values have been drawn so far.
    #[must_use]
    pub fn drawn(&self) -> usize {
        self.index
    }
}

impl DeterministicRng for SequenceRng {
    fn next_u32_range(&mut self, _min: u32, _max: u32) -> u32 {
        let val = self.values[self.index];
        self.index += 1;
        val
    }
}
