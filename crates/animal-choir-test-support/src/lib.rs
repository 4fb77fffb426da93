//! Shared test doubles for the animal choir.

mod rng;

pub use rng::{MockRng, SequenceRng};
