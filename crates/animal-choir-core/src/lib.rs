//! Animal Choir Core — shared abstractions.
//!
//! This crate defines the error type and the randomness seam that the
//! choir context depends on. It knows nothing about animals.

pub mod error;
pub mod rng;
