//! Animal Choir command-line driver.
//!
//! Assembles the default roster and performs it to a writer. The binary
//! in `main.rs` only wires up tracing, configuration and stdout.

pub mod config;
pub mod error;

use std::io::Write;

use animal_choir_chorus::application::performance;
use animal_choir_core::rng::DeterministicRng;
use tracing::info;

use crate::config::Config;
use crate::error::AppError;

/// Performs the default roster to `out`, drawing shuffles from the RNG the
/// configuration selects.
///
/// # Errors
///
/// Returns `AppError` if the choir cannot be assembled, cannot sing, or
/// the output cannot be written.
pub fn run(config: &Config, out: &mut dyn Write) -> Result<(), AppError> {
    let mut rng = config.rng();
    run_with_rng(&mut rng, out)
}

/// Performs the default roster to `out` with an injected RNG.
///
/// # Errors
///
/// See [`run`].
pub fn run_with_rng(rng: &mut dyn DeterministicRng, out: &mut dyn Write) -> Result<(), AppError> {
    let choir = performance::rehearse(performance::default_roster())?;
    performance::perform(&choir, rng, out)?;
    info!("performance finished");
    Ok(())
}
