//! Animal Choir — CLI error types.

use animal_choir_chorus::application::performance::PerformanceError;
use animal_choir_core::error::DomainError;
use thiserror::Error;

/// Startup and runtime errors for the command-line driver.
#[derive(Debug, Error)]
pub enum AppError {
    /// An environment variable is present but invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// The roster could not be assembled into a choir.
    #[error("rehearsal failed: {0}")]
    Domain(#[from] DomainError),

    /// The choir could not finish its performance.
    #[error("performance failed: {0}")]
    Performance(#[from] PerformanceError),
}
