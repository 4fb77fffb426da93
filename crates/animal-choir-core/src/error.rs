//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A caller supplied a value outside the recognized set
    /// (unknown loudness, unknown animal type, unknown group).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An entity was used before it was fully defined.
    #[error("invalid state: {0}")]
    InvalidState(String),
}
