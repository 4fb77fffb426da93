//! Runtime configuration read from the environment.

use animal_choir_core::rng::SystemRng;

use crate::error::AppError;

/// Environment variable holding an optional shuffle seed.
pub const SEED_VAR: &str = "CHOIR_SEED";

/// Driver configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    /// Seed for the crescendo shuffle. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Config {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `CHOIR_SEED` is set but not a valid `u64`.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, which maps a variable name to
    /// its value.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the seed is present but unparsable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let seed = lookup(SEED_VAR)
            .map(|raw| {
                raw.trim()
                    .parse::<u64>()
                    .map_err(|e| AppError::Config(format!("{SEED_VAR} must be a valid u64: {e}")))
            })
            .transpose()?;
        Ok(Self { seed })
    }

    /// Builds the shuffle source this configuration selects.
    #[must_use]
    pub fn rng(&self) -> SystemRng {
        match self.seed {
            Some(seed) => SystemRng::seeded(seed),
            None => SystemRng::from_entropy(),
        }
    }
}
