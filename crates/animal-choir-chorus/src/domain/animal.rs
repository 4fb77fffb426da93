//! Singers: the animal entity and the species that fix its noise.

use std::fmt;

use animal_choir_core::error::DomainError;

use super::loudness::Loudness;

/// The recognized animal variants. Each one only fixes a noise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Species {
    /// Barks.
    Dog,
    /// Meows.
    Cat,
    /// Squeaks.
    Mouse,
}

impl Species {
    /// Every recognized species.
    pub const ALL: [Species; 3] = [Species::Dog, Species::Cat, Species::Mouse];

    /// Returns the canonical, title-cased type name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Species::Dog => "Dog",
            Species::Cat => "Cat",
            Species::Mouse => "Mouse",
        }
    }

    /// Returns the fixed noise this species makes.
    #[must_use]
    pub fn noise(self) -> &'static str {
        match self {
            Species::Dog => "bark",
            Species::Cat => "meow",
            Species::Mouse => "squeak",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A singer with a type, a loudness and a noise. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Animal {
    animal_type: String,
    loudness: Loudness,
    noise: String,
}

impl Animal {
    /// Creates an animal, validating `loudness`.
    ///
    /// An empty `noise` is accepted here; it only becomes an error when the
    /// animal is asked to [`sing`](Self::sing).
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidArgument` if `loudness` is not one of
    /// `silent`, `normal` or `loud`.
    pub fn new(
        animal_type: impl Into<String>,
        loudness: &str,
        noise: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let loudness = loudness.parse::<Loudness>()?;
        Ok(Self {
            animal_type: animal_type.into(),
            loudness,
            noise: noise.into(),
        })
    }

    /// Renders the noise at this animal's loudness.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidState` if no noise was defined.
    pub fn sing(&self) -> Result<String, DomainError> {
        let noise = self
            .noise()
            .ok_or_else(|| DomainError::InvalidState("noise is not defined".to_owned()))?;
        Ok(self.loudness.render(noise))
    }

    /// Returns the animal's type name.
    #[must_use]
    pub fn animal_type(&self) -> &str {
        &self.animal_type
    }

    /// Returns the raw noise, or `None` if it was never defined.
    #[must_use]
    pub fn noise(&self) -> Option<&str> {
        (!self.noise.is_empty()).then_some(self.noise.as_str())
    }

    /// Returns the loudness this animal sings at.
    #[must_use]
    pub fn loudness(&self) -> Loudness {
        self.loudness
    }
}
