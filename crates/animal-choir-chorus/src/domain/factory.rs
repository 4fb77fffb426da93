//! Factory mapping type names to animal constructors.

use animal_choir_core::error::DomainError;
use tracing::warn;

use super::animal::{Animal, Species};

/// Builds an animal from the caller's type name and a loudness.
type Constructor = fn(&str, &str) -> Result<Animal, DomainError>;

/// Recognized species and their constructors. Names come from
/// [`Species::name`].
const REGISTRY: [(Species, Constructor); 3] = [
    (Species::Dog, |animal_type, loudness| {
        Animal::new(animal_type, loudness, Species::Dog.noise())
    }),
    (Species::Cat, |animal_type, loudness| {
        Animal::new(animal_type, loudness, Species::Cat.noise())
    }),
    (Species::Mouse, |animal_type, loudness| {
        Animal::new(animal_type, loudness, Species::Mouse.noise())
    }),
];

/// Resolves animal type names to constructed animals.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnimalFactory;

impl AnimalFactory {
    /// Builds an animal of type `animal_type` singing at `loudness`.
    ///
    /// The type name is matched case-insensitively but stored as given;
    /// loudness validation is left to [`Animal::new`].
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidArgument` if the type is not registered
    /// or the loudness is not recognized.
    pub fn build(animal_type: &str, loudness: &str) -> Result<Animal, DomainError> {
        let Some((_, construct)) = REGISTRY
            .iter()
            .find(|(species, _)| species.name().eq_ignore_ascii_case(animal_type))
        else {
            warn!(animal_type, "rejected unknown animal type");
            return Err(DomainError::InvalidArgument(format!(
                "unknown animal type: {animal_type}"
            )));
        };
        construct(animal_type, loudness)
    }

    /// Returns the registered type names.
    pub fn registered_types() -> impl Iterator<Item = &'static str> {
        REGISTRY.iter().map(|(species, _)| species.name())
    }
}
