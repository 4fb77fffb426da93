//! The choir: singers grouped by loudness and the two rendering passes.

use std::collections::BTreeMap;

use animal_choir_core::error::DomainError;
use animal_choir_core::rng::{DeterministicRng, shuffle};
use tracing::{debug, info, warn};

use super::animal::Animal;
use super::factory::AnimalFactory;
use super::loudness::Loudness;

/// Separator between rendered sounds on one line.
const SEPARATOR: &str = ", ";

/// Singers grouped by loudness, in insertion order within each group.
///
/// Only [`add_to_groups`](Self::add_to_groups) mutates a choir; both
/// rendering passes are pure reads and may be repeated.
#[derive(Debug, Clone, Default)]
pub struct Choir {
    singers: BTreeMap<Loudness, Vec<Animal>>,
}

impl Choir {
    /// Creates an empty choir.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an animal of `animal_type` and appends it to the `loudness`
    /// group.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidArgument` if `loudness` is not a known
    /// group or `animal_type` is not a known animal. The choir is left
    /// unchanged on error.
    pub fn add_to_groups(&mut self, animal_type: &str, loudness: &str) -> Result<(), DomainError> {
        let Ok(group) = loudness.parse::<Loudness>() else {
            warn!(loudness, "rejected unknown group type");
            return Err(DomainError::InvalidArgument(format!(
                "invalid group type given: {loudness}"
            )));
        };

        let animal = AnimalFactory::build(animal_type, loudness)?;
        debug!(animal_type = animal.animal_type(), %group, "singer joined group");
        self.singers.entry(group).or_default().push(animal);
        Ok(())
    }

    /// Returns the singers in the `loudness` group, in insertion order.
    #[must_use]
    pub fn group(&self, loudness: Loudness) -> &[Animal] {
        self.singers
            .get(&loudness)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns the total number of singers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.singers.values().map(Vec::len).sum()
    }

    /// Returns `true` if no singer has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.singers.is_empty()
    }

    /// Sings the groups from quietest to loudest, each group joining the
    /// ones before it.
    ///
    /// Every group's sounds are appended to one running accumulator, which
    /// is then reshuffled in full and emitted as a line. Line `n` therefore
    /// holds the sounds of the first `n` non-empty groups.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidState` if a singer has no noise.
    pub fn crescendo(&self, rng: &mut dyn DeterministicRng) -> Result<Vec<String>, DomainError> {
        let mut chorus = Vec::with_capacity(self.len());
        let mut lines = Vec::with_capacity(self.singers.len());

        for group in self.singers.values() {
            chorus.extend(sing_all(group)?);
            shuffle(&mut chorus, rng);
            lines.push(chorus.join(SEPARATOR));
        }

        info!(lines = lines.len(), singers = chorus.len(), "choir sang crescendo");
        Ok(lines)
    }

    /// Sings each group on its own line from quietest to loudest, singers
    /// in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidState` if a singer has no noise.
    pub fn arpeggio(&self) -> Result<Vec<String>, DomainError> {
        let lines = self
            .singers
            .values()
            .map(|group| sing_all(group).map(|sounds| sounds.join(SEPARATOR)))
            .collect::<Result<Vec<_>, _>>()?;

        info!(lines = lines.len(), "choir sang arpeggio");
        Ok(lines)
    }
}

fn sing_all(group: &[Animal]) -> Result<Vec<String>, DomainError> {
    group.iter().map(Animal::sing).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use animal_choir_core::rng::SystemRng;
    use animal_choir_test_support::{MockRng, SequenceRng};

    fn standard_choir() -> Choir {
        let mut choir = Choir::new();
        for (animal_type, loudness) in [
            ("Mouse", "silent"),
            ("Dog", "silent"),
            ("Cat", "silent"),
            ("Dog", "normal"),
            ("Cat", "normal"),
            ("Dog", "loud"),
            ("Cat", "loud"),
        ] {
            choir.add_to_groups(animal_type, loudness).unwrap();
        }
        choir
    }

    fn sorted_sounds(line: &str) -> Vec<&str> {
        let mut sounds: Vec<&str> = line.split(SEPARATOR).collect();
        sounds.sort_unstable();
        sounds
    }

    // --- add_to_groups tests ---

    #[test]
    fn test_add_to_groups_preserves_insertion_order() {
        let choir = standard_choir();

        let silent: Vec<&str> = choir
            .group(Loudness::Silent)
            .iter()
            .map(Animal::animal_type)
            .collect();

        assert_eq!(silent, vec!["Mouse", "Dog", "Cat"]);
        assert_eq!(choir.group(Loudness::Normal).len(), 2);
        assert_eq!(choir.group(Loudness::Loud).len(), 2);
        assert_eq!(choir.len(), 7);
    }

    #[test]
    fn test_add_to_groups_keeps_type_name_as_given() {
        let mut choir = Choir::new();
        choir.add_to_groups("mOUSE", "silent").unwrap();

        let singer = &choir.group(Loudness::Silent)[0];

        assert_eq!(singer.animal_type(), "mOUSE");
        assert_eq!(singer.sing().unwrap(), "squeak");
    }

    #[test]
    fn test_add_to_groups_unknown_loudness_leaves_choir_unchanged() {
        let mut choir = standard_choir();

        let result = choir.add_to_groups("Dog", "thunderous");

        assert_eq!(
            result,
            Err(DomainError::InvalidArgument(
                "invalid group type given: thunderous".to_owned()
            ))
        );
        assert_eq!(choir.len(), 7);
        assert_eq!(choir.arpeggio().unwrap(), standard_choir().arpeggio().unwrap());
    }

    #[test]
    fn test_add_to_groups_unknown_animal_leaves_choir_unchanged() {
        let mut choir = Choir::new();

        let result = choir.add_to_groups("Elephant", "loud");

        assert!(matches!(result, Err(DomainError::InvalidArgument(_))));
        assert!(choir.is_empty());
        assert!(choir.group(Loudness::Loud).is_empty());
    }

    // --- arpeggio tests ---

    #[test]
    fn test_arpeggio_emits_one_line_per_group_in_order() {
        let lines = standard_choir().arpeggio().unwrap();

        assert_eq!(
            lines,
            vec!["squeak, bark, meow", "Bark, Meow", "BARK, MEOW"]
        );
    }

    #[test]
    fn test_arpeggio_is_idempotent() {
        let choir = standard_choir();

        let first = choir.arpeggio().unwrap();
        let second = choir.arpeggio().unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_arpeggio_walks_groups_quietest_first_regardless_of_insertion() {
        let mut choir = Choir::new();
        choir.add_to_groups("Cat", "loud").unwrap();
        choir.add_to_groups("Mouse", "silent").unwrap();

        assert_eq!(choir.arpeggio().unwrap(), vec!["squeak", "MEOW"]);
    }

    #[test]
    fn test_rendering_an_empty_choir_emits_no_lines() {
        let choir = Choir::new();

        assert!(choir.arpeggio().unwrap().is_empty());
        assert!(choir.crescendo(&mut MockRng).unwrap().is_empty());
    }

    // --- crescendo tests ---

    #[test]
    fn test_crescendo_with_identity_draws_keeps_accumulation_order() {
        let choir = standard_choir();
        // Drawing `i` at every Fisher–Yates step swaps each item with itself.
        let mut rng = SequenceRng::new(vec![2, 1, 4, 3, 2, 1, 6, 5, 4, 3, 2, 1]);

        let lines = choir.crescendo(&mut rng).unwrap();

        assert_eq!(
            lines,
            vec![
                "squeak, bark, meow",
                "squeak, bark, meow, Bark, Meow",
                "squeak, bark, meow, Bark, Meow, BARK, MEOW",
            ]
        );
        assert_eq!(rng.drawn(), 12);
    }

    #[test]
    fn test_crescendo_reshuffles_the_whole_accumulator() {
        let choir = standard_choir();

        let lines = choir.crescendo(&mut MockRng).unwrap();

        // MockRng always draws 0, rotating items through the front.
        assert_eq!(lines[0], "bark, meow, squeak");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_crescendo_lines_grow_by_each_group() {
        let choir = standard_choir();
        let mut rng = SystemRng::from_entropy();

        let lines = choir.crescendo(&mut rng).unwrap();

        assert_eq!(lines.len(), 3);
        assert_eq!(sorted_sounds(&lines[0]), vec!["bark", "meow", "squeak"]);
        assert_eq!(
            sorted_sounds(&lines[1]),
            vec!["Bark", "Meow", "bark", "meow", "squeak"]
        );
        assert_eq!(
            sorted_sounds(&lines[2]),
            vec!["BARK", "Bark", "MEOW", "Meow", "bark", "meow", "squeak"]
        );
    }

    #[test]
    fn test_crescendo_does_not_mutate_choir() {
        let choir = standard_choir();
        let before = choir.arpeggio().unwrap();

        choir.crescendo(&mut SystemRng::seeded(3)).unwrap();
        choir.crescendo(&mut SystemRng::seeded(4)).unwrap();

        assert_eq!(choir.arpeggio().unwrap(), before);
        assert_eq!(choir.len(), 7);
    }

    #[test]
    fn test_crescendo_is_reproducible_with_same_seed() {
        let choir = standard_choir();

        let first = choir.crescendo(&mut SystemRng::seeded(99)).unwrap();
        let second = choir.crescendo(&mut SystemRng::seeded(99)).unwrap();

        assert_eq!(first, second);
    }
}
