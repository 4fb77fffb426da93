//! Shared test helpers for CLI integration tests.
#![allow(dead_code)]

use animal_choir_cli::config::Config;
use animal_choir_core::rng::DeterministicRng;

/// Draws that leave every Fisher–Yates step in place for the default
/// roster (groups of 3, 2 and 2 singers).
pub fn identity_draws() -> Vec<u32> {
    vec![2, 1, 4, 3, 2, 1, 6, 5, 4, 3, 2, 1]
}

/// Runs the driver with an injected RNG and returns what it wrote.
pub fn perform_with(rng: &mut dyn DeterministicRng) -> String {
    let mut out = Vec::new();
    animal_choir_cli::run_with_rng(rng, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

/// Runs the driver from a configuration and returns what it wrote.
pub fn perform_configured(config: &Config) -> String {
    let mut out = Vec::new();
    animal_choir_cli::run(config, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

/// Splits a performance into its crescendo and arpeggio lines, headings
/// and the separating blank line removed.
pub fn sections(output: &str) -> (Vec<&str>, Vec<&str>) {
    let (crescendo, arpeggio) = output
        .split_once("\n\n")
        .expect("performance has two sections");
    (
        crescendo.lines().skip(1).collect(),
        arpeggio.lines().skip(1).collect(),
    )
}

/// Sorted sounds of one rendered line.
pub fn multiset(line: &str) -> Vec<&str> {
    let mut sounds: Vec<&str> = line.split(", ").collect();
    sounds.sort_unstable();
    sounds
}
