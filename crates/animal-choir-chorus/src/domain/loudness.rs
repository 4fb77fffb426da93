//! Loudness levels and the sound transform each one applies.

use std::fmt;
use std::str::FromStr;

use animal_choir_core::error::DomainError;

/// How loudly a singer performs. Ordered from quietest to loudest, which is
/// also the order the choir walks its groups in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Loudness {
    /// Rendered in lowercase.
    Silent,
    /// Rendered with the first letter capitalized.
    Normal,
    /// Rendered in uppercase.
    Loud,
}

impl Loudness {
    /// Every level, quietest first.
    pub const ALL: [Loudness; 3] = [Loudness::Silent, Loudness::Normal, Loudness::Loud];

    /// Returns the level's canonical name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Loudness::Silent => "silent",
            Loudness::Normal => "normal",
            Loudness::Loud => "loud",
        }
    }

    /// Applies this level's transform to `noise`.
    #[must_use]
    pub fn render(self, noise: &str) -> String {
        match self {
            Loudness::Silent => noise.to_lowercase(),
            Loudness::Normal => capitalize_first(noise),
            Loudness::Loud => noise.to_uppercase(),
        }
    }
}

/// Uppercases the first character and leaves the rest untouched.
fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl fmt::Display for Loudness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Loudness {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Loudness::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| DomainError::InvalidArgument(format!("unknown loudness: {s}")))
    }
}
