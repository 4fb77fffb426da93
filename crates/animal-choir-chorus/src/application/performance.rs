//! Performance driver for the choir context.
//!
//! This module assembles a choir from a roster of `(type, loudness)` pairs
//! and writes both rendering passes, each under its heading, to an output
//! sink.

use std::io::{self, Write};

use animal_choir_core::error::DomainError;
use animal_choir_core::rng::DeterministicRng;
use thiserror::Error;
use tracing::{info, instrument};

use crate::domain::choir::Choir;

/// Heading written before the crescendo lines.
pub const CRESCENDO_HEADING: &str = "Choir singing crescendo:";

/// Heading written before the arpeggio lines.
pub const ARPEGGIO_HEADING: &str = "Choir singing arpeggio:";

/// The fixed roster the choir performs with.
const DEFAULT_ROSTER: [(&str, &str); 7] = [
    ("Mouse", "silent"),
    ("Dog", "silent"),
    ("Cat", "silent"),
    ("Dog", "normal"),
    ("Cat", "normal"),
    ("Dog", "loud"),
    ("Cat", "loud"),
];

/// Errors raised while performing.
#[derive(Debug, Error)]
pub enum PerformanceError {
    /// The choir could not be assembled or could not sing.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Writing to the output sink failed.
    #[error("output error: {0}")]
    Output(#[from] io::Error),
}

/// Returns the default roster as `(type, loudness)` pairs, in the order the
/// singers join.
#[must_use]
pub fn default_roster() -> &'static [(&'static str, &'static str)] {
    &DEFAULT_ROSTER
}

/// Builds a choir by adding every roster entry in order.
///
/// # Errors
///
/// Returns the first `DomainError::InvalidArgument` raised by an entry;
/// entries after it are not added.
#[instrument(skip_all)]
pub fn rehearse<'a, I>(roster: I) -> Result<Choir, DomainError>
where
    I: IntoIterator<Item = &'a (&'a str, &'a str)>,
{
    let mut choir = Choir::new();
    for (animal_type, loudness) in roster {
        choir.add_to_groups(animal_type, loudness)?;
    }
    info!(singers = choir.len(), "choir assembled");
    Ok(choir)
}

/// Writes the crescendo then the arpeggio, each under its heading and
/// separated by a blank line.
///
/// # Errors
///
/// Returns `PerformanceError::Domain` if a singer cannot sing and
/// `PerformanceError::Output` if writing fails.
#[instrument(skip_all, fields(singers = choir.len()))]
pub fn perform(
    choir: &Choir,
    rng: &mut dyn DeterministicRng,
    out: &mut dyn Write,
) -> Result<(), PerformanceError> {
    let crescendo = choir.crescendo(rng)?;
    let arpeggio = choir.arpeggio()?;

    write_section(out, CRESCENDO_HEADING, &crescendo)?;
    writeln!(out)?;
    write_section(out, ARPEGGIO_HEADING, &arpeggio)?;
    out.flush()?;
    Ok(())
}

fn write_section(out: &mut dyn Write, heading: &str, lines: &[String]) -> io::Result<()> {
    writeln!(out, "{heading}")?;
    for line in lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
