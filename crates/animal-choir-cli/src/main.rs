//! Animal Choir entry point.

use std::error::Error;
use std::io;

use animal_choir_cli::config::Config;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    // Logs go to stderr so stdout carries only the performance.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .json()
        .init();

    let config = Config::from_env()?;
    tracing::info!(seeded = config.seed.is_some(), "Starting animal choir");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    animal_choir_cli::run(&config, &mut out)?;

    Ok(())
}
