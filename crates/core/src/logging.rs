//! Logging initialization.
//!
//! Diagnostics go to stderr so stdout only carries the report.

use tracing::Level;

use crate::error::{ConfigurationError, Result};

/// Maps the `-v` count to a maximum log level.
pub fn level_for(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

pub fn init_logging(verbose: u8) -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(level_for(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|error| ConfigurationError::Logging {
            reason: error.to_string(),
        })?;

    Ok(())
}
