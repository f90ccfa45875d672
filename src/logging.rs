//! Logging initialisation via tracing-subscriber.
//!
//! Library code only emits `tracing` events; binaries call [`init`] once at
//! startup to install a subscriber that prints them to stderr.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::error::LoggingError;

/// Initialise the global tracing subscriber.
///
/// `level` must be one of `"error"`, `"warn"`, `"info"`, `"debug"`,
/// `"trace"` or `"off"`; anything else is rejected before a subscriber is
/// installed. `RUST_LOG`, when set and valid, takes precedence over it.
pub fn init(level: &str) -> Result<(), LoggingError> {
    let fallback = parse_level(level)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(fallback.into()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| LoggingError::Subscriber(e.to_string()))
}

/// Parse a log level string, rejecting unknown values.
pub fn parse_level(level: &str) -> Result<LevelFilter, LoggingError> {
    let trimmed = level.trim();
    // LevelFilter parses "" as ERROR.
    if trimmed.is_empty() {
        return Err(LoggingError::InvalidLevel(level.to_string()));
    }
    trimmed
        .parse::<LevelFilter>()
        .map_err(|_| LoggingError::InvalidLevel(level.to_string()))
}
