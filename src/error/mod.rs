//! Error types and policies for msgsink.
//!
//! This module provides:
//! - `ErrorPolicy`: Controls whether sink resolution fails fast or accumulates errors
//! - `Stage`: Indicates where an error occurred while rendering
//! - `TargetNotFound`: The requested sink identifier is not registered
//! - `SinkError`: A single sink error with context
//! - `AggregateError`: A collection of errors when using `Accumulate` policy
//! - `ConfigError`: Failures while loading an `AppConfig`
//! - `LoggingError`: Failures while installing the tracing subscriber

use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Stop at the first error encountered
    FastFail,
    /// Collect all errors and return them together
    #[default]
    Accumulate,
}

impl ErrorPolicy {
    /// Parse a policy from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "fast_fail" | "fastfail" | "fast-fail" => Some(ErrorPolicy::FastFail),
            "accumulate" => Some(ErrorPolicy::Accumulate),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Error while resolving a sink identifier or sink configuration
    Resolve,
    /// Error while writing to an existing sink
    Write,
    Config,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Resolve => write!(f, "Resolve"),
            Stage::Write => write!(f, "Write"),
            Stage::Config => write!(f, "Config"),
        }
    }
}

/// No sink is registered under the requested identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("element not found: '{target}'")]
pub struct TargetNotFound {
    pub target: String,
}

#[derive(Debug)]
pub struct SinkError {
    /// Stage where the error occurred
    pub stage: Stage,
    /// Identifier of the sink ("message", "-" for stdout, file path, ...)
    pub target: String,
    /// The underlying error
    pub error: Box<dyn std::error::Error + Send + Sync>,
}

impl SinkError {
    /// Build the error reported when `target` has no registered sink.
    pub fn not_found(target: impl Into<String>) -> Self {
        let target = target.into();
        Self {
            stage: Stage::Resolve,
            target: target.clone(),
            error: Box::new(TargetNotFound { target }),
        }
    }

    /// Whether this error means the target sink does not exist.
    pub fn is_target_not_found(&self) -> bool {
        self.error.downcast_ref::<TargetNotFound>().is_some()
    }
}

impl fmt::Display for SinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.stage, self.target, self.error)
    }
}

impl std::error::Error for SinkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.error.as_ref())
    }
}

/// An aggregate of multiple sink errors.
///
/// This is returned when using `ErrorPolicy::Accumulate` and multiple errors occurred.
#[derive(Debug, Error)]
pub struct AggregateError {
    /// Collection of individual errors
    pub errors: Vec<SinkError>,
}

impl fmt::Display for AggregateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "sink setup encountered {} error(s):", self.errors.len())?;
        for (i, e) in self.errors.iter().enumerate() {
            writeln!(f, "  #{}: {}", i + 1, e)?;
        }
        Ok(())
    }
}

impl AggregateError {
    /// Create a new aggregate error with a single error.
    pub fn single(error: SinkError) -> Self {
        Self {
            errors: vec![error],
        }
    }

    /// Check if there are no errors.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get the number of errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }
}

impl From<SinkError> for AggregateError {
    fn from(error: SinkError) -> Self {
        Self::single(error)
    }
}

/// Errors raised while loading or interpreting an `AppConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config '{path}': {message}")]
    Parse { path: String, message: String },

    #[error("unsupported config format '{0}' (enable the matching cargo feature)")]
    UnsupportedFormat(String),

    #[error("invalid error policy '{0}', expected 'fast_fail' or 'accumulate'")]
    InvalidPolicy(String),
}

/// Errors raised while setting up logging.
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("invalid log level '{0}', expected error, warn, info, debug, trace or off")]
    InvalidLevel(String),

    #[error("failed to set subscriber: {0}")]
    Subscriber(String),
}

impl From<ConfigError> for SinkError {
    fn from(e: ConfigError) -> Self {
        SinkError {
            stage: Stage::Config,
            target: "config".into(),
            error: Box::new(e),
        }
    }
}

impl From<ConfigError> for AggregateError {
    fn from(e: ConfigError) -> Self {
        AggregateError::single(e.into())
    }
}

#[cfg(feature = "miette")]
mod miette_impl;

#[cfg(feature = "miette")]
pub use miette_impl::*;
