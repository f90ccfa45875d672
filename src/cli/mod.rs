//! CLI integration helpers for msgsink.
//!
//! Converts command-line tokens into `SinkConfig`s and overlays CLI flags on
//! top of a loaded `AppConfig`. Parser integration for `sarge` lives behind
//! the `sarge` feature.
//!
//! Sink tokens have the form `id=kind[:path]`, e.g. `message=stdout`,
//! `status=stderr` or `out=file:/tmp/out.txt`. A bare `id` is a stdout sink.

use crate::config::{AppConfig, SinkConfig};

#[cfg(feature = "sarge")]
mod sarge;

/// Parse one sink token.
///
/// Never fails: unknown kinds are carried through and rejected later by
/// [`RegistryBuilder`](crate::RegistryBuilder) with the offending id attached.
pub fn parse_sink_token(token: &str) -> SinkConfig {
    let token = token.trim();
    let Some((id, spec)) = token.split_once('=') else {
        return SinkConfig::new(token, "stdout");
    };

    match spec.split_once(':') {
        Some((kind, path)) => SinkConfig::new(id.trim(), kind.trim()).with_path(path),
        None => SinkConfig::new(id.trim(), spec.trim()),
    }
}

/// Repeatable `--sink` arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SinkArgs(pub Vec<SinkConfig>);

impl SinkArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a comma-separated list of sink tokens.
    pub fn parse_list(value: &str) -> Self {
        SinkArgs(
            value
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(parse_sink_token)
                .collect(),
        )
    }

    pub fn with_sink(mut self, token: &str) -> Self {
        self.0.push(parse_sink_token(token));
        self
    }

    pub fn as_slice(&self) -> &[SinkConfig] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Command-line overrides for an `AppConfig`.
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Path to a JSON/YAML/TOML config file
    pub config: Option<String>,
    pub message: Option<String>,
    pub target: Option<String>,
    pub log_level: Option<String>,
    pub sinks: SinkArgs,
}

impl CliArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overlay the CLI values on `config`.
    ///
    /// Scalars replace config values; sinks are appended. When neither side
    /// names a sink, a stdout sink addressed by the target id is added so
    /// the message has somewhere to go.
    pub fn apply_to(&self, mut config: AppConfig) -> AppConfig {
        if let Some(message) = &self.message {
            config.message = message.clone();
        }
        if let Some(target) = &self.target {
            config.target = target.clone();
        }
        if let Some(level) = &self.log_level {
            config.log_level = level.clone();
        }
        config.sinks.extend(self.sinks.0.iter().cloned());

        if config.sinks.is_empty() {
            config.sinks.push(SinkConfig::new(config.target.clone(), "stdout"));
        }
        config
    }
}
