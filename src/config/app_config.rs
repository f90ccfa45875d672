//! Application configuration loaded from JSON, YAML or TOML.

use std::path::Path;

use serde::Deserialize;

use crate::app::{DEFAULT_MESSAGE, DEFAULT_TARGET};
use crate::error::{ConfigError, ErrorPolicy};

fn default_message() -> String {
    DEFAULT_MESSAGE.to_string()
}

fn default_target() -> String {
    DEFAULT_TARGET.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppConfig {
    /// Message written at startup
    #[serde(default = "default_message")]
    pub message: String,
    /// Id of the sink the message is written to
    #[serde(default = "default_target")]
    pub target: String,
    /// Log level for the tracing subscriber
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Error policy for sink setup: "fast_fail" or "accumulate"
    #[serde(default)]
    pub error_policy: Option<String>,
    /// Sinks to register
    #[serde(default)]
    pub sinks: Vec<SinkConfig>,
}

/// Configuration for a single sink.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SinkConfig {
    /// Id the sink is addressed by
    pub id: String,
    /// Kind of sink: "stdout", "stderr", "file" or "memory"
    pub kind: String,
    /// File path (for file sinks)
    #[serde(default)]
    pub path: Option<String>,
}

impl SinkConfig {
    pub fn new(id: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            path: None,
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            message: default_message(),
            target: default_target(),
            log_level: default_log_level(),
            error_policy: None,
            sinks: Vec::new(),
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    pub fn with_error_policy(mut self, policy: impl Into<String>) -> Self {
        self.error_policy = Some(policy.into());
        self
    }

    pub fn add_sink(mut self, sink: SinkConfig) -> Self {
        self.sinks.push(sink);
        self
    }

    /// Parsed error policy; `Accumulate` when unset.
    pub fn error_policy(&self) -> Result<ErrorPolicy, ConfigError> {
        match &self.error_policy {
            None => Ok(ErrorPolicy::default()),
            Some(raw) => ErrorPolicy::parse(raw).ok_or_else(|| ConfigError::InvalidPolicy(raw.clone())),
        }
    }

    /// Load a config file, picking the format from its extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let display = path.display().to_string();
        let format = ConfigFormat::from_path(path)
            .ok_or_else(|| ConfigError::UnsupportedFormat(display.clone()))?;
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: display.clone(),
            source,
        })?;
        Self::parse(&contents, format).map_err(|e| match e {
            ConfigError::Parse { message, .. } => ConfigError::Parse {
                path: display,
                message,
            },
            other => other,
        })
    }

    /// Parse config text in the given format.
    pub fn parse(contents: &str, format: ConfigFormat) -> Result<Self, ConfigError> {
        let parse_err = |message: String| ConfigError::Parse {
            path: "<inline>".into(),
            message,
        };

        match format {
            #[cfg(feature = "json")]
            ConfigFormat::Json => serde_json::from_str(contents).map_err(|e| parse_err(e.to_string())),
            #[cfg(feature = "yaml")]
            ConfigFormat::Yaml => serde_yaml::from_str(contents).map_err(|e| parse_err(e.to_string())),
            #[cfg(feature = "toml")]
            ConfigFormat::Toml => toml::from_str(contents).map_err(|e| parse_err(e.to_string())),
            #[allow(unreachable_patterns)]
            other => {
                let _ = (contents, parse_err);
                Err(ConfigError::UnsupportedFormat(other.to_string()))
            }
        }
    }
}

/// Config file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
    Toml,
}

impl ConfigFormat {
    /// Parse a format name or file extension.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Some(ConfigFormat::Json),
            "yaml" | "yml" => Some(ConfigFormat::Yaml),
            "toml" => Some(ConfigFormat::Toml),
            _ => None,
        }
    }

    /// Infer the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension().and_then(|e| e.to_str())?;
        Self::parse(ext)
    }
}

impl std::fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigFormat::Json => write!(f, "json"),
            ConfigFormat::Yaml => write!(f, "yaml"),
            ConfigFormat::Toml => write!(f, "toml"),
        }
    }
}
