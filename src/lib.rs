//! # msgsink
//!
//! Render a text message into a named output sink once the host has loaded.
//!
//! ## Overview
//!
//! msgsink provides:
//! - **Sink registry**: An explicit map from identifier to output sink
//! - **Message renderer**: Replace a sink's text by id, reporting missing sinks
//! - **Load signal**: A one-shot "content loaded" callback registration
//! - **App entry point**: `init` writes the startup message exactly once per load
//! - **Diagnostics**: Operator-facing status lines through `tracing` or in memory
//! - **Configuration**: Sinks and message settings from JSON/YAML/TOML files
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use msgsink::{App, InMemorySink, LoadSignal, Renderer, SinkRegistry};
//!
//! let sink = InMemorySink::new("message");
//! let registry = SinkRegistry::new().with_sink(Arc::new(sink.clone()));
//! let app = Arc::new(App::new(Renderer::new(registry)));
//!
//! let mut signal = LoadSignal::new();
//! app.register(&mut signal);
//! signal.fire();
//!
//! assert_eq!(sink.contents_string(), "Hello World");
//! ```
//!
//! ## Failure reporting
//!
//! A missing target sink is written to the diagnostic channel as an error
//! line naming the id, and is also returned to the caller as a
//! [`SinkError`] whose [`is_target_not_found`](SinkError::is_target_not_found)
//! is `true`. [`App::init`] always follows the render with exactly one status
//! line, which only reports success when the sink was written.
//!
//! ## Features
//!
//! - `json` - JSON config files (enabled by default)
//! - `yaml` - YAML config files
//! - `toml` - TOML config files
//! - `miette` - Pretty error reporting with miette
//! - `sarge` - Argument parsing for the `msgsink` binary

// Core modules
pub mod app;
pub mod builder;
pub mod cli;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod io;
pub mod lifecycle;
pub mod logging;
pub mod registry;
pub mod renderer;

// Re-exports for convenience
pub use app::{App, DEFAULT_MESSAGE, DEFAULT_TARGET, InitOutcome, Phase};
pub use builder::RegistryBuilder;
pub use config::{AppConfig, ConfigFormat, SinkConfig};
pub use diagnostics::{Diagnostics, Level, MemoryDiagnostics, TracingDiagnostics};
pub use error::{
    AggregateError, ConfigError, ErrorPolicy, LoggingError, SinkError, Stage, TargetNotFound,
};
pub use io::{FileOutput, InMemorySink, OutputTarget, StderrOutput, StdoutOutput};
pub use lifecycle::LoadSignal;
pub use registry::SinkRegistry;
pub use renderer::Renderer;

/// Build an [`App`] from an `AppConfig`, reporting through `tracing`.
pub fn build_app_from_config(config: &AppConfig) -> Result<App, AggregateError> {
    let registry = RegistryBuilder::from_config(config)?.build()?;
    Ok(App::from_config(Renderer::new(registry), config))
}

/// Build an [`App`] from an `AppConfig`, allowing the caller to customize
/// the `RegistryBuilder` first, e.g. to add in-memory sinks the host keeps
/// handles to.
pub fn build_app_from_config_with<F>(config: &AppConfig, customize: F) -> Result<App, AggregateError>
where
    F: FnOnce(RegistryBuilder) -> RegistryBuilder,
{
    let builder = customize(RegistryBuilder::from_config(config)?);
    let registry = builder.build()?;
    Ok(App::from_config(Renderer::new(registry), config))
}

// Miette re-exports
#[cfg(feature = "miette")]
pub use error::SinkDiagnostic;
