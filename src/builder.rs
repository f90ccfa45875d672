//! Builder for creating a SinkRegistry from configuration.

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;

use crate::config::{AppConfig, SinkConfig};
use crate::error::{AggregateError, ErrorPolicy, SinkError, Stage};
use crate::io::{FileOutput, InMemorySink, OutputTarget, StderrOutput, StdoutOutput};
use crate::registry::SinkRegistry;

#[derive(Debug, Default)]
pub struct RegistryBuilder {
    sink_configs: Vec<SinkConfig>,
    sinks: Vec<Arc<dyn OutputTarget>>,
    error_policy: ErrorPolicy,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the builder with the sinks and error policy from `config`.
    pub fn from_config(config: &AppConfig) -> Result<Self, AggregateError> {
        let policy = config.error_policy()?;
        Ok(Self::new()
            .with_mode(policy)
            .add_sink_configs(config.sinks.iter().cloned()))
    }

    pub fn add_sink_config(mut self, config: SinkConfig) -> Self {
        self.sink_configs.push(config);
        self
    }

    pub fn add_sink_configs(mut self, configs: impl IntoIterator<Item = SinkConfig>) -> Self {
        self.sink_configs.extend(configs);
        self
    }

    /// Add a pre-built sink.
    pub fn add_sink(mut self, sink: Arc<dyn OutputTarget>) -> Self {
        self.sinks.push(sink);
        self
    }

    pub fn with_mode(mut self, policy: ErrorPolicy) -> Self {
        self.error_policy = policy;
        self
    }

    pub fn build(self) -> Result<SinkRegistry, AggregateError> {
        let mut resolved = self.resolve_sinks()?;
        resolved.extend(self.sinks);

        let mut registry = SinkRegistry::new();
        let mut seen = HashSet::new();
        let mut errors = Vec::new();

        for sink in resolved {
            if !seen.insert(sink.id().to_string()) {
                errors.push(SinkError {
                    stage: Stage::Resolve,
                    target: sink.id().to_string(),
                    error: format!("duplicate sink id '{}'", sink.id()).into(),
                });
                if matches!(self.error_policy, ErrorPolicy::FastFail) {
                    return Err(AggregateError { errors });
                }
                continue;
            }
            registry.register(sink);
        }

        if errors.is_empty() {
            Ok(registry)
        } else {
            Err(AggregateError { errors })
        }
    }

    fn resolve_sinks(&self) -> Result<Vec<Arc<dyn OutputTarget>>, AggregateError> {
        let mut sinks = Vec::with_capacity(self.sink_configs.len());
        let mut errors = Vec::new();

        for config in &self.sink_configs {
            match resolve_single_sink(config) {
                Ok(sink) => sinks.push(sink),
                Err(e) => {
                    errors.push(e);
                    if matches!(self.error_policy, ErrorPolicy::FastFail) {
                        return Err(AggregateError { errors });
                    }
                }
            }
        }

        if errors.is_empty() {
            Ok(sinks)
        } else {
            Err(AggregateError { errors })
        }
    }
}

fn resolve_single_sink(config: &SinkConfig) -> Result<Arc<dyn OutputTarget>, SinkError> {
    let resolve_err = |msg: String| SinkError {
        stage: Stage::Resolve,
        target: config.id.clone(),
        error: msg.into(),
    };

    let sink: Arc<dyn OutputTarget> = match config.kind.to_ascii_lowercase().as_str() {
        "stdout" | "-" => Arc::new(StdoutOutput::named(config.id.clone())),
        "stderr" => Arc::new(StderrOutput::named(config.id.clone())),
        "memory" => Arc::new(InMemorySink::new(config.id.clone())),
        "file" => {
            let path = config
                .path
                .as_ref()
                .ok_or_else(|| resolve_err("file sink requires a path".into()))?;
            Arc::new(FileOutput::named(config.id.clone(), PathBuf::from(path)))
        }
        other => return Err(resolve_err(format!("unknown sink kind '{other}'"))),
    };

    Ok(sink)
}
