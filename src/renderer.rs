//! Message renderer: resolve a sink by id and replace its text.

use std::sync::Arc;

use crate::diagnostics::{Diagnostics, TracingDiagnostics};
use crate::error::{SinkError, Stage};
use crate::registry::SinkRegistry;

/// Writes messages into sinks looked up in a [`SinkRegistry`].
#[derive(Debug, Clone)]
pub struct Renderer {
    registry: SinkRegistry,
    diagnostics: Arc<dyn Diagnostics>,
}

impl Renderer {
    /// Create a renderer that reports through `tracing`.
    pub fn new(registry: SinkRegistry) -> Self {
        Self::with_diagnostics(registry, Arc::new(TracingDiagnostics))
    }

    pub fn with_diagnostics(registry: SinkRegistry, diagnostics: Arc<dyn Diagnostics>) -> Self {
        Self {
            registry,
            diagnostics,
        }
    }

    pub fn registry(&self) -> &SinkRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut SinkRegistry {
        &mut self.registry
    }

    pub fn diagnostics(&self) -> &Arc<dyn Diagnostics> {
        &self.diagnostics
    }

    /// Replace the text of sink `target_id` with `message`.
    ///
    /// A missing sink is reported on the diagnostic channel (one error line
    /// naming `target_id`) and returned as a `Stage::Resolve` error; no sink
    /// is touched in that case. Write failures are reported the same way
    /// with `Stage::Write`.
    pub fn display_message(&self, message: &str, target_id: &str) -> Result<(), SinkError> {
        let Some(sink) = self.registry.get(target_id) else {
            let err = SinkError::not_found(target_id);
            self.diagnostics
                .error(&format!("element with id '{target_id}' not found"));
            return Err(err);
        };

        sink.replace_text(message).map_err(|e| {
            self.diagnostics
                .error(&format!("failed to write to '{target_id}': {e}"));
            SinkError {
                stage: Stage::Write,
                target: target_id.to_string(),
                error: Box::new(e),
            }
        })?;

        tracing::debug!(target_id, bytes = message.len(), "message displayed");
        Ok(())
    }
}
