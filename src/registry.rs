//! Explicit identifier -> sink mapping.

use std::collections::HashMap;
use std::sync::Arc;

use crate::io::OutputTarget;

/// Registry of addressable sinks, keyed by [`OutputTarget::id`].
#[derive(Debug, Clone, Default)]
pub struct SinkRegistry {
    sinks: HashMap<String, Arc<dyn OutputTarget>>,
}

impl SinkRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a sink under its own id, returning the sink it replaced.
    pub fn register(&mut self, sink: Arc<dyn OutputTarget>) -> Option<Arc<dyn OutputTarget>> {
        self.sinks.insert(sink.id().to_string(), sink)
    }

    /// Builder-style [`register`](Self::register).
    pub fn with_sink(mut self, sink: Arc<dyn OutputTarget>) -> Self {
        self.register(sink);
        self
    }

    pub fn get(&self, id: &str) -> Option<&Arc<dyn OutputTarget>> {
        self.sinks.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.sinks.contains_key(id)
    }

    pub fn remove(&mut self, id: &str) -> Option<Arc<dyn OutputTarget>> {
        self.sinks.remove(id)
    }

    /// Registered ids, sorted.
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.sinks.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}
