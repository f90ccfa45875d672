//! Application entry point: render the startup message once the host loads.

use std::sync::{Arc, Mutex, PoisonError};

use crate::config::AppConfig;
use crate::error::SinkError;
use crate::lifecycle::LoadSignal;
use crate::renderer::Renderer;

/// Message written by [`App::init`] unless configured otherwise.
pub const DEFAULT_MESSAGE: &str = "Hello World";
/// Sink id written by [`App::init`] unless configured otherwise.
pub const DEFAULT_TARGET: &str = "message";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Waiting for the host's load signal
    #[default]
    Idle,
    /// `init` has run at least once
    Done,
}

/// Result of one [`App::init`] call.
#[derive(Debug)]
pub struct InitOutcome {
    pub phase: Phase,
    pub result: Result<(), SinkError>,
}

impl InitOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

#[derive(Debug)]
pub struct App {
    renderer: Renderer,
    message: String,
    target: String,
    phase: Mutex<Phase>,
}

impl App {
    pub fn new(renderer: Renderer) -> Self {
        Self {
            renderer,
            message: DEFAULT_MESSAGE.to_string(),
            target: DEFAULT_TARGET.to_string(),
            phase: Mutex::new(Phase::Idle),
        }
    }

    /// Create an app whose message and target come from `config`.
    pub fn from_config(renderer: Renderer, config: &AppConfig) -> Self {
        Self::new(renderer)
            .with_message(config.message.clone())
            .with_target(config.target.clone())
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn phase(&self) -> Phase {
        *self.phase.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Display the startup message, then emit exactly one status line.
    ///
    /// The status line is emitted whether or not the write succeeded; it
    /// only claims success when the target sink was actually written.
    pub fn init(&self) -> InitOutcome {
        let result = self.renderer.display_message(&self.message, &self.target);

        let diagnostics = self.renderer.diagnostics();
        match &result {
            Ok(()) => diagnostics.info("application initialized successfully"),
            Err(e) => diagnostics.warn(&format!("application initialized with errors: {e}")),
        }

        let mut phase = self.phase.lock().unwrap_or_else(PoisonError::into_inner);
        *phase = Phase::Done;

        InitOutcome {
            phase: *phase,
            result,
        }
    }

    /// Subscribe [`init`](Self::init) to the host's load signal.
    pub fn register(self: &Arc<Self>, signal: &mut LoadSignal) -> bool {
        let app = Arc::clone(self);
        signal.subscribe(move || {
            let _ = app.init();
        })
    }
}
