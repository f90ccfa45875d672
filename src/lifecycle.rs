//! One-shot "content loaded" signal.
//!
//! Hosts register listeners before their structural content is ready and
//! call [`LoadSignal::fire`] once it is. Listeners run once, in order.

use std::fmt;

type Listener = Box<dyn FnOnce() + Send>;

#[derive(Default)]
pub struct LoadSignal {
    listeners: Vec<Listener>,
    fired: bool,
}

impl fmt::Debug for LoadSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadSignal")
            .field("pending", &self.listeners.len())
            .field("fired", &self.fired)
            .finish()
    }
}

impl LoadSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener` to run when the signal fires.
    ///
    /// Returns `false` (and drops the listener) if the signal already fired.
    pub fn subscribe<F>(&mut self, listener: F) -> bool
    where
        F: FnOnce() + Send + 'static,
    {
        if self.fired {
            tracing::warn!("load signal already fired; listener ignored");
            return false;
        }
        self.listeners.push(Box::new(listener));
        true
    }

    /// Run every pending listener and return how many ran.
    ///
    /// Only the first call does anything.
    pub fn fire(&mut self) -> usize {
        if self.fired {
            return 0;
        }
        self.fired = true;

        let listeners = std::mem::take(&mut self.listeners);
        let count = listeners.len();
        for listener in listeners {
            listener();
        }
        tracing::debug!(listeners = count, "load signal fired");
        count
    }

    pub fn is_fired(&self) -> bool {
        self.fired
    }

    pub fn pending(&self) -> usize {
        self.listeners.len()
    }
}
