//! Output sink abstractions.
//!
//! This module provides:
//! - `OutputTarget`: Trait for addressable text sinks
//! - Standard implementations for files and stdout/stderr
//! - An in-memory implementation for hosts and tests

mod memory;
mod output;
mod std_io;

pub use memory::InMemorySink;
pub use output::OutputTarget;
pub use std_io::{FileOutput, StderrOutput, StdoutOutput};
