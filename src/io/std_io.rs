//! Standard sinks for files and stdout/stderr.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;

use super::OutputTarget;

/// Sink that writes to stdout.
#[derive(Debug, Clone)]
pub struct StdoutOutput {
    id: String,
}

impl StdoutOutput {
    /// Create a stdout sink addressed as "-".
    pub fn new() -> Self {
        Self::named("-")
    }

    /// Create a stdout sink addressed by `id`.
    pub fn named(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl Default for StdoutOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputTarget for StdoutOutput {
    fn id(&self) -> &str {
        &self.id
    }

    fn open_overwrite(&self) -> io::Result<Box<dyn Write + Send>> {
        Ok(Box::new(io::stdout()))
    }

    // A terminal cannot be cleared, so each message gets its own line.
    fn replace_text(&self, text: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{text}")?;
        out.flush()
    }
}

/// Sink that writes to stderr.
#[derive(Debug, Clone)]
pub struct StderrOutput {
    id: String,
}

impl StderrOutput {
    /// Create a stderr sink addressed as "stderr".
    pub fn new() -> Self {
        Self::named("stderr")
    }

    /// Create a stderr sink addressed by `id`.
    pub fn named(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl Default for StderrOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputTarget for StderrOutput {
    fn id(&self) -> &str {
        &self.id
    }

    fn open_overwrite(&self) -> io::Result<Box<dyn Write + Send>> {
        Ok(Box::new(io::stderr()))
    }

    fn replace_text(&self, text: &str) -> io::Result<()> {
        let mut err = io::stderr().lock();
        writeln!(err, "{text}")?;
        err.flush()
    }
}

/// Sink backed by a file; every write truncates it.
#[derive(Debug, Clone)]
pub struct FileOutput {
    id: String,
    path: PathBuf,
}

impl FileOutput {
    /// Create a file sink addressed by its path.
    pub fn new(path: PathBuf) -> Self {
        let id = path.to_string_lossy().into_owned();
        Self { id, path }
    }

    /// Create a file sink addressed by `id`.
    pub fn named(id: impl Into<String>, path: PathBuf) -> Self {
        Self { id: id.into(), path }
    }

    /// Get the file path.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl OutputTarget for FileOutput {
    fn id(&self) -> &str {
        &self.id
    }

    fn open_overwrite(&self) -> io::Result<Box<dyn Write + Send>> {
        let file = OpenOptions::new()
            .create(true)
            .truncate(true)
            .write(true)
            .open(&self.path)?;
        Ok(Box::new(file))
    }
}
