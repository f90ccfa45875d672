//! Output target trait definition.

use std::fmt::Debug;
use std::io::Write;

/// Trait for addressable output sinks.
///
/// A sink is anything able to show a piece of text: an on-screen element, a
/// file, stdout, or an in-memory buffer. Sinks are looked up by [`id`] in a
/// [`SinkRegistry`](crate::SinkRegistry).
///
/// [`id`]: OutputTarget::id
pub trait OutputTarget: Send + Sync + Debug {
    /// Returns the identifier this sink is addressed by.
    ///
    /// Convention: "-" for stdout, file path for files.
    fn id(&self) -> &str;

    /// Open the sink for writing, discarding any existing content.
    fn open_overwrite(&self) -> std::io::Result<Box<dyn Write + Send>>;

    /// Replace the sink's visible text with `text`.
    fn replace_text(&self, text: &str) -> std::io::Result<()> {
        let mut writer = self.open_overwrite()?;
        writer.write_all(text.as_bytes())?;
        writer.flush()
    }
}
