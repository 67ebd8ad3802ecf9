//! crates/lvlog/src/sink.rs
//! Synchronous, line-oriented output destination.

use std::fmt;
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

/// The single stream every formatted line is written to.
///
/// The sink owns a boxed [`io::Write`] behind a mutex. Each call to
/// [`emit`](Self::emit) writes the line, its terminator, and an optional
/// trailer while holding the lock, then flushes, so concurrent callers never
/// interleave inside a line and a trailer always directly follows its line.
///
/// # Examples
///
/// ```
/// use lvlog::LineSink;
///
/// let sink = LineSink::new(Vec::new());
/// sink.emit("[INF] ready", None)?;
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct LineSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl LineSink {
    /// Creates a sink over an arbitrary writer.
    #[must_use]
    pub fn new<W>(writer: W) -> Self
    where
        W: Write + Send + 'static,
    {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    /// Creates a sink over the process's standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    /// Writes `line` followed by `\n`, then `trailer` if present, and flushes.
    ///
    /// Errors from the underlying writer are returned unchanged; nothing is
    /// retried.
    pub fn emit(&self, line: &str, trailer: Option<&dyn fmt::Display>) -> io::Result<()> {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
        if let Some(trailer) = trailer {
            let trailer = trailer.to_string();
            writer.write_all(trailer.as_bytes())?;
            if !trailer.ends_with('\n') {
                writer.write_all(b"\n")?;
            }
        }
        writer.flush()
    }

    /// Replaces the destination, returning the previous writer.
    ///
    /// Lines already emitted stay in the returned writer, so callers can
    /// flush or inspect them before dropping it.
    #[must_use = "the returned writer holds output produced before the replacement"]
    pub fn replace_writer<W>(&self, writer: W) -> Box<dyn Write + Send>
    where
        W: Write + Send + 'static,
    {
        let mut guard = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, Box::new(writer))
    }
}

impl Default for LineSink {
    fn default() -> Self {
        Self::stdout()
    }
}

impl fmt::Debug for LineSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineSink").finish_non_exhaustive()
    }
}
