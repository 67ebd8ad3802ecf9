//! crates/lvlog/src/writer.rs
//! Byte-sink adapter that turns each write into one log message.

use std::borrow::Cow;
use std::io;

use crate::format::CallSite;
use crate::logger::Logger;
use crate::severity::Severity;

/// [`io::Write`] implementation that logs every buffer it receives.
///
/// Each call to [`write`](io::Write::write) becomes exactly one message at the
/// logger's adapter level, read at the time of the call. The buffer is decoded
/// as UTF-8 (invalid sequences are replaced) and a single trailing line
/// terminator is removed. The call always reports the whole buffer as
/// consumed, even when the message is suppressed by the threshold.
///
/// # Examples
///
/// ```
/// use std::io::Write;
/// use lvlog::{Logger, Severity};
///
/// let logger = Logger::with_writer(Vec::new());
/// logger.config().set_threshold(Severity::Info);
/// logger.set_default_level(Severity::Info as i64);
///
/// let mut writer = logger.writer();
/// assert_eq!(writer.write(b"hello")?, 5);
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct LogWriter<'a> {
    logger: &'a Logger,
}

impl<'a> LogWriter<'a> {
    /// Creates an adapter over `logger`.
    #[must_use]
    pub const fn new(logger: &'a Logger) -> Self {
        Self { logger }
    }

    /// Logger the adapter dispatches to.
    #[must_use]
    pub const fn logger(&self) -> &'a Logger {
        self.logger
    }

    pub(crate) fn dispatch(&self, message: &str) {
        let level = self.logger.config().default_level();
        if matches!(level, Severity::None | Severity::Trace) {
            return;
        }
        let _ = self.logger.log(level, CallSite::caller(), &message);
    }
}

impl io::Write for LogWriter<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let text = String::from_utf8_lossy(buf);
        self.dispatch(strip_terminator(&text));
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Removes one trailing `\n` or `\r\n`.
fn strip_terminator<'t>(text: &'t Cow<'_, str>) -> &'t str {
    let text = text.as_ref();
    text.strip_suffix("\r\n")
        .or_else(|| text.strip_suffix('\n'))
        .unwrap_or(text)
}
