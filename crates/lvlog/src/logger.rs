//! crates/lvlog/src/logger.rs
//! Threshold-gated entry points that format and emit one line per call.

use std::backtrace::Backtrace;
use std::fmt;
use std::io;
use std::sync::Arc;

use crate::config::LogConfig;
use crate::error::LogError;
use crate::format::{CallSite, LogRecord};
use crate::severity::Severity;
use crate::sink::LineSink;
use crate::std_logger::StandardLogger;
use crate::writer::LogWriter;

/// A leveled logger bound to one configuration and one output stream.
///
/// Messages below the configured threshold return after a single comparison.
/// Messages that pass are rendered by [`LogRecord`] and written to the
/// [`LineSink`]; error messages are additionally followed by a captured stack
/// trace.
///
/// Each level method accepts any [`Display`](fmt::Display) value. A plain
/// string is printed verbatim, braces included. Use [`format_args!`] (or the
/// crate's macros) to substitute arguments into a template.
///
/// # Examples
///
/// ```
/// use lvlog::{Logger, Severity};
///
/// let logger = Logger::with_writer(Vec::new());
/// logger.config().set_threshold(Severity::Warning);
///
/// logger.info("suppressed");
/// logger.warn(format_args!("disk {}% full", 93));
/// ```
#[derive(Debug)]
pub struct Logger {
    config: Arc<LogConfig>,
    sink: LineSink,
}

impl Logger {
    /// Creates a logger from an injected configuration and sink.
    #[must_use]
    pub fn new(config: Arc<LogConfig>, sink: LineSink) -> Self {
        Self { config, sink }
    }

    /// Creates a logger writing to standard output with default settings.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(Arc::new(LogConfig::new()), LineSink::stdout())
    }

    /// Creates a logger writing to `writer` with default settings.
    #[must_use]
    pub fn with_writer<W>(writer: W) -> Self
    where
        W: io::Write + Send + 'static,
    {
        Self::new(Arc::new(LogConfig::new()), LineSink::new(writer))
    }

    /// Shared configuration consulted on every call.
    pub fn config(&self) -> &Arc<LogConfig> {
        &self.config
    }

    /// Output stream lines are written to.
    pub fn sink(&self) -> &LineSink {
        &self.sink
    }

    /// Returns `true` when a message at `level` would be emitted.
    #[inline(always)]
    pub fn enabled(&self, level: Severity) -> bool {
        self.config.enabled(level)
    }

    /// Formats and writes one message.
    ///
    /// Returns `Ok(())` without side effects when `severity` is
    /// [`Severity::None`] or does not pass the threshold. Formatting failures
    /// and destination write failures are returned to the caller.
    pub fn log(
        &self,
        severity: Severity,
        site: CallSite<'_>,
        message: &dyn fmt::Display,
    ) -> Result<(), LogError> {
        if severity == Severity::None || !self.enabled(severity) {
            return Ok(());
        }

        let record = LogRecord::new(severity, self.config.colours(), site, message);
        let line = record.render()?;

        if severity == Severity::Error {
            let trace = Backtrace::force_capture();
            self.sink.emit(&line, Some(&trace))?;
        } else {
            self.sink.emit(&line, None)?;
        }
        Ok(())
    }

    /// Logs a tracing message.
    ///
    /// # Panics
    ///
    /// Panics if a `Display` implementation inside `message` returns an
    /// error, matching the behaviour of [`format!`].
    #[track_caller]
    pub fn trace(&self, message: impl fmt::Display) {
        if !self.enabled(Severity::Trace) {
            return;
        }
        self.dispatch(Severity::Trace, CallSite::caller(), &message);
    }

    /// Logs a debugging message.
    ///
    /// # Panics
    ///
    /// See [`trace`](Self::trace).
    #[track_caller]
    pub fn debug(&self, message: impl fmt::Display) {
        if !self.enabled(Severity::Debug) {
            return;
        }
        self.dispatch(Severity::Debug, CallSite::caller(), &message);
    }

    /// Logs an informative message.
    ///
    /// # Panics
    ///
    /// See [`trace`](Self::trace).
    #[track_caller]
    pub fn info(&self, message: impl fmt::Display) {
        if !self.enabled(Severity::Info) {
            return;
        }
        self.dispatch(Severity::Info, CallSite::caller(), &message);
    }

    /// Logs a warning.
    ///
    /// # Panics
    ///
    /// See [`trace`](Self::trace).
    #[track_caller]
    pub fn warn(&self, message: impl fmt::Display) {
        if !self.enabled(Severity::Warning) {
            return;
        }
        self.dispatch(Severity::Warning, CallSite::caller(), &message);
    }

    /// Logs an error followed by the current stack trace.
    ///
    /// # Panics
    ///
    /// See [`trace`](Self::trace).
    #[track_caller]
    pub fn error(&self, message: impl fmt::Display) {
        if !self.enabled(Severity::Error) {
            return;
        }
        self.dispatch(Severity::Error, CallSite::caller(), &message);
    }

    /// Logs `message` at the given level.
    ///
    /// # Panics
    ///
    /// See [`trace`](Self::trace).
    #[track_caller]
    pub fn log_at(&self, severity: Severity, message: impl fmt::Display) {
        if severity == Severity::None || !self.enabled(severity) {
            return;
        }
        self.dispatch(severity, CallSite::caller(), &message);
    }

    /// Sets the threshold from a raw value in `[0, 5]`.
    ///
    /// An out-of-range value is reported as an error message through this
    /// logger and the threshold is left unchanged.
    #[track_caller]
    pub fn set_log_level(&self, level: i64) {
        if let Err(error) = self.config.try_set_threshold(level) {
            self.error(error);
        }
    }

    /// Sets the adapter level from a raw value in `[0, 4]`.
    ///
    /// An out-of-range value is reported as an error message through this
    /// logger and the adapter level is left unchanged.
    #[track_caller]
    pub fn set_default_level(&self, level: i64) {
        if let Err(error) = self.config.try_set_default_level(level) {
            self.error(error);
        }
    }

    /// Enables or disables ANSI styling of severity tags.
    pub fn set_colours(&self, enabled: bool) {
        self.config.set_colours(enabled);
    }

    /// Byte-sink adapter logging each write at the adapter level.
    pub fn writer(&self) -> LogWriter<'_> {
        LogWriter::new(self)
    }

    /// [`log::Log`] implementation routed through [`writer`](Self::writer).
    pub fn standard_logger(&self) -> StandardLogger<'_> {
        StandardLogger::new(self)
    }

    fn dispatch(&self, severity: Severity, site: CallSite<'_>, message: &dyn fmt::Display) {
        match self.log(severity, site, message) {
            Ok(()) | Err(LogError::Io(_)) => {}
            Err(error @ LogError::Format(_)) => panic!("{error}"),
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::stdout()
    }
}
