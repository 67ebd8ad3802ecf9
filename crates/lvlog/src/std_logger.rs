//! crates/lvlog/src/std_logger.rs
//! Bridge from the `log` facade into a [`Logger`].
//!
//! Libraries that only know the [`log`] crate can be pointed at a [`Logger`]
//! through [`StandardLogger`]. Every record is rendered once and handed to the
//! logger's byte-sink adapter, so it is emitted at the adapter level rather
//! than at the record's own level.

use std::fmt;

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

use crate::logger::Logger;
use crate::severity::Severity;
use crate::writer::LogWriter;

impl From<Level> for Severity {
    fn from(level: Level) -> Self {
        match level {
            Level::Error => Self::Error,
            Level::Warn => Self::Warning,
            Level::Info => Self::Info,
            Level::Debug => Self::Debug,
            Level::Trace => Self::Trace,
        }
    }
}

impl From<LevelFilter> for Severity {
    fn from(filter: LevelFilter) -> Self {
        filter.to_level().map_or(Self::None, Self::from)
    }
}

impl From<Severity> for LevelFilter {
    fn from(level: Severity) -> Self {
        match level {
            Severity::None => Self::Off,
            Severity::Error => Self::Error,
            Severity::Warning => Self::Warn,
            Severity::Info => Self::Info,
            Severity::Debug => Self::Debug,
            Severity::Trace => Self::Trace,
        }
    }
}

/// [`log::Log`] implementation backed by a [`Logger`].
///
/// # Examples
///
/// ```
/// use log::Log;
/// use lvlog::Logger;
///
/// let logger = Logger::with_writer(Vec::new());
/// let bridge = logger.standard_logger();
///
/// bridge.log(
///     &log::Record::builder()
///         .args(format_args!("from a library"))
///         .level(log::Level::Info)
///         .build(),
/// );
/// ```
#[derive(Clone, Copy, Debug)]
pub struct StandardLogger<'a> {
    writer: LogWriter<'a>,
}

impl<'a> StandardLogger<'a> {
    /// Creates a bridge into `logger`.
    #[must_use]
    pub const fn new(logger: &'a Logger) -> Self {
        Self {
            writer: LogWriter::new(logger),
        }
    }

    /// Logger the bridge forwards to.
    #[must_use]
    pub const fn logger(&self) -> &'a Logger {
        self.writer.logger()
    }
}

impl StandardLogger<'static> {
    /// Registers the bridge as the process-wide `log` implementation.
    ///
    /// The `log` max level is opened fully; filtering happens against the
    /// logger's own threshold.
    pub fn init(self) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(LevelFilter::Trace);
        Ok(())
    }
}

impl Log for StandardLogger<'_> {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        let logger = self.logger();
        let level = logger.config().default_level();
        level != Severity::None && logger.enabled(level)
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut message = String::new();
        if fmt::write(&mut message, *record.args()).is_err() {
            return;
        }
        self.writer.dispatch(&message);
    }

    fn flush(&self) {}
}
