//! crates/lvlog/src/global.rs
//! Process-wide logger and the free functions that forward to it.
//!
//! The global logger is created lazily on first use and writes to standard
//! output with the default configuration. [`install`] replaces that default
//! before anything has logged, for example to direct output to a file.

use std::fmt;
use std::sync::OnceLock;

use log::SetLoggerError;

use crate::logger::Logger;
use crate::std_logger::StandardLogger;
use crate::writer::LogWriter;

static LOGGER: OnceLock<Logger> = OnceLock::new();

/// Installs `logger` as the process-wide logger.
///
/// Fails, handing the logger back, when a global logger already exists,
/// either from an earlier call or because something has already logged.
pub fn install(logger: Logger) -> Result<(), Logger> {
    LOGGER.set(logger)
}

/// Returns the process-wide logger, creating the default one if needed.
pub fn logger() -> &'static Logger {
    LOGGER.get_or_init(Logger::stdout)
}

/// Sets the global threshold from a raw value in `[0, 5]`.
///
/// Out-of-range values are reported as an error message and ignored.
#[track_caller]
pub fn set_log_level(level: i64) {
    logger().set_log_level(level);
}

/// Sets the global adapter level from a raw value in `[0, 4]`.
///
/// Out-of-range values are reported as an error message and ignored.
#[track_caller]
pub fn set_default_level(level: i64) {
    logger().set_default_level(level);
}

/// Enables or disables coloured severity tags.
pub fn set_colours(enabled: bool) {
    logger().set_colours(enabled);
}

/// Logs a tracing message through the global logger.
#[track_caller]
pub fn trace(message: impl fmt::Display) {
    logger().trace(message);
}

/// Logs a debugging message through the global logger.
#[track_caller]
pub fn debug(message: impl fmt::Display) {
    logger().debug(message);
}

/// Logs an informative message through the global logger.
#[track_caller]
pub fn info(message: impl fmt::Display) {
    logger().info(message);
}

/// Logs a warning through the global logger.
#[track_caller]
pub fn warn(message: impl fmt::Display) {
    logger().warn(message);
}

/// Logs an error and stack trace through the global logger.
#[track_caller]
pub fn error(message: impl fmt::Display) {
    logger().error(message);
}

/// Byte-sink adapter over the global logger.
pub fn writer() -> LogWriter<'static> {
    logger().writer()
}

/// [`log::Log`] bridge over the global logger.
pub fn standard_logger() -> StandardLogger<'static> {
    logger().standard_logger()
}

/// Routes the `log` crate's macros into the global logger.
pub fn init_standard_logger() -> Result<(), SetLoggerError> {
    standard_logger().init()
}
