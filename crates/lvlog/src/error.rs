//! crates/lvlog/src/error.rs
//! Error types for level validation and line emission.

use std::{fmt, io};

use crate::severity::Severity;

/// Error returned when a level value cannot be accepted.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum LevelError {
    /// An integer level fell outside `[Severity::None, max]`.
    #[error("Invalid log level {value}")]
    OutOfRange {
        /// The rejected value.
        value: i64,
        /// The most verbose level the setter accepts.
        max: Severity,
    },
    /// A textual level did not match any known severity name.
    #[error("unknown log level name: {0}")]
    UnknownName(String),
}

/// Error returned by [`Logger::log`](crate::Logger::log).
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// A `Display` implementation inside the message reported a failure.
    #[error("failed to format log message")]
    Format(#[from] fmt::Error),
    /// The destination stream rejected the write.
    #[error("failed to write log line: {0}")]
    Io(#[from] io::Error),
}
