#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `lvlog` is a small leveled logging facade. Messages carry one of six
//! ordered [`Severity`] values and are emitted only when the configured
//! threshold is at least as verbose as the message. Each emitted line names
//! its severity, the source file and line that produced it, and the message:
//!
//! ```text
//! [INF]                    src/main.rs:12  listening on 0.0.0.0:8080
//! ```
//!
//! # Design
//!
//! A [`Logger`] combines a shared [`LogConfig`] (threshold, adapter level and
//! colour flag held in atomics) with a [`LineSink`] that serialises writes to
//! one output stream. The entry points use `#[track_caller]`, so the reported
//! location is the caller's rather than the logger's. Messages below the
//! threshold cost one atomic load and are never formatted.
//!
//! Third-party code that wants a byte sink or a [`log::Log`] implementation
//! can use [`Logger::writer`] and [`Logger::standard_logger`]. Both log at the
//! configured adapter level. With the `tracing` feature, `LvlogLayer`
//! forwards `tracing` events at their own level.
//!
//! # Invariants
//!
//! - [`Severity::None`] is never emitted. As a threshold it silences
//!   everything.
//! - Out-of-range level changes leave the configuration untouched and are
//!   reported as one error line, `Invalid log level <n>`.
//! - Error lines are immediately followed by a stack trace on the same stream.
//! - The adapter always reports the full buffer as written.
//!
//! # Examples
//!
//! ```
//! use lvlog::{Logger, Severity};
//!
//! let logger = Logger::with_writer(Vec::new());
//! logger.config().set_threshold(Severity::Info);
//!
//! lvlog::info!(logger: &logger, "{} peers connected", 3);
//! lvlog::debug!(logger: &logger, "suppressed");
//! logger.set_log_level(9); // reported, threshold stays at Info
//! ```
//!
//! The global facade writes to standard output unless [`install`] was called
//! first:
//!
//! ```no_run
//! lvlog::set_log_level(3);
//! lvlog::info("ready");
//! lvlog::warn!("retrying in {}s", 5);
//! ```

mod config;
mod error;
pub mod format;
mod global;
mod logger;
mod macros;
mod severity;
mod sink;
mod std_logger;
#[cfg(feature = "tracing")]
mod tracing_bridge;
mod writer;

pub use config::{DEFAULT_ADAPTER_LEVEL, DEFAULT_THRESHOLD, LogConfig, MAX_ADAPTER_LEVEL};
pub use error::{LevelError, LogError};
pub use format::{CallSite, LogRecord};
pub use global::{
    debug, error, info, init_standard_logger, install, logger, set_colours, set_default_level,
    set_log_level, standard_logger, trace, warn, writer,
};
pub use logger::Logger;
pub use severity::Severity;
pub use sink::LineSink;
pub use std_logger::StandardLogger;
#[cfg(feature = "tracing")]
pub use tracing_bridge::{LvlogLayer, init_tracing};
pub use writer::LogWriter;
