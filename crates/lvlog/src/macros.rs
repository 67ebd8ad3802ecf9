//! crates/lvlog/src/macros.rs
//! Leveled logging macros.
//!
//! Each macro accepts either a single message, printed verbatim, or a format
//! string followed by arguments. The threshold is checked before any argument
//! is evaluated. An optional leading `logger: <expr>,` targets a specific
//! [`Logger`](crate::Logger) instead of the global one.

/// Shared expansion for the level macros.
#[doc(hidden)]
#[macro_export]
macro_rules! __emit {
    ($logger:expr, $level:expr, $fmt:literal, $($arg:tt)+) => {{
        let logger: &$crate::Logger = $logger;
        let level: $crate::Severity = $level;
        if logger.enabled(level) {
            logger.log_at(level, ::std::format_args!($fmt, $($arg)+));
        }
    }};
    ($logger:expr, $level:expr, $message:expr $(,)?) => {{
        let logger: &$crate::Logger = $logger;
        let level: $crate::Severity = $level;
        if logger.enabled(level) {
            logger.log_at(level, $message);
        }
    }};
}

/// Logs at [`Severity::Trace`](crate::Severity::Trace).
///
/// ```
/// let dump = [0x16_u8, 0x03, 0x01];
/// lvlog::trace!("handshake bytes {:02x?}", dump);
/// ```
#[macro_export]
macro_rules! trace {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::__emit!($logger, $crate::Severity::Trace, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::__emit!($crate::logger(), $crate::Severity::Trace, $($arg)+)
    };
}

/// Logs at [`Severity::Debug`](crate::Severity::Debug).
#[macro_export]
macro_rules! debug {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::__emit!($logger, $crate::Severity::Debug, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::__emit!($crate::logger(), $crate::Severity::Debug, $($arg)+)
    };
}

/// Logs at [`Severity::Info`](crate::Severity::Info).
///
/// ```
/// let logger = lvlog::Logger::with_writer(Vec::new());
/// lvlog::info!(logger: &logger, "listening on {}:{}", "0.0.0.0", 8080);
/// lvlog::info!(logger: &logger, "literal {braces} stay as written");
/// ```
#[macro_export]
macro_rules! info {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::__emit!($logger, $crate::Severity::Info, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::__emit!($crate::logger(), $crate::Severity::Info, $($arg)+)
    };
}

/// Logs at [`Severity::Warning`](crate::Severity::Warning).
#[macro_export]
macro_rules! warn {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::__emit!($logger, $crate::Severity::Warning, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::__emit!($crate::logger(), $crate::Severity::Warning, $($arg)+)
    };
}

/// Logs at [`Severity::Error`](crate::Severity::Error), followed by a stack
/// trace.
#[macro_export]
macro_rules! error {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::__emit!($logger, $crate::Severity::Error, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::__emit!($crate::logger(), $crate::Severity::Error, $($arg)+)
    };
}
