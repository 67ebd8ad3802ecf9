//! Integration tests for validated level setters.
//!
//! Rejected values must leave the configuration unchanged and produce exactly
//! one error line naming the value.

use lvlog::{Logger, Severity};
use test_support::SharedBuffer;

fn capture() -> (Logger, SharedBuffer) {
    let buffer = SharedBuffer::new();
    let logger = Logger::with_writer(buffer.clone());
    (logger, buffer)
}

fn error_lines(buffer: &SharedBuffer) -> Vec<String> {
    buffer
        .lines()
        .into_iter()
        .filter(|line| line.starts_with("[ERR]"))
        .collect()
}

// ============================================================================
// Threshold Setter Tests
// ============================================================================

/// Verifies every value in [0, 5] is accepted silently.
#[test]
fn threshold_accepts_full_range() {
    let (logger, buffer) = capture();
    for raw in 0..=5 {
        logger.set_log_level(raw);
        assert_eq!(i64::from(logger.config().threshold().as_u8()), raw);
    }
    logger.set_log_level(4);
    assert!(buffer.contents().is_empty());
}

/// Verifies an out-of-range threshold is reported once and ignored.
#[test]
fn invalid_threshold_reports_one_error() {
    let (logger, buffer) = capture();
    logger.set_log_level(6);

    assert_eq!(logger.config().threshold(), Severity::Debug);
    let errors = error_lines(&buffer);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].ends_with(" Invalid log level 6"));
}

/// Verifies negative thresholds are rejected.
#[test]
fn negative_threshold_is_rejected() {
    let (logger, buffer) = capture();
    logger.set_log_level(-1);

    assert_eq!(logger.config().threshold(), Severity::Debug);
    assert!(error_lines(&buffer)[0].ends_with(" Invalid log level -1"));
}

/// Verifies the report is attributed to the caller of the setter.
#[test]
fn report_names_caller_location() {
    let (logger, buffer) = capture();
    let line = line!() + 1;
    logger.set_log_level(42);

    assert!(error_lines(&buffer)[0].contains(&format!(":{line:<3} Invalid log level 42")));
}

/// Verifies the report is suppressed when the current threshold hides errors.
#[test]
fn report_obeys_current_threshold() {
    let (logger, buffer) = capture();
    logger.set_log_level(0);
    logger.set_log_level(7);

    assert_eq!(logger.config().threshold(), Severity::None);
    assert!(buffer.contents().is_empty());
}

// ============================================================================
// Adapter Level Setter Tests
// ============================================================================

/// Verifies the adapter level accepts [0, 4].
#[test]
fn adapter_level_accepts_none_through_debug() {
    let (logger, buffer) = capture();
    for raw in 0..=4 {
        logger.set_default_level(raw);
        assert_eq!(i64::from(logger.config().default_level().as_u8()), raw);
    }
    assert!(buffer.contents().is_empty());
}

/// Verifies trace is rejected as an adapter level.
#[test]
fn adapter_level_rejects_trace() {
    let (logger, buffer) = capture();
    logger.set_default_level(2);
    logger.set_default_level(5);

    assert_eq!(logger.config().default_level(), Severity::Warning);
    let errors = error_lines(&buffer);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].ends_with(" Invalid log level 5"));
}

/// Verifies the adapter level is independent of the threshold.
#[test]
fn adapter_level_does_not_move_threshold() {
    let (logger, _buffer) = capture();
    logger.set_default_level(1);
    assert_eq!(logger.config().threshold(), Severity::Debug);
    logger.set_log_level(5);
    assert_eq!(logger.config().default_level(), Severity::Error);
}
