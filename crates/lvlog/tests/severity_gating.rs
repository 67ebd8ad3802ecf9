//! Integration tests for threshold filtering.
//!
//! A message at severity `S` is emitted exactly when the threshold is at
//! least `S`; `Severity::None` as a threshold silences every entry point.

use lvlog::{Logger, Severity};
use test_support::SharedBuffer;

fn capture(threshold: Severity) -> (Logger, SharedBuffer) {
    let buffer = SharedBuffer::new();
    let logger = Logger::with_writer(buffer.clone());
    logger.config().set_threshold(threshold);
    (logger, buffer)
}

fn emit_each(logger: &Logger) {
    logger.trace("trace message");
    logger.debug("debug message");
    logger.info("info message");
    logger.warn("warn message");
    logger.error("error message");
}

fn tags(buffer: &SharedBuffer) -> Vec<String> {
    buffer
        .lines()
        .into_iter()
        .filter(|line| line.starts_with('['))
        .map(|line| line[1..4].to_owned())
        .collect()
}

// ============================================================================
// Threshold Matrix Tests
// ============================================================================

/// Verifies every (message level, threshold) pair against `threshold >= level`.
#[test]
fn every_level_threshold_pair() {
    for threshold in Severity::ALL {
        for level in &Severity::ALL[1..] {
            let (logger, buffer) = capture(threshold);
            logger.log_at(*level, "sample");

            let emitted = !buffer.contents().is_empty();
            assert_eq!(
                emitted,
                threshold >= *level,
                "level {level} at threshold {threshold}"
            );
        }
    }
}

/// Verifies the default threshold passes debug and suppresses trace.
#[test]
fn default_threshold_is_debug() {
    let buffer = SharedBuffer::new();
    let logger = Logger::with_writer(buffer.clone());
    emit_each(&logger);
    assert_eq!(tags(&buffer), ["DBG", "INF", "WRN", "ERR"]);
}

/// Verifies a warning threshold passes only warnings and errors.
#[test]
fn warning_threshold_keeps_warnings_and_errors() {
    let (logger, buffer) = capture(Severity::Warning);
    emit_each(&logger);
    assert_eq!(tags(&buffer), ["WRN", "ERR"]);
}

/// Verifies a trace threshold passes every entry point.
#[test]
fn trace_threshold_passes_everything() {
    let (logger, buffer) = capture(Severity::Trace);
    emit_each(&logger);
    assert_eq!(tags(&buffer), ["TRC", "DBG", "INF", "WRN", "ERR"]);
}

/// Verifies a none threshold silences every entry point, errors included.
#[test]
fn none_threshold_silences_everything() {
    let (logger, buffer) = capture(Severity::None);
    emit_each(&logger);
    assert!(buffer.contents().is_empty());
}

// ============================================================================
// Runtime Change Tests
// ============================================================================

/// Verifies threshold changes apply to the very next call.
#[test]
fn threshold_change_applies_immediately() {
    let (logger, buffer) = capture(Severity::Error);
    logger.info("before");
    logger.set_log_level(3);
    logger.info("after");

    let lines = buffer.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with(" after"));
}
