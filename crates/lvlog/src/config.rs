//! crates/lvlog/src/config.rs
//! Runtime-adjustable threshold, adapter level, and colour flag.
//!
//! All three values live in atomics so a single [`LogConfig`] can be shared
//! by every thread that logs. Readers may observe a stale value right after a
//! concurrent update, but never a torn one.

use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

use crate::error::LevelError;
use crate::severity::Severity;

/// Threshold applied when no explicit level has been configured.
pub const DEFAULT_THRESHOLD: Severity = Severity::Debug;

/// Severity given to messages arriving through [`LogWriter`](crate::LogWriter)
/// when no explicit level has been configured.
pub const DEFAULT_ADAPTER_LEVEL: Severity = Severity::Debug;

/// Most verbose level accepted as the adapter level.
pub const MAX_ADAPTER_LEVEL: Severity = Severity::Debug;

/// Shared logging configuration.
///
/// # Examples
///
/// ```
/// use lvlog::{LogConfig, Severity};
///
/// let config = LogConfig::new().with_threshold(Severity::Warning);
/// assert!(config.enabled(Severity::Error));
/// assert!(!config.enabled(Severity::Info));
///
/// assert!(config.try_set_threshold(9).is_err());
/// assert_eq!(config.threshold(), Severity::Warning);
/// ```
#[derive(Debug)]
pub struct LogConfig {
    threshold: AtomicU8,
    default_level: AtomicU8,
    colours: AtomicBool,
}

impl LogConfig {
    /// Creates a configuration with the documented defaults.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            threshold: AtomicU8::new(DEFAULT_THRESHOLD as u8),
            default_level: AtomicU8::new(DEFAULT_ADAPTER_LEVEL as u8),
            colours: AtomicBool::new(false),
        }
    }

    /// Sets the threshold while building a configuration.
    #[must_use]
    pub fn with_threshold(self, level: Severity) -> Self {
        self.set_threshold(level);
        self
    }

    /// Sets the adapter level while building a configuration.
    ///
    /// Levels above [`MAX_ADAPTER_LEVEL`] are rejected.
    pub fn with_default_level(self, level: Severity) -> Result<Self, LevelError> {
        self.set_default_level(level)?;
        Ok(self)
    }

    /// Enables or disables colours while building a configuration.
    #[must_use]
    pub fn with_colours(self, enabled: bool) -> Self {
        self.set_colours(enabled);
        self
    }

    /// Returns `true` when a message at `level` passes the threshold.
    #[inline(always)]
    pub fn enabled(&self, level: Severity) -> bool {
        level as u8 <= self.threshold.load(Ordering::Relaxed)
    }

    /// Current threshold.
    pub fn threshold(&self) -> Severity {
        Self::load(&self.threshold, DEFAULT_THRESHOLD)
    }

    /// Replaces the threshold.
    pub fn set_threshold(&self, level: Severity) {
        self.threshold.store(level as u8, Ordering::Release);
    }

    /// Validates and applies a raw threshold in `[0, 5]`.
    ///
    /// The stored threshold is left untouched when `level` is out of range.
    pub fn try_set_threshold(&self, level: i64) -> Result<Severity, LevelError> {
        let level = Severity::from_i64_bounded(level, Severity::Trace)?;
        self.set_threshold(level);
        Ok(level)
    }

    /// Current adapter level.
    pub fn default_level(&self) -> Severity {
        Self::load(&self.default_level, DEFAULT_ADAPTER_LEVEL)
    }

    /// Replaces the adapter level. [`Severity::Trace`] is rejected.
    pub fn set_default_level(&self, level: Severity) -> Result<(), LevelError> {
        if level > MAX_ADAPTER_LEVEL {
            return Err(LevelError::OutOfRange {
                value: i64::from(level.as_u8()),
                max: MAX_ADAPTER_LEVEL,
            });
        }
        self.default_level.store(level as u8, Ordering::Release);
        Ok(())
    }

    /// Validates and applies a raw adapter level in `[0, 4]`.
    pub fn try_set_default_level(&self, level: i64) -> Result<Severity, LevelError> {
        let level = Severity::from_i64_bounded(level, MAX_ADAPTER_LEVEL)?;
        self.set_default_level(level)?;
        Ok(level)
    }

    /// Whether emitted tags carry ANSI styling.
    pub fn colours(&self) -> bool {
        self.colours.load(Ordering::Relaxed)
    }

    /// Enables or disables ANSI styling.
    pub fn set_colours(&self, enabled: bool) {
        self.colours.store(enabled, Ordering::Release);
    }

    fn load(cell: &AtomicU8, fallback: Severity) -> Severity {
        Severity::from_u8(cell.load(Ordering::Acquire)).unwrap_or(fallback)
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = LogConfig::default();
        assert_eq!(config.threshold(), Severity::Debug);
        assert_eq!(config.default_level(), Severity::Debug);
        assert!(!config.colours());
    }

    #[test]
    fn enabled_is_inclusive_at_threshold() {
        let config = LogConfig::new().with_threshold(Severity::Info);
        assert!(config.enabled(Severity::Error));
        assert!(config.enabled(Severity::Info));
        assert!(!config.enabled(Severity::Debug));
        assert!(!config.enabled(Severity::Trace));
    }

    #[test]
    fn none_threshold_blocks_every_message() {
        let config = LogConfig::new().with_threshold(Severity::None);
        for level in &Severity::ALL[1..] {
            assert!(!config.enabled(*level));
        }
    }

    #[test]
    fn try_set_threshold_accepts_full_range() {
        let config = LogConfig::new();
        for raw in 0..=5 {
            assert!(config.try_set_threshold(raw).is_ok());
            assert_eq!(i64::from(config.threshold().as_u8()), raw);
        }
    }

    #[test]
    fn try_set_threshold_keeps_previous_on_error() {
        let config = LogConfig::new().with_threshold(Severity::Warning);
        assert!(config.try_set_threshold(6).is_err());
        assert!(config.try_set_threshold(-1).is_err());
        assert_eq!(config.threshold(), Severity::Warning);
    }

    #[test]
    fn default_level_rejects_trace() {
        let config = LogConfig::new()
            .with_default_level(Severity::Info)
            .expect("info is a valid adapter level");
        assert!(config.set_default_level(Severity::Trace).is_err());
        assert!(config.try_set_default_level(5).is_err());
        assert_eq!(config.default_level(), Severity::Info);

        assert_eq!(config.try_set_default_level(0), Ok(Severity::None));
        assert_eq!(config.default_level(), Severity::None);
    }

    #[test]
    fn builder_rejects_trace_adapter_level() {
        let error = LogConfig::new()
            .with_default_level(Severity::Trace)
            .expect_err("trace is not a valid adapter level");
        assert_eq!(
            error,
            LevelError::OutOfRange {
                value: 5,
                max: MAX_ADAPTER_LEVEL
            }
        );
    }

    #[test]
    fn default_level_is_independent_of_threshold() {
        let config = LogConfig::new();
        config.set_threshold(Severity::Error);
        assert_eq!(config.default_level(), Severity::Debug);
    }

    #[test]
    fn colours_toggle() {
        let config = LogConfig::new().with_colours(true);
        assert!(config.colours());
        config.set_colours(false);
        assert!(!config.colours());
    }
}
