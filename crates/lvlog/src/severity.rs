//! crates/lvlog/src/severity.rs
//! Ordered severity levels shared by messages and thresholds.

use std::fmt;
use std::str::FromStr;

use crate::error::LevelError;

/// Message severity, ordered from silent to most verbose.
///
/// The same type describes both the level a message is logged at and the
/// threshold a logger compares against: a message at severity `S` is emitted
/// whenever `threshold >= S`.
///
/// # Examples
///
/// ```
/// use lvlog::Severity;
///
/// assert!(Severity::Error < Severity::Warning);
/// assert_eq!(Severity::try_from(3), Ok(Severity::Info));
/// assert_eq!("warn".parse::<Severity>(), Ok(Severity::Warning));
/// ```
#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Severity {
    /// Logs nothing at all. Only meaningful as a threshold.
    None = 0,
    /// Something broke and the application is in an inconsistent state.
    Error = 1,
    /// Something is wrong but the application still functions.
    Warning = 2,
    /// State changes an administrator wants to see.
    Info = 3,
    /// Results of actions, too noisy for every deployment.
    Debug = 4,
    /// Verbose traffic dumps.
    Trace = 5,
}

impl Severity {
    /// All severities in ascending order.
    pub const ALL: [Self; 6] = [
        Self::None,
        Self::Error,
        Self::Warning,
        Self::Info,
        Self::Debug,
        Self::Trace,
    ];

    /// Returns the numeric value of the level.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Converts a raw value back into a severity.
    #[must_use]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::None),
            1 => Some(Self::Error),
            2 => Some(Self::Warning),
            3 => Some(Self::Info),
            4 => Some(Self::Debug),
            5 => Some(Self::Trace),
            _ => None,
        }
    }

    /// Validates `value` against `[Severity::None, max]`.
    pub fn from_i64_bounded(value: i64, max: Self) -> Result<Self, LevelError> {
        u8::try_from(value)
            .ok()
            .and_then(Self::from_u8)
            .filter(|level| *level <= max)
            .ok_or(LevelError::OutOfRange { value, max })
    }

    /// Three-letter tag printed between brackets. Empty for [`Severity::None`].
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Error => "ERR",
            Self::Warning => "WRN",
            Self::Info => "INF",
            Self::Debug => "DBG",
            Self::Trace => "TRC",
        }
    }

    /// ANSI foreground colour code used when colours are enabled.
    #[must_use]
    pub const fn colour_code(self) -> &'static str {
        match self {
            Self::None => "0",
            Self::Error => "91",
            Self::Warning => "93",
            Self::Info => "92",
            Self::Debug => "96",
            Self::Trace => "95",
        }
    }

    /// Lowercase name, as accepted by [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

impl TryFrom<i64> for Severity {
    type Error = LevelError;

    fn try_from(value: i64) -> Result<Self, LevelError> {
        Self::from_i64_bounded(value, Self::Trace)
    }
}

impl From<Severity> for u8 {
    fn from(level: Severity) -> Self {
        level.as_u8()
    }
}

impl FromStr for Severity {
    type Err = LevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(value) = trimmed.parse::<i64>() {
            return Self::try_from(value);
        }

        match trimmed.to_ascii_lowercase().as_str() {
            "none" | "off" => Ok(Self::None),
            "error" | "err" => Ok(Self::Error),
            "warning" | "warn" => Ok(Self::Warning),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            _ => Err(LevelError::UnknownName(s.to_owned())),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
