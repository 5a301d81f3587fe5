//! Log level definitions

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Severity of a log record.
///
/// Levels compare by ordinal. `Disable` sits above every real level, so a
/// threshold of `Disable` suppresses everything.
///
/// Deserializing goes through [`LogLevel::parse`], so configuration accepts
/// any casing and maps unknown names to `Disable`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[derive(Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Debug = 0,
    Trace = 1,
    #[default]
    Info = 2,
    Warning = 3,
    Error = 4,
    Fatal = 5,
    Disable = 255,
}

impl LogLevel {
    /// All levels that can actually be emitted, lowest first.
    pub const ALL: [LogLevel; 6] = [
        LogLevel::Debug,
        LogLevel::Trace,
        LogLevel::Info,
        LogLevel::Warning,
        LogLevel::Error,
        LogLevel::Fatal,
    ];

    /// Parse a level name, case-insensitively.
    ///
    /// `WARN` is accepted as an alias for `WARNING`. Unknown input yields
    /// [`LogLevel::Disable`] rather than an error.
    ///
    /// ```
    /// use log_dispatch::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("info"), LogLevel::Info);
    /// assert_eq!(LogLevel::parse("Warn"), LogLevel::Warning);
    /// assert_eq!(LogLevel::parse("verbose"), LogLevel::Disable);
    /// ```
    pub fn parse(name: &str) -> Self {
        match name.to_uppercase().as_str() {
            "DEBUG" => LogLevel::Debug,
            "TRACE" => LogLevel::Trace,
            "INFO" => LogLevel::Info,
            "WARN" | "WARNING" => LogLevel::Warning,
            "ERROR" => LogLevel::Error,
            "FATAL" => LogLevel::Fatal,
            _ => LogLevel::Disable,
        }
    }

    /// Canonical uppercase name, empty for `Disable`.
    pub fn name(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Trace => "TRACE",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
            LogLevel::Fatal => "FATAL",
            LogLevel::Disable => "",
        }
    }

    /// Fixed-width label for aligned text output.
    pub fn label(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Trace => "TRACE",
            LogLevel::Info => "INFO ",
            LogLevel::Warning => "WARN ",
            LogLevel::Error => "ERROR",
            LogLevel::Fatal => "FATAL",
            LogLevel::Disable => "DISABLE",
        }
    }

    pub fn ordinal(&self) -> u32 {
        *self as u32
    }

    /// Inverse of [`ordinal`](Self::ordinal); unknown values map to `Disable`.
    pub fn from_ordinal(value: u32) -> Self {
        match value {
            0 => LogLevel::Debug,
            1 => LogLevel::Trace,
            2 => LogLevel::Info,
            3 => LogLevel::Warning,
            4 => LogLevel::Error,
            5 => LogLevel::Fatal,
            _ => LogLevel::Disable,
        }
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            LogLevel::Debug => Blue,
            LogLevel::Trace => BrightBlack,
            LogLevel::Info => Green,
            LogLevel::Warning => Yellow,
            LogLevel::Error => Red,
            LogLevel::Fatal | LogLevel::Disable => BrightRed,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for LogLevel {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(LogLevel::parse(s))
    }
}

impl From<&str> for LogLevel {
    fn from(s: &str) -> Self {
        LogLevel::parse(s)
    }
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct LevelVisitor;

        impl Visitor<'_> for LevelVisitor {
            type Value = LogLevel;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a log level name")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<LogLevel, E> {
                Ok(LogLevel::parse(value))
            }
        }

        deserializer.deserialize_str(LevelVisitor)
    }
}

/// Inclusive range of levels accepted by a filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelRange {
    pub min: LogLevel,
    pub max: LogLevel,
}

impl LevelRange {
    pub const fn new(min: LogLevel, max: LogLevel) -> Self {
        Self { min, max }
    }

    /// Everything from `min` up to `Fatal`.
    pub const fn at_least(min: LogLevel) -> Self {
        Self::new(min, LogLevel::Fatal)
    }

    #[inline]
    pub fn contains(&self, level: LogLevel) -> bool {
        level >= self.min && level <= self.max
    }
}

impl Default for LevelRange {
    fn default() -> Self {
        Self::at_least(LogLevel::Debug)
    }
}
