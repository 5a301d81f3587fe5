//! Time source and timestamp formatting
//!
//! The logger reads the current time through a [`Clock`] so that the
//! capture time of records (and the Unix seconds handed to the remote
//! forward callback) can be pinned in tests. Emitters render
//! `DateTime<Utc>` values with a [`TimestampFormat`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Source of "now" for record construction.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock backed by [`Utc::now`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Seconds since the Unix epoch, clamped into `u32`.
pub fn unix_seconds(datetime: &DateTime<Utc>) -> u32 {
    u32::try_from(datetime.timestamp().max(0)).unwrap_or(u32::MAX)
}

/// Timestamp format options for text output
///
/// # Examples
///
/// ```
/// use log_dispatch::TimestampFormat;
/// use chrono::Utc;
///
/// let rendered = TimestampFormat::Iso8601.format(&Utc::now());
/// assert!(rendered.ends_with('Z'));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// `2025-01-08T10:30:45.123Z`
    #[default]
    Iso8601,

    /// `2025-01-08T10:30:45+00:00`
    Rfc3339,

    /// Unix timestamp in seconds: `1736332245`
    Unix,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,

    /// Any strftime-compatible format string
    Custom(String),
}

impl TimestampFormat {
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Utc>) -> String {
        match self {
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::Unix => datetime.timestamp().to_string(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::Custom(format_str) => datetime.format(format_str).to_string(),
        }
    }

    /// Check if this is a Unix-based numeric format
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        matches!(self, TimestampFormat::Unix | TimestampFormat::UnixMillis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_datetime() -> DateTime<Utc> {
        // 2025-01-08 10:30:45.123456 UTC
        Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime")
            + chrono::Duration::microseconds(123456)
    }

    #[test]
    fn test_iso8601_format() {
        let result = TimestampFormat::Iso8601.format(&fixed_datetime());
        assert_eq!(result, "2025-01-08T10:30:45.123Z");
    }

    #[test]
    fn test_rfc3339_format() {
        let result = TimestampFormat::Rfc3339.format(&fixed_datetime());
        assert!(result.starts_with("2025-01-08T10:30:45"));
        assert!(result.contains("+00:00") || result.ends_with('Z'));
    }

    #[test]
    fn test_unix_formats() {
        assert_eq!(TimestampFormat::Unix.format(&fixed_datetime()), "1736332245");
        assert_eq!(
            TimestampFormat::UnixMillis.format(&fixed_datetime()),
            "1736332245123"
        );
        assert!(TimestampFormat::Unix.is_numeric());
        assert!(!TimestampFormat::Rfc3339.is_numeric());
    }

    #[test]
    fn test_custom_format() {
        let format = TimestampFormat::Custom("%Y/%m/%d %H:%M".to_string());
        assert_eq!(format.format(&fixed_datetime()), "2025/01/08 10:30");
    }

    #[test]
    fn test_fixed_clock() {
        let clock = FixedClock(fixed_datetime());
        assert_eq!(clock.now(), fixed_datetime());
        assert_eq!(clock.now(), clock.now());
    }

    #[test]
    fn test_deserialization() {
        let format: TimestampFormat =
            serde_json::from_str(r#"{"Custom":"%Y-%m-%d"}"#).expect("deserialize Custom");
        assert_eq!(format, TimestampFormat::Custom("%Y-%m-%d".to_string()));
    }
}
