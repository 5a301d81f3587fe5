//! Output format configuration for the bundled emitters
//!
//! - Text: `[2025-01-08T10:30:45.123Z] [INFO ] gateway - Request processed`
//! - Json: one JSON object per record
//! - Logfmt: `key=value` pairs

use super::record::Record;
use super::timestamp::TimestampFormat;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Logfmt,
}

impl OutputFormat {
    /// Render one record as a single line (no trailing newline).
    pub fn format(
        &self,
        logger_name: &str,
        record: &Record,
        timestamp_format: &TimestampFormat,
    ) -> String {
        match self {
            OutputFormat::Text => format_text(logger_name, record, timestamp_format),
            OutputFormat::Json => format_json(logger_name, record, timestamp_format),
            OutputFormat::Logfmt => format_logfmt(logger_name, record, timestamp_format),
        }
    }
}

/// Escape line breaks and tabs so a message cannot forge extra log lines.
pub fn sanitize_message(message: &str) -> String {
    message
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

fn format_text(logger_name: &str, record: &Record, timestamp_format: &TimestampFormat) -> String {
    format!(
        "[{}] [{}] {} - {}",
        timestamp_format.format(&record.time),
        record.level.label(),
        logger_name,
        sanitize_message(&record.message)
    )
}

fn format_json(logger_name: &str, record: &Record, timestamp_format: &TimestampFormat) -> String {
    let timestamp = match timestamp_format {
        TimestampFormat::Unix => serde_json::Value::Number(record.time.timestamp().into()),
        TimestampFormat::UnixMillis => {
            serde_json::Value::Number(record.time.timestamp_millis().into())
        }
        _ => serde_json::Value::String(timestamp_format.format(&record.time)),
    };

    serde_json::json!({
        "timestamp": timestamp,
        "level": record.level.name(),
        "logger": logger_name,
        "message": record.message,
    })
    .to_string()
}

fn format_logfmt(logger_name: &str, record: &Record, timestamp_format: &TimestampFormat) -> String {
    format!(
        "timestamp={} level={} logger={} message={}",
        escape_logfmt_value(&timestamp_format.format(&record.time)),
        record.level.name(),
        escape_logfmt_value(logger_name),
        quote_logfmt_value(&sanitize_message(&record.message))
    )
}

/// Quote a logfmt value if it contains spaces or separators
fn escape_logfmt_value(value: &str) -> String {
    if value.is_empty() || value.contains(' ') || value.contains('"') || value.contains('=') {
        quote_logfmt_value(value)
    } else {
        value.to_string()
    }
}

fn quote_logfmt_value(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LogLevel;
    use chrono::{TimeZone, Utc};

    fn record(level: LogLevel, message: &str) -> Record {
        let time = Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).single().unwrap();
        Record::at(time, level, message)
    }

    #[test]
    fn test_text_format() {
        let result = OutputFormat::Text.format(
            "gateway",
            &record(LogLevel::Info, "Request processed"),
            &TimestampFormat::Iso8601,
        );
        assert_eq!(
            result,
            "[2025-01-08T10:30:45.000Z] [INFO ] gateway - Request processed"
        );
    }

    #[test]
    fn test_text_escapes_line_breaks() {
        let result = OutputFormat::Text.format(
            "app",
            &record(LogLevel::Info, "login\nERROR forged"),
            &TimestampFormat::Unix,
        );
        assert!(!result.contains('\n'));
        assert!(result.contains("login\\nERROR forged"));
    }

    #[test]
    fn test_json_format() {
        let result = OutputFormat::Json.format(
            "billing",
            &record(LogLevel::Warning, "Retry 3 of 5"),
            &TimestampFormat::Unix,
        );

        let parsed: serde_json::Value = serde_json::from_str(&result).unwrap();
        assert_eq!(parsed["level"], "WARNING");
        assert_eq!(parsed["logger"], "billing");
        assert_eq!(parsed["message"], "Retry 3 of 5");
        assert_eq!(parsed["timestamp"], 1_736_332_245);
    }

    #[test]
    fn test_logfmt_format() {
        let result = OutputFormat::Logfmt.format(
            "",
            &record(LogLevel::Error, "say \"hi\""),
            &TimestampFormat::Iso8601,
        );
        assert!(result.contains("level=ERROR"));
        assert!(result.contains("logger=\"\""));
        assert!(result.contains("message=\"say \\\"hi\\\"\""));
    }

    #[test]
    fn test_output_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
    }
}
