//! Console emitter implementation

use super::level_filter::LevelFilter;
use crate::core::{
    Emitter, LevelAware, LevelRange, LogLevel, OutputFormat, Record, Result, TimestampFormat,
};
use colored::Colorize;

pub struct ConsoleEmitter {
    use_colors: bool,
    timestamp_format: TimestampFormat,
    output_format: OutputFormat,
    filter: LevelFilter,
}

impl ConsoleEmitter {
    pub fn new() -> Self {
        Self::with_colors(true)
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self {
            use_colors,
            timestamp_format: TimestampFormat::default(),
            output_format: OutputFormat::default(),
            filter: LevelFilter::default(),
        }
    }

    /// Set the output format for this emitter
    ///
    /// ```
    /// use log_dispatch::{ConsoleEmitter, OutputFormat};
    ///
    /// let emitter = ConsoleEmitter::new().with_output_format(OutputFormat::Json);
    /// ```
    #[must_use]
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    #[must_use]
    pub fn with_level_range(self, range: LevelRange) -> Self {
        self.filter.set_range(range);
        self
    }

    pub fn level_range(&self) -> LevelRange {
        self.filter.range()
    }

    fn format_text(&self, logger_name: &str, record: &Record) -> String {
        let line = self
            .output_format
            .format(logger_name, record, &self.timestamp_format);
        if !self.use_colors {
            return line;
        }
        // Color only the level label
        let label = format!("[{}]", record.level.label());
        let colored_label = label.color(record.level.color_code()).to_string();
        line.replacen(&label, &colored_label, 1)
    }
}

impl Default for ConsoleEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl Emitter for ConsoleEmitter {
    fn emit(&self, logger_name: &str, record: &Record) -> Result<()> {
        if !self.filter.allows(record.level) {
            return Ok(());
        }

        let output = match self.output_format {
            OutputFormat::Text => self.format_text(logger_name, record),
            OutputFormat::Json | OutputFormat::Logfmt => {
                self.output_format
                    .format(logger_name, record, &self.timestamp_format)
            }
        };

        // Route Error and Fatal levels to stderr, others to stdout
        match record.level {
            LogLevel::Error | LogLevel::Fatal => eprintln!("{}", output),
            _ => println!("{}", output),
        }
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        use std::io::Write;
        std::io::stdout().flush()?;
        std::io::stderr().flush()?;
        Ok(())
    }

    fn as_level_aware(&self) -> Option<&dyn LevelAware> {
        Some(&self.filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_is_level_aware() {
        let emitter = ConsoleEmitter::with_colors(false);
        emitter.as_level_aware().unwrap().set_level("error");
        assert_eq!(emitter.level_range(), LevelRange::at_least(LogLevel::Error));
        assert!(emitter.as_closeable().is_none());
    }

    #[test]
    fn test_plain_text_has_no_escape_codes() {
        let emitter = ConsoleEmitter::with_colors(false);
        let line = emitter.format_text("app", &Record::new(LogLevel::Info, "ready"));
        assert!(!line.contains('\u{1b}'));
        assert!(line.ends_with("[INFO ] app - ready"));
    }

    #[test]
    fn test_filtered_record_is_ok() {
        let emitter =
            ConsoleEmitter::with_colors(false).with_level_range(LevelRange::at_least(LogLevel::Fatal));
        assert!(emitter.emit("app", &Record::new(LogLevel::Debug, "hidden")).is_ok());
    }
}
