//! File emitter implementation

use super::level_filter::LevelFilter;
use crate::core::{
    Closeable, Emitter, LevelAware, LevelRange, LoggerError, OutputFormat, Record, Result,
    TimestampFormat,
};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Appends one line per record to a file.
///
/// Closing flushes and releases the file handle; later records are
/// rejected with [`LoggerError::EmitterClosed`].
pub struct FileEmitter {
    path: PathBuf,
    writer: Mutex<Option<BufWriter<File>>>,
    timestamp_format: TimestampFormat,
    output_format: OutputFormat,
    filter: LevelFilter,
}

impl FileEmitter {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                LoggerError::io_operation("opening log file", path.display().to_string(), e)
            })?;

        Ok(Self {
            path,
            writer: Mutex::new(Some(BufWriter::new(file))),
            timestamp_format: TimestampFormat::default(),
            output_format: OutputFormat::default(),
            filter: LevelFilter::default(),
        })
    }

    /// Set the timestamp format for this emitter
    ///
    /// ```no_run
    /// use log_dispatch::{FileEmitter, TimestampFormat};
    ///
    /// let emitter = FileEmitter::new("/var/log/app.log")
    ///     .unwrap()
    ///     .with_timestamp_format(TimestampFormat::Rfc3339);
    /// ```
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    #[must_use]
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    #[must_use]
    pub fn with_level_range(self, range: LevelRange) -> Self {
        self.filter.set_range(range);
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_closed(&self) -> bool {
        self.writer.lock().is_none()
    }

    fn closed_error(&self) -> LoggerError {
        LoggerError::closed(self.path.display().to_string())
    }
}

impl Emitter for FileEmitter {
    fn emit(&self, logger_name: &str, record: &Record) -> Result<()> {
        if !self.filter.allows(record.level) {
            return Ok(());
        }

        let mut line = self
            .output_format
            .format(logger_name, record, &self.timestamp_format);
        line.push('\n');

        let mut guard = self.writer.lock();
        let writer = guard.as_mut().ok_or_else(|| self.closed_error())?;
        writer.write_all(line.as_bytes())?;
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        if let Some(writer) = self.writer.lock().as_mut() {
            writer.flush()?;
        }
        Ok(())
    }

    fn as_closeable(&self) -> Option<&dyn Closeable> {
        Some(self)
    }

    fn as_level_aware(&self) -> Option<&dyn LevelAware> {
        Some(&self.filter)
    }
}

impl Closeable for FileEmitter {
    fn close(&self) -> Result<()> {
        match self.writer.lock().take() {
            Some(mut writer) => writer.flush().map_err(|e| {
                LoggerError::io_operation("closing log file", self.path.display().to_string(), e)
            }),
            None => Ok(()),
        }
    }
}

impl Drop for FileEmitter {
    fn drop(&mut self) {
        // Ensure all buffered data is flushed to disk
        let _ = self.flush();
    }
}
