//! Emitter trait for log output destinations
//!
//! An [`Emitter`] receives every record its [`Logger`](super::Logger)
//! dispatches. Two optional capabilities are discovered through
//! capability queries instead of downcasting:
//!
//! - [`Closeable`]: the logger calls `close` when the emitter is replaced
//!   or removed under the same registry name.
//! - [`LevelAware`]: the logger pushes new level names to it on
//!   [`Logger::reset_level`](super::Logger::reset_level).

use super::{error::Result, record::Record};

pub trait Emitter: Send + Sync {
    /// Deliver one record. `logger_name` identifies the dispatching logger.
    fn emit(&self, logger_name: &str, record: &Record) -> Result<()>;

    fn flush(&self) -> Result<()> {
        Ok(())
    }

    fn as_closeable(&self) -> Option<&dyn Closeable> {
        None
    }

    fn as_level_aware(&self) -> Option<&dyn LevelAware> {
        None
    }
}

/// Release of resources held by an emitter (file handles, channels).
///
/// Must be idempotent; the logger may close an emitter that user code
/// already closed.
pub trait Closeable {
    fn close(&self) -> Result<()>;
}

/// Emitters that filter on their own threshold.
pub trait LevelAware {
    /// Reconfigure from a level name, parsed with
    /// [`LogLevel::parse`](super::LogLevel::parse).
    fn set_level(&self, name: &str);
}
