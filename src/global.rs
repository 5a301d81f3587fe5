//! Process-wide default logger
//!
//! [`default_logger`] returns a single [`Logger`] created on first use and
//! kept for the life of the process; there is no teardown, so emitters that
//! buffer should be flushed with [`flush`] before exit. The free functions
//! here delegate to it, which lets any part of a program log without
//! threading a logger through.
//!
//! The default logger starts without a name. The first handler registered
//! on any logger that seeds the default name (the default for every
//! logger, see [`LoggerBuilder::seed_default_name`]) names it.
//!
//! ```
//! use log_dispatch::{global, ChannelEmitter};
//! use std::sync::Arc;
//!
//! let (emitter, records) = ChannelEmitter::unbounded();
//! global::add_handler("capture", Arc::new(emitter));
//! global::info("service started");
//!
//! let (_, record) = records.try_recv().unwrap();
//! assert_eq!(record.message, "service started");
//! ```
//!
//! [`LoggerBuilder::seed_default_name`]: crate::LoggerBuilder::seed_default_name

use crate::core::{Emitter, LogLevel, Logger, RemoteForward, Result};
use std::fmt;
use std::sync::{Arc, OnceLock};

static DEFAULT_LOGGER: OnceLock<Logger> = OnceLock::new();

/// The process-wide logger.
pub fn default_logger() -> &'static Logger {
    DEFAULT_LOGGER.get_or_init(Logger::new)
}

/// Name the default logger after `name` unless it already has a name.
pub(crate) fn adopt_name(name: &str) {
    default_logger().set_name_if_unset(name);
}

pub fn add_handler(name: impl Into<String>, emitter: Arc<dyn Emitter>) {
    default_logger().add_handler(name, emitter);
}

pub fn remove_handler(name: &str) -> bool {
    default_logger().remove_handler(name)
}

pub fn set_remote_forward(callback: RemoteForward) {
    default_logger().set_remote_forward(callback);
}

pub fn set_remote_level(level: LogLevel) {
    default_logger().set_remote_level(level);
}

pub fn reset_level(name: &str) {
    default_logger().reset_level(name);
}

pub fn flush() -> Result<()> {
    default_logger().flush()
}

pub fn log(level: LogLevel, message: impl Into<String>) {
    default_logger().log(level, message);
}

pub fn log_args(level: LogLevel, args: fmt::Arguments<'_>) {
    default_logger().log_args(level, args);
}

/// See [`Logger::output`].
pub fn output(level: u32, message: impl Into<String>) {
    default_logger().output(level, message);
}

#[inline]
pub fn debug(message: impl Into<String>) {
    log(LogLevel::Debug, message);
}

#[inline]
pub fn trace(message: impl Into<String>) {
    log(LogLevel::Trace, message);
}

#[inline]
pub fn info(message: impl Into<String>) {
    log(LogLevel::Info, message);
}

#[inline]
pub fn warning(message: impl Into<String>) {
    log(LogLevel::Warning, message);
}

#[inline]
pub fn error(message: impl Into<String>) {
    log(LogLevel::Error, message);
}

#[inline]
pub fn fatal(message: impl Into<String>) {
    log(LogLevel::Fatal, message);
}
