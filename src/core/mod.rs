//! Core logger types and traits

pub mod config;
pub mod emitter;
pub mod error;
pub mod forward;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod output_format;
pub mod record;
pub mod timestamp;

pub use config::LoggerConfig;
pub use emitter::{Closeable, Emitter, LevelAware};
pub use error::{LoggerError, Result};
pub use forward::{ForwardRecord, RemoteForward};
pub use log_level::{LevelRange, LogLevel};
pub use logger::{Logger, LoggerBuilder, DEFAULT_REMOTE_LEVEL};
pub use metrics::LoggerMetrics;
pub use output_format::OutputFormat;
pub use record::Record;
pub use timestamp::{Clock, FixedClock, SystemClock, TimestampFormat};
