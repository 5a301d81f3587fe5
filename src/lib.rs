//! # Log Dispatch
//!
//! A leveled log-dispatch core. A [`Logger`] owns a registry of named
//! [`Emitter`]s, turns every log call into a [`Record`] and fans it out to
//! all of them synchronously. Severe records can additionally be handed to
//! a remote-forward callback, guarded so that logging from inside the
//! callback never forwards again.
//!
//! ## Features
//!
//! - **Named emitters**: replacing an emitter closes the previous one
//! - **Failure isolation**: an emitter that errors or panics does not stop
//!   the others
//! - **Remote forwarding**: one callback per logger with a level threshold
//! - **Default logger**: process-wide instance behind free functions and
//!   macros
//!
//! ```
//! use log_dispatch::prelude::*;
//! use std::sync::Arc;
//!
//! let logger = Logger::new();
//! let (capture, records) = ChannelEmitter::unbounded();
//! logger.add_handler("capture", Arc::new(capture));
//!
//! logger.warning("disk usage at 91%");
//!
//! let (source, record) = records.try_recv().unwrap();
//! assert_eq!(source, "capture");
//! assert_eq!(record.level, LogLevel::Warning);
//! ```

pub mod core;
pub mod emitters;
pub mod global;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        Clock, Closeable, Emitter, ForwardRecord, LevelAware, LevelRange, LogLevel, Logger,
        LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics, OutputFormat, Record,
        RemoteForward, Result, TimestampFormat,
    };
    pub use crate::emitters::{ChannelEmitter, LevelFilter};
    #[cfg(feature = "console")]
    pub use crate::emitters::ConsoleEmitter;
    #[cfg(feature = "file")]
    pub use crate::emitters::FileEmitter;
    pub use crate::global::default_logger;
}

pub use crate::core::{
    Clock, Closeable, Emitter, FixedClock, ForwardRecord, LevelAware, LevelRange, LogLevel, Logger,
    LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics, OutputFormat, Record, RemoteForward,
    Result, SystemClock, TimestampFormat, DEFAULT_REMOTE_LEVEL,
};
pub use emitters::{ChannelEmitter, LevelFilter};
#[cfg(feature = "console")]
pub use emitters::ConsoleEmitter;
#[cfg(feature = "file")]
pub use emitters::FileEmitter;
pub use global::default_logger;
