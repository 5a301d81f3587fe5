//! Logging macros for ergonomic message formatting.
//!
//! Each macro takes an optional logger before the format string. Without
//! one, the record goes to the [default logger](crate::global).
//!
//! ```
//! use log_dispatch::prelude::*;
//! use log_dispatch::info;
//!
//! let logger = Logger::new();
//!
//! // Explicit logger
//! info!(logger, "Server listening on port {}", 8080);
//!
//! // Default logger
//! info!("User {} performed action: {}", 42, "login");
//! ```

/// Log a message at the given level.
///
/// ```
/// # use log_dispatch::prelude::*;
/// # let logger = Logger::new();
/// use log_dispatch::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($level:path, $fmt:literal $($arg:tt)*) => {
        $crate::global::log_args($level, format_args!($fmt $($arg)*))
    };
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log_args($level, format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! debug {
    ($fmt:literal $($arg:tt)*) => {
        $crate::global::log_args($crate::LogLevel::Debug, format_args!($fmt $($arg)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.log_args($crate::LogLevel::Debug, format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! trace {
    ($fmt:literal $($arg:tt)*) => {
        $crate::global::log_args($crate::LogLevel::Trace, format_args!($fmt $($arg)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.log_args($crate::LogLevel::Trace, format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! info {
    ($fmt:literal $($arg:tt)*) => {
        $crate::global::log_args($crate::LogLevel::Info, format_args!($fmt $($arg)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.log_args($crate::LogLevel::Info, format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! warning {
    ($fmt:literal $($arg:tt)*) => {
        $crate::global::log_args($crate::LogLevel::Warning, format_args!($fmt $($arg)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.log_args($crate::LogLevel::Warning, format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! error {
    ($fmt:literal $($arg:tt)*) => {
        $crate::global::log_args($crate::LogLevel::Error, format_args!($fmt $($arg)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.log_args($crate::LogLevel::Error, format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! fatal {
    ($fmt:literal $($arg:tt)*) => {
        $crate::global::log_args($crate::LogLevel::Fatal, format_args!($fmt $($arg)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.log_args($crate::LogLevel::Fatal, format_args!($($arg)+))
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{LogLevel, Logger};
    use crate::emitters::ChannelEmitter;
    use std::sync::Arc;

    fn capturing_logger() -> (Logger, crossbeam_channel::Receiver<crate::emitters::Delivery>) {
        let logger = Logger::builder().seed_default_name(false).build();
        let (emitter, receiver) = ChannelEmitter::unbounded();
        logger.add_handler("capture", Arc::new(emitter));
        (logger, receiver)
    }

    #[test]
    fn test_log_macro_with_logger() {
        let (logger, records) = capturing_logger();
        log!(logger, LogLevel::Info, "Test message");
        log!(logger, LogLevel::Warning, "Formatted: {}", 42);

        let (_, first) = records.try_recv().unwrap();
        let (_, second) = records.try_recv().unwrap();
        assert_eq!(first.message, "Test message");
        assert_eq!(second.level, LogLevel::Warning);
        assert_eq!(second.message, "Formatted: 42");
    }

    #[test]
    fn test_level_macros_with_logger() {
        let (logger, records) = capturing_logger();
        debug!(logger, "Count: {}", 5);
        trace!(logger, "Value: {}", 10);
        info!(logger, "Items: {}", 100);
        warning!(logger, "Retry {} of {}", 1, 3);
        error!(logger, "Code: {}", 500);
        fatal!(logger, "Critical failure: {}", "system");

        let levels: Vec<LogLevel> = records.try_iter().map(|(_, r)| r.level).collect();
        assert_eq!(levels, LogLevel::ALL.to_vec());
    }

    #[test]
    fn test_inline_format_args() {
        let (logger, records) = capturing_logger();
        let port = 8080;
        info!(logger, "listening on {port}");
        assert_eq!(records.try_recv().unwrap().1.message, "listening on 8080");
    }
}
