//! Main logger implementation

use super::{
    config::LoggerConfig,
    emitter::Emitter,
    error::Result,
    forward::{ForwardRecord, RemoteForward},
    log_level::LogLevel,
    metrics::LoggerMetrics,
    record::Record,
    timestamp::{unix_seconds, Clock, SystemClock},
};
use parking_lot::{ReentrantMutex, RwLock};
use std::cell::Cell;
use std::collections::HashMap;
use std::fmt::{self, Write as _};
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

/// Default lowest level handed to the remote-forward callback
pub const DEFAULT_REMOTE_LEVEL: LogLevel = LogLevel::Error;

/// A named dispatch unit.
///
/// Every record is delivered synchronously, on the calling thread, to each
/// registered emitter. Filtering is the emitters' business: the logger
/// itself has no minimum level, only the threshold of its remote-forward
/// path.
pub struct Logger {
    name: RwLock<Arc<str>>,
    handlers: RwLock<HashMap<String, Arc<dyn Emitter>>>,
    remote: RwLock<Option<RemoteForward>>,
    remote_level: RwLock<LogLevel>,
    /// Set while the remote-forward callback runs on some thread.
    forwarding: ReentrantMutex<Cell<bool>>,
    clock: Arc<dyn Clock>,
    seed_default_name: bool,
    metrics: LoggerMetrics,
}

impl Logger {
    #[must_use]
    pub fn new() -> Self {
        Self::with_parts(Arc::new(SystemClock), true)
    }

    fn with_parts(clock: Arc<dyn Clock>, seed_default_name: bool) -> Self {
        Self {
            name: RwLock::new(Arc::from("")),
            handlers: RwLock::new(HashMap::new()),
            remote: RwLock::new(None),
            remote_level: RwLock::new(DEFAULT_REMOTE_LEVEL),
            forwarding: ReentrantMutex::new(Cell::new(false)),
            clock,
            seed_default_name,
            metrics: LoggerMetrics::new(),
        }
    }

    /// Build a logger from a deserialized [`LoggerConfig`].
    pub fn from_config(config: &LoggerConfig) -> Result<Self> {
        config.validate()?;
        let mut builder = Logger::builder()
            .remote_level(config.remote_level)
            .seed_default_name(config.seed_default_name);
        if let Some(ref name) = config.name {
            builder = builder.name(name.clone());
        }
        Ok(builder.build())
    }

    /// The name emitters see as the source of this logger's records.
    pub fn name(&self) -> String {
        self.name.read().to_string()
    }

    pub fn set_name(&self, name: impl Into<String>) {
        *self.name.write() = Arc::from(name.into());
    }

    pub(crate) fn set_name_if_unset(&self, name: &str) {
        let mut current = self.name.write();
        if current.is_empty() {
            *current = Arc::from(name);
        }
    }

    /// Register `emitter` under `name`.
    ///
    /// An emitter already registered under the same name is closed (when
    /// it is [`Closeable`](super::Closeable)) before the new one takes its
    /// place, and both happen under the registry write lock: once this
    /// returns, no record can reach the old emitter.
    ///
    /// The logger's display name becomes `name`. If this logger seeds the
    /// default logger and the default logger has no name yet, it adopts
    /// `name` too.
    pub fn add_handler(&self, name: impl Into<String>, emitter: Arc<dyn Emitter>) {
        let name = name.into();
        {
            let mut handlers = self.handlers.write();
            if let Some(previous) = handlers.get(&name) {
                Self::close_emitter(&name, previous.as_ref());
            }
            handlers.insert(name.clone(), emitter);
        }

        self.set_name(name.as_str());
        if self.seed_default_name {
            crate::global::adopt_name(&name);
        }
    }

    /// Unregister and close the emitter under `name`.
    ///
    /// Returns `false` when nothing was registered under that name.
    pub fn remove_handler(&self, name: &str) -> bool {
        let mut handlers = self.handlers.write();
        match handlers.remove(name) {
            Some(previous) => {
                Self::close_emitter(name, previous.as_ref());
                true
            }
            None => false,
        }
    }

    fn close_emitter(name: &str, emitter: &dyn Emitter) {
        if let Some(closeable) = emitter.as_closeable() {
            if let Err(e) = closeable.close() {
                eprintln!("[LOGGER ERROR] Closing emitter '{}' failed: {}", name, e);
            }
        }
    }

    pub fn has_handler(&self, name: &str) -> bool {
        self.handlers.read().contains_key(name)
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.read().len()
    }

    /// Registered handler names, sorted.
    pub fn handler_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.handlers.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Install the remote-forward callback, replacing any previous one.
    pub fn set_remote_forward(&self, callback: RemoteForward) {
        *self.remote.write() = Some(callback);
    }

    pub fn clear_remote_forward(&self) {
        *self.remote.write() = None;
    }

    /// Lowest level handed to the remote-forward callback. The threshold is
    /// a lower bound: records at `level` or above are forwarded.
    /// `Disable` turns forwarding off without removing the callback.
    pub fn set_remote_level(&self, level: LogLevel) {
        *self.remote_level.write() = level;
    }

    pub fn remote_level(&self) -> LogLevel {
        *self.remote_level.read()
    }

    /// Log an already rendered message.
    pub fn log(&self, level: LogLevel, message: impl Into<String>) {
        let record = Record::at(self.clock.now(), level, message);
        self.dispatch(&record);
    }

    /// Log a message from format arguments, as produced by the macros.
    ///
    /// A `Display` implementation that reports an error cuts the message
    /// short instead of panicking.
    pub fn log_args(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        self.log(level, render(args));
    }

    /// Log a message whose level arrives as an ordinal, for adapters that
    /// only carry an integer severity. Unknown ordinals log at `Disable`.
    pub fn output(&self, level: u32, message: impl Into<String>) {
        self.log(LogLevel::from_ordinal(level), message);
    }

    /// Fan a record out to every emitter, then run the remote-forward step.
    pub fn dispatch(&self, record: &Record) {
        self.fan_out(record);
        self.forward(record);
    }

    fn fan_out(&self, record: &Record) {
        let logger_name: Arc<str> = Arc::clone(&*self.name.read());
        // Recursive read: an emitter may log through this logger again.
        let handlers = self.handlers.read_recursive();

        for (handler_name, emitter) in handlers.iter() {
            let emit_result = panic::catch_unwind(AssertUnwindSafe(|| {
                emitter.emit(&logger_name, record)
            }));

            match emit_result {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    eprintln!("[LOGGER ERROR] Emitter '{}' failed: {}", handler_name, e);
                    self.metrics.record_emit_failure();
                }
                Err(panic_info) => {
                    eprintln!(
                        "[LOGGER CRITICAL] Emitter '{}' panicked: {}. \
                         Other emitters continue to function.",
                        handler_name,
                        panic_message(panic_info.as_ref())
                    );
                    self.metrics.record_emit_panic();
                }
            }
        }

        self.metrics.record_dispatched();
    }

    fn forward(&self, record: &Record) {
        if record.level == LogLevel::Disable || record.level < self.remote_level() {
            return;
        }
        let Some(callback) = self.remote.read().clone() else {
            return;
        };

        // Same-thread re-entry passes the lock and sees the flag set; other
        // threads wait for the in-flight forward to finish.
        let in_flight = self.forwarding.lock();
        if in_flight.get() {
            self.metrics.record_forward_suppressed();
            return;
        }

        in_flight.set(true);
        let forwarded = ForwardRecord::anonymous(
            record.level.ordinal(),
            unix_seconds(&self.clock.now()),
            &record.message,
        );
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| callback(&forwarded)));
        in_flight.set(false);

        self.metrics.record_forward();
        if let Err(panic_info) = outcome {
            eprintln!(
                "[LOGGER CRITICAL] Remote forward panicked: {}",
                panic_message(panic_info.as_ref())
            );
        }
    }

    /// Push a level name to every emitter that filters on its own level.
    /// Emitters without that capability are left alone.
    pub fn reset_level(&self, name: &str) {
        let handlers = self.handlers.read();
        for emitter in handlers.values() {
            if let Some(level_aware) = emitter.as_level_aware() {
                level_aware.set_level(name);
            }
        }
    }

    /// Flush every emitter, returning the first error after trying them all.
    pub fn flush(&self) -> Result<()> {
        let handlers = self.handlers.read();
        let mut first_error = None;
        for (name, emitter) in handlers.iter() {
            if let Err(e) = emitter.flush() {
                eprintln!("[LOGGER ERROR] Emitter '{}' flush failed: {}", name, e);
                first_error.get_or_insert(e);
            }
        }
        first_error.map_or(Ok(()), Err)
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    #[inline]
    pub fn debug(&self, message: impl Into<String>) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    pub fn trace(&self, message: impl Into<String>) {
        self.log(LogLevel::Trace, message);
    }

    #[inline]
    pub fn info(&self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    pub fn warning(&self, message: impl Into<String>) {
        self.log(LogLevel::Warning, message);
    }

    #[inline]
    pub fn error(&self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    #[inline]
    pub fn fatal(&self, message: impl Into<String>) {
        self.log(LogLevel::Fatal, message);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        // Errors were already reported per emitter
        let _ = self.flush();
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name())
            .field("handlers", &self.handler_names())
            .field("remote_level", &self.remote_level())
            .finish_non_exhaustive()
    }
}

fn render(args: fmt::Arguments<'_>) -> String {
    if let Some(message) = args.as_str() {
        return message.to_owned();
    }
    let mut message = String::new();
    // On error, keep whatever was written before the failing argument
    let _ = message.write_fmt(args);
    message
}

fn panic_message(panic_info: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = panic_info.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic_info.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use log_dispatch::prelude::*;
/// use std::sync::Arc;
///
/// let logger = Logger::builder()
///     .name("billing")
///     .handler("console", Arc::new(ConsoleEmitter::new()))
///     .remote_level(LogLevel::Warning)
///     .remote_forward(Arc::new(|record: &ForwardRecord<'_>| {
///         eprintln!("collector <- {}", record.message);
///     }))
///     .build();
///
/// assert_eq!(logger.name(), "billing");
/// ```
pub struct LoggerBuilder {
    name: Option<String>,
    handlers: Vec<(String, Arc<dyn Emitter>)>,
    remote: Option<RemoteForward>,
    remote_level: LogLevel,
    clock: Arc<dyn Clock>,
    seed_default_name: bool,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            name: None,
            handlers: Vec::new(),
            remote: None,
            remote_level: DEFAULT_REMOTE_LEVEL,
            clock: Arc::new(SystemClock),
            seed_default_name: true,
        }
    }

    /// Fix the display name. Without it the name follows the last handler.
    #[must_use = "builder methods return a new value"]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn handler(mut self, name: impl Into<String>, emitter: Arc<dyn Emitter>) -> Self {
        self.handlers.push((name.into(), emitter));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn remote_forward(mut self, callback: RemoteForward) -> Self {
        self.remote = Some(callback);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn remote_level(mut self, level: LogLevel) -> Self {
        self.remote_level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Whether `add_handler` on the built logger may name the default
    /// logger. Enabled by default.
    #[must_use = "builder methods return a new value"]
    pub fn seed_default_name(mut self, enabled: bool) -> Self {
        self.seed_default_name = enabled;
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        let logger = Logger::with_parts(self.clock, self.seed_default_name);
        logger.set_remote_level(self.remote_level);
        if let Some(callback) = self.remote {
            logger.set_remote_forward(callback);
        }
        for (name, emitter) in self.handlers {
            logger.add_handler(name, emitter);
        }
        if let Some(name) = self.name {
            logger.set_name(name);
        }
        logger
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}
