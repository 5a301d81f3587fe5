//! Dispatch metrics for observability
//!
//! Counters for records dispatched, emitter failures, and the remote
//! forward path.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for logger observability
///
/// # Example
///
/// ```
/// use log_dispatch::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
/// metrics.record_dispatched();
/// metrics.record_emit_failure();
///
/// assert_eq!(metrics.records_dispatched(), 1);
/// assert_eq!(metrics.emit_failures(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Records built and fanned out
    records_dispatched: AtomicU64,

    /// Emitter calls that returned an error
    emit_failures: AtomicU64,

    /// Emitter calls that panicked
    emit_panics: AtomicU64,

    /// Remote-forward callback invocations
    forwards: AtomicU64,

    /// Forwards skipped because one was already in flight
    forwards_suppressed: AtomicU64,
}

impl LoggerMetrics {
    pub const fn new() -> Self {
        Self {
            records_dispatched: AtomicU64::new(0),
            emit_failures: AtomicU64::new(0),
            emit_panics: AtomicU64::new(0),
            forwards: AtomicU64::new(0),
            forwards_suppressed: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn records_dispatched(&self) -> u64 {
        self.records_dispatched.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn emit_failures(&self) -> u64 {
        self.emit_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn emit_panics(&self) -> u64 {
        self.emit_panics.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn forwards(&self) -> u64 {
        self.forwards.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn forwards_suppressed(&self) -> u64 {
        self.forwards_suppressed.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_dispatched(&self) -> u64 {
        self.records_dispatched.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_emit_failure(&self) -> u64 {
        self.emit_failures.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_emit_panic(&self) -> u64 {
        self.emit_panics.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_forward(&self) -> u64 {
        self.forwards.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_forward_suppressed(&self) -> u64 {
        self.forwards_suppressed.fetch_add(1, Ordering::Relaxed)
    }

    /// Reset all metrics to zero
    pub fn reset(&self) {
        self.records_dispatched.store(0, Ordering::Relaxed);
        self.emit_failures.store(0, Ordering::Relaxed);
        self.emit_panics.store(0, Ordering::Relaxed);
        self.forwards.store(0, Ordering::Relaxed);
        self.forwards_suppressed.store(0, Ordering::Relaxed);
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            records_dispatched: AtomicU64::new(self.records_dispatched()),
            emit_failures: AtomicU64::new(self.emit_failures()),
            emit_panics: AtomicU64::new(self.emit_panics()),
            forwards: AtomicU64::new(self.forwards()),
            forwards_suppressed: AtomicU64::new(self.forwards_suppressed()),
        }
    }
}
