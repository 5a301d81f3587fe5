//! Remote forwarding of severe records
//!
//! A logger may carry one callback that reports records at or above its
//! remote level to an external collector. The identity fields exist for
//! collectors that key on an origin; the dispatch core always leaves them
//! zeroed.

use std::sync::Arc;

/// What the remote-forward callback receives for a single record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForwardRecord<'a> {
    pub id: u64,
    pub name: &'a str,
    pub class: &'a str,
    pub server_name: &'a str,
    /// [`LogLevel::ordinal`](super::LogLevel::ordinal) of the record
    pub level: u32,
    pub unix_timestamp: u32,
    pub message: &'a str,
}

impl<'a> ForwardRecord<'a> {
    pub(crate) fn anonymous(level: u32, unix_timestamp: u32, message: &'a str) -> Self {
        Self {
            id: 0,
            name: "",
            class: "",
            server_name: "",
            level,
            unix_timestamp,
            message,
        }
    }
}

/// Callback type for remote forwarding.
///
/// The callback may itself log through the same logger; such nested calls
/// are delivered to local emitters but never forwarded again.
pub type RemoteForward = Arc<dyn Fn(&ForwardRecord<'_>) + Send + Sync>;
