//! Log record structure

use super::{log_level::LogLevel, timestamp::unix_seconds};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One rendered log call.
///
/// Records are built once by the [`Logger`](super::Logger) and handed by
/// reference to each emitter; the logger keeps nothing after fan-out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub time: DateTime<Utc>,
    pub level: LogLevel,
    pub message: String,
}

impl Record {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self::at(Utc::now(), level, message)
    }

    pub fn at(time: DateTime<Utc>, level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            time,
            level,
            message: message.into(),
        }
    }

    pub fn unix_timestamp(&self) -> u32 {
        unix_seconds(&self.time)
    }
}
