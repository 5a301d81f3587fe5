//! Shared level filter for the bundled emitters

use crate::core::{LevelAware, LevelRange, LogLevel};
use parking_lot::RwLock;

/// Runtime-adjustable [`LevelRange`].
///
/// `set_level("warn")` turns the range into `WARNING..=FATAL`; an unknown
/// name yields `DISABLE..=FATAL`, which rejects everything.
#[derive(Debug, Default)]
pub struct LevelFilter {
    range: RwLock<LevelRange>,
}

impl LevelFilter {
    pub fn new(range: LevelRange) -> Self {
        Self {
            range: RwLock::new(range),
        }
    }

    #[inline]
    pub fn allows(&self, level: LogLevel) -> bool {
        self.range.read().contains(level)
    }

    pub fn range(&self) -> LevelRange {
        *self.range.read()
    }

    pub fn set_range(&self, range: LevelRange) {
        *self.range.write() = range;
    }
}

impl LevelAware for LevelFilter {
    fn set_level(&self, name: &str) {
        self.set_range(LevelRange::at_least(LogLevel::parse(name)));
    }
}
