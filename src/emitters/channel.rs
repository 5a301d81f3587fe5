//! Channel emitter: hands records to another thread or a test

use super::level_filter::LevelFilter;
use crate::core::{Closeable, Emitter, LevelAware, LevelRange, LoggerError, Record, Result};
use crossbeam_channel::{bounded, unbounded, Receiver, Sender, TrySendError};
use parking_lot::RwLock;

/// What a [`ChannelEmitter`] sends: the logger name and the record.
pub type Delivery = (String, Record);

/// Sends a copy of each accepted record into a crossbeam channel.
///
/// A full bounded channel blocks the logging thread until the receiver
/// catches up. Closing drops the sender, so receivers see the channel
/// disconnect once they drain it.
pub struct ChannelEmitter {
    sender: RwLock<Option<Sender<Delivery>>>,
    filter: LevelFilter,
}

impl ChannelEmitter {
    pub fn new(sender: Sender<Delivery>) -> Self {
        Self {
            sender: RwLock::new(Some(sender)),
            filter: LevelFilter::default(),
        }
    }

    pub fn unbounded() -> (Self, Receiver<Delivery>) {
        let (sender, receiver) = unbounded();
        (Self::new(sender), receiver)
    }

    pub fn bounded(capacity: usize) -> (Self, Receiver<Delivery>) {
        let (sender, receiver) = bounded(capacity);
        (Self::new(sender), receiver)
    }

    #[must_use]
    pub fn with_level_range(self, range: LevelRange) -> Self {
        self.filter.set_range(range);
        self
    }
}

impl Emitter for ChannelEmitter {
    fn emit(&self, logger_name: &str, record: &Record) -> Result<()> {
        if !self.filter.allows(record.level) {
            return Ok(());
        }

        let sender = self
            .sender
            .read()
            .clone()
            .ok_or_else(|| LoggerError::closed("channel"))?;
        let delivery = (logger_name.to_string(), record.clone());

        match sender.try_send(delivery) {
            Ok(()) => Ok(()),
            Err(TrySendError::Full(delivery)) => sender
                .send(delivery)
                .map_err(|_| LoggerError::ChannelDisconnected),
            Err(TrySendError::Disconnected(_)) => Err(LoggerError::ChannelDisconnected),
        }
    }

    fn as_closeable(&self) -> Option<&dyn Closeable> {
        Some(self)
    }

    fn as_level_aware(&self) -> Option<&dyn LevelAware> {
        Some(&self.filter)
    }
}

impl Closeable for ChannelEmitter {
    fn close(&self) -> Result<()> {
        self.sender.write().take();
        Ok(())
    }
}
