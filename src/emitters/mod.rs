//! Emitter implementations

pub mod channel;
#[cfg(feature = "console")]
pub mod console;
#[cfg(feature = "file")]
pub mod file;
pub mod level_filter;

pub use channel::{ChannelEmitter, Delivery};
#[cfg(feature = "console")]
pub use console::ConsoleEmitter;
#[cfg(feature = "file")]
pub use file::FileEmitter;
pub use level_filter::LevelFilter;

// Re-export traits for convenience
pub use crate::core::{Closeable, Emitter, LevelAware};
