//! Serializable logger configuration

use super::{
    error::{LoggerError, Result},
    log_level::LogLevel,
};
use serde::{Deserialize, Serialize};

/// Settings a [`Logger`](super::Logger) can be built from.
///
/// Missing fields take their defaults, so `{}` is a valid configuration.
///
/// ```
/// use log_dispatch::{LogLevel, LoggerConfig};
///
/// let config = LoggerConfig::from_json(r#"{"name":"gateway","remote_level":"WARN"}"#).unwrap();
/// assert_eq!(config.name.as_deref(), Some("gateway"));
/// assert_eq!(config.remote_level, LogLevel::Warning);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerConfig {
    /// Display name; when absent the name follows the last added handler.
    pub name: Option<String>,
    /// Lowest level handed to the remote-forward callback.
    pub remote_level: LogLevel,
    /// Whether handler registration may seed the default logger's name.
    pub seed_default_name: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            name: None,
            remote_level: LogLevel::Error,
            seed_default_name: true,
        }
    }
}

impl LoggerConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: LoggerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if matches!(self.name.as_deref(), Some(name) if name.trim().is_empty()) {
            return Err(LoggerError::config("LoggerConfig", "name must not be blank"));
        }
        Ok(())
    }
}
