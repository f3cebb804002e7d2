//! Player configuration read from the environment

use std::time::Duration;

use crate::application::error::ConfigError;

/// Start handshake timeout in milliseconds (unset = wait indefinitely)
pub const START_TIMEOUT_ENV: &str = "AUGMENT_START_TIMEOUT_MS";
/// Recenter / add-product timeout in milliseconds (unset = wait indefinitely)
pub const COMMAND_TIMEOUT_ENV: &str = "AUGMENT_COMMAND_TIMEOUT_MS";

/// Optional limits on how long the player waits for the native side.
///
/// `None` keeps the native behavior: a hung native call hangs its outcome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerTimeouts {
    pub start: Option<Duration>,
    pub command: Option<Duration>,
}

impl PlayerTimeouts {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_start(mut self, timeout: Duration) -> Self {
        self.start = Some(timeout);
        self
    }

    pub fn with_command(mut self, timeout: Duration) -> Self {
        self.command = Some(timeout);
        self
    }

    /// Read timeouts from `AUGMENT_START_TIMEOUT_MS` / `AUGMENT_COMMAND_TIMEOUT_MS`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read timeouts through an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            start: parse_millis(START_TIMEOUT_ENV, lookup(START_TIMEOUT_ENV))?,
            command: parse_millis(COMMAND_TIMEOUT_ENV, lookup(COMMAND_TIMEOUT_ENV))?,
        })
    }
}

fn parse_millis(key: &'static str, raw: Option<String>) -> Result<Option<Duration>, ConfigError> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let millis: u64 = trimmed.parse().map_err(|e: std::num::ParseIntError| {
        ConfigError::InvalidValue {
            key,
            value: raw.clone(),
            reason: e.to_string(),
        }
    })?;
    if millis == 0 {
        return Err(ConfigError::InvalidValue {
            key,
            value: raw,
            reason: "timeout must be greater than zero".to_string(),
        });
    }
    Ok(Some(Duration::from_millis(millis)))
}
