//! Player error types
//!
//! Errors the player component reports to the host application. Native
//! rejections are wrapped, never translated: the host sees exactly the
//! value the native side produced.

use std::time::Duration;

use augment_player_ports::outbound::NativeError;

use crate::application::player::PlayerState;

/// Errors that can occur in player operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlayerError {
    /// The native side rejected the command
    #[error(transparent)]
    Native(#[from] NativeError),
    /// Command issued before the start handshake succeeded
    #[error("player is not ready (state: {state})")]
    NotReady { state: PlayerState },
    /// `attach_to_surface` was already called on this instance
    #[error("player is already attached to a surface")]
    AlreadyAttached,
    /// The player was torn down
    #[error("player has been torn down")]
    Detached,
    /// The configured timeout elapsed before the native side answered
    #[error("native {operation} timed out after {after:?}")]
    Timeout {
        operation: &'static str,
        after: Duration,
    },
    /// No tokio runtime to run the command on
    #[error("no async runtime available to issue native commands")]
    NoRuntime,
}

impl PlayerError {
    /// The native rejection, if this error carries one
    pub fn native(&self) -> Option<&NativeError> {
        match self {
            PlayerError::Native(e) => Some(e),
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, PlayerError::Timeout { .. })
    }
}

/// Errors reading player configuration
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}
