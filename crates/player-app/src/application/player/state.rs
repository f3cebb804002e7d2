//! Per-instance lifecycle state

use std::fmt;

/// Lifecycle of a player instance.
///
/// `Constructed → AwaitingStart → Ready | Failed`, and any state → `Detached`
/// on teardown. `Ready` and `Failed` are terminal for the readiness signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerState {
    /// Subscribed to native events, no native view yet
    Constructed,
    /// Native view mounted, start handshake in flight
    AwaitingStart,
    /// Start handshake succeeded
    Ready,
    /// Start handshake failed or timed out
    Failed,
    /// Torn down; subscriptions disposed
    Detached,
}

impl fmt::Display for PlayerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PlayerState::Constructed => "constructed",
            PlayerState::AwaitingStart => "awaiting start",
            PlayerState::Ready => "ready",
            PlayerState::Failed => "failed",
            PlayerState::Detached => "detached",
        };
        f.write_str(name)
    }
}
