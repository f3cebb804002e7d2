//! Host-supplied player configuration

use std::fmt;
use std::sync::Arc;

use augment_player_ports::inbound::LoadingStatus;
use augment_player_ports::ViewProps;

use crate::application::config::PlayerTimeouts;
use crate::application::error::PlayerError;
use crate::application::player::AugmentPlayer;

/// Receives every loading status update
pub type LoaderCallback = Arc<dyn Fn(LoadingStatus) + Send + Sync + 'static>;

/// Receives the readiness outcome, exactly once
pub type ReadyCallback = Box<dyn FnOnce(Result<AugmentPlayer, PlayerError>) + Send + 'static>;

/// Configuration surface of the player component
#[derive(Default)]
pub struct PlayerOptions {
    pub loader_callback: Option<LoaderCallback>,
    pub on_player_ready: Option<ReadyCallback>,
    /// Forwarded unchanged to the native view
    pub view: ViewProps,
    pub timeouts: PlayerTimeouts,
}

impl PlayerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_loader_callback<F>(mut self, callback: F) -> Self
    where
        F: Fn(LoadingStatus) + Send + Sync + 'static,
    {
        self.loader_callback = Some(Arc::new(callback));
        self
    }

    pub fn on_player_ready<F>(mut self, callback: F) -> Self
    where
        F: FnOnce(Result<AugmentPlayer, PlayerError>) + Send + 'static,
    {
        self.on_player_ready = Some(Box::new(callback));
        self
    }

    pub fn with_view(mut self, view: ViewProps) -> Self {
        self.view = view;
        self
    }

    pub fn with_timeouts(mut self, timeouts: PlayerTimeouts) -> Self {
        self.timeouts = timeouts;
        self
    }
}

impl fmt::Debug for PlayerOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlayerOptions")
            .field("loader_callback", &self.loader_callback.is_some())
            .field("on_player_ready", &self.on_player_ready.is_some())
            .field("view", &self.view)
            .field("timeouts", &self.timeouts)
            .finish()
    }
}
