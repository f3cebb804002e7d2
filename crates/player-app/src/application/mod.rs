//! Application layer - Player component and its configuration

pub mod config;
pub mod error;
pub mod player;

// Re-export common types
pub use config::PlayerTimeouts;
pub use error::{ConfigError, PlayerError};
pub use player::{AugmentPlayer, LoaderCallback, PlayerOptions, PlayerState, ReadyCallback};
