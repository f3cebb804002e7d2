//! Augment player application layer.
//!
//! Hosts embed [`AugmentPlayer`]: it relays native loading events to a single
//! loader callback, reports the start handshake through `on_player_ready`,
//! and forwards the recenter and add-product commands to the native bridge.

pub mod application;

pub use application::{
    AugmentPlayer, ConfigError, PlayerError, PlayerOptions, PlayerState, PlayerTimeouts,
};
