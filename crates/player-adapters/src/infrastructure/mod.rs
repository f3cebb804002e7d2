//! Infrastructure layer - Native-side adapters

pub mod bridge_registry;
pub mod command_channel;
pub mod event_channel;

pub use command_channel::{ChannelNativeBridge, NativeCommand, NativeCommandReceiver};
pub use event_channel::EventChannel;

// Test-only infrastructure fakes (ports/adapters).
// Available for integration testing from other crates as well
pub mod testing;
