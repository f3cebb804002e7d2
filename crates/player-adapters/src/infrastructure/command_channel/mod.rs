//! Channel-backed native bridge
//!
//! For hosts whose native SDK runs on its own thread (or behind FFI): commands
//! travel over a tokio mpsc channel, each with a one-shot responder the native
//! side completes exactly once.

mod adapter;
mod protocol;

pub use adapter::{channel, ChannelNativeBridge, DEFAULT_COMMAND_CAPACITY};
pub use protocol::{NativeCommand, NativeCommandReceiver, Responder};
