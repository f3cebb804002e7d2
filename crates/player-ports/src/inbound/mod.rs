//! Inbound ports - Data types for native-to-application communication
//!
//! These types define how native events are represented once they cross
//! the bridge. The adapters layer delivers raw payloads, the application
//! layer decodes them with these types.

pub mod loading_events;

pub use loading_events::{
    DecodedProgress, LoadingStatus, PayloadError, ProgressPayload,
};
