//! Augment player port definitions and shared cross-layer types.

pub mod inbound;
pub mod outbound;
pub mod view_types;

// Re-export boundary types at crate root for convenience
pub use view_types::{
    BridgeConstants, NativeViewSpec, ProductDescriptor, ViewProps, ViewStyle,
    DEFAULT_NATIVE_VIEW_NAME,
};
