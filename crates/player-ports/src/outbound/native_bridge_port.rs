//! Native Bridge Port - Outbound port for the native AR player SDK
//!
//! This port abstracts the imperative command surface of the native module,
//! allowing the player component to issue commands without depending on a
//! concrete FFI binding. Every command is a single-outcome asynchronous
//! request: it resolves or rejects exactly once.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::view_types::{BridgeConstants, ProductDescriptor};

/// Error value the native side rejects a command with.
///
/// Carried untranslated from the native layer up to the host application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("native bridge rejected: {code}")]
pub struct NativeError {
    /// Machine-readable code (e.g. `camera_permission_denied`)
    pub code: String,
    /// Optional human-readable detail
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl NativeError {
    /// Code used when the native side dropped a request without answering
    pub const BRIDGE_DISCONNECTED: &'static str = "bridge_disconnected";
    /// Code used when the native side is no longer accepting commands
    pub const BRIDGE_UNAVAILABLE: &'static str = "bridge_unavailable";

    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn bridge_disconnected() -> Self {
        Self::new(Self::BRIDGE_DISCONNECTED)
    }

    pub fn bridge_unavailable() -> Self {
        Self::new(Self::BRIDGE_UNAVAILABLE)
    }
}

/// Native Bridge Port trait for AR player SDK commands
///
/// NOTE: This trait is intentionally **object-safe** so the application layer
/// can store an `Arc<dyn NativeBridgePort>` without depending on concrete
/// infrastructure types.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait NativeBridgePort: Send + Sync {
    /// Constants exported by the native module (event identifiers, view name)
    fn constants(&self) -> BridgeConstants;

    /// Startup handshake. Resolves once the native player view is usable.
    async fn start(&self) -> Result<(), NativeError>;

    /// Re-center the placed products in front of the camera
    async fn recenter_products(&self) -> Result<(), NativeError>;

    /// Add a product to the AR scene.
    ///
    /// The descriptor is opaque to this layer; the native result is returned
    /// as-is.
    async fn add_product_to_augment_player(
        &self,
        product: ProductDescriptor,
    ) -> Result<serde_json::Value, NativeError>;
}
