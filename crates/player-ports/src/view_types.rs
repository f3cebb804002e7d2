//! Boundary types shared by the player component and its adapters.
//!
//! These define the data that crosses the native bridge: the constants the
//! native module exports, the opaque product descriptor, and the explicit
//! view configuration schema forwarded to the native view.

use serde::{Deserialize, Serialize};

/// Component name the native side registers its player view under
pub const DEFAULT_NATIVE_VIEW_NAME: &str = "AugmentReactPlayerNative";

/// Constants exported by the native module at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeConstants {
    /// Identifier of the "loading progress" event
    pub loading_progress_event: String,
    /// Identifier of the "loading over" event
    pub loading_over_event: String,
    /// Name of the native view component
    #[serde(default = "default_view_name")]
    pub native_view_name: String,
}

fn default_view_name() -> String {
    DEFAULT_NATIVE_VIEW_NAME.to_string()
}

impl BridgeConstants {
    pub fn new(
        loading_progress_event: impl Into<String>,
        loading_over_event: impl Into<String>,
    ) -> Self {
        Self {
            loading_progress_event: loading_progress_event.into(),
            loading_over_event: loading_over_event.into(),
            native_view_name: default_view_name(),
        }
    }

    pub fn with_native_view_name(mut self, name: impl Into<String>) -> Self {
        self.native_view_name = name.into();
        self
    }
}

/// Opaque product description handed to the native add-product command.
///
/// No shape is imposed here; the native SDK interprets it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductDescriptor(pub serde_json::Value);

impl ProductDescriptor {
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }

    pub fn into_value(self) -> serde_json::Value {
        self.0
    }
}

impl From<serde_json::Value> for ProductDescriptor {
    fn from(value: serde_json::Value) -> Self {
        Self(value)
    }
}

/// Layout of the native view
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flex: Option<f32>,
}

/// View properties forwarded verbatim to the native view.
///
/// The recognized properties are enumerated; anything else the native view
/// accepts goes in `extra` so the boundary stays checkable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewProps {
    #[serde(default)]
    pub style: ViewStyle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessibility_label: Option<String>,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

fn default_visible() -> bool {
    true
}

impl Default for ViewProps {
    fn default() -> Self {
        Self {
            style: ViewStyle::default(),
            test_id: None,
            accessibility_label: None,
            visible: true,
            extra: serde_json::Map::new(),
        }
    }
}

/// What the player renders: the native component plus its props.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NativeViewSpec {
    pub component_name: String,
    pub props: ViewProps,
}
