//! View Surface Port - Host UI element the native player view mounts onto

use crate::outbound::NativeError;
use crate::view_types::NativeViewSpec;

/// Host surface able to instantiate the native player view.
///
/// Implemented by whatever UI layer embeds the player; the player calls it
/// once during `attach_to_surface`.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait ViewSurfacePort: Send + Sync {
    /// Instantiate the native view described by `spec`
    fn mount_native_view(&self, spec: &NativeViewSpec) -> Result<(), NativeError>;
}
