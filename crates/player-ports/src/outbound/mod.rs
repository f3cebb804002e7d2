//! Outbound ports - Interfaces for the native side
//!
//! These ports define the contracts that infrastructure adapters must implement,
//! allowing the player component to talk to the native AR SDK without
//! depending on a concrete binding.

pub mod bridge_handle;
pub mod event_channel_port;
pub mod native_bridge_port;
pub mod view_surface_port;

pub use bridge_handle::NativeBridgeHandle;
pub use event_channel_port::{EventChannelPort, EventHandler, Subscription};
pub use native_bridge_port::{NativeBridgePort, NativeError};
pub use view_surface_port::ViewSurfacePort;

#[cfg(any(test, feature = "testing"))]
pub use native_bridge_port::MockNativeBridgePort;
#[cfg(any(test, feature = "testing"))]
pub use view_surface_port::MockViewSurfacePort;
