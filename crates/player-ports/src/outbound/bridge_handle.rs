//! Native Bridge Handle - the native module's command port, its event
//! channel and its exported constants, bundled for injection.

use std::fmt;
use std::sync::Arc;

use crate::outbound::{EventChannelPort, NativeBridgePort};
use crate::view_types::BridgeConstants;

/// Cheap-to-clone reference to the native module.
///
/// Constants are read once at construction; the native module defines them
/// at startup and never changes them afterwards.
#[derive(Clone)]
pub struct NativeBridgeHandle {
    bridge: Arc<dyn NativeBridgePort>,
    events: Arc<dyn EventChannelPort>,
    constants: BridgeConstants,
}

impl NativeBridgeHandle {
    pub fn new(bridge: Arc<dyn NativeBridgePort>, events: Arc<dyn EventChannelPort>) -> Self {
        let constants = bridge.constants();
        Self {
            bridge,
            events,
            constants,
        }
    }

    pub fn bridge(&self) -> &Arc<dyn NativeBridgePort> {
        &self.bridge
    }

    pub fn events(&self) -> &Arc<dyn EventChannelPort> {
        &self.events
    }

    pub fn constants(&self) -> &BridgeConstants {
        &self.constants
    }
}

impl fmt::Debug for NativeBridgeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeBridgeHandle")
            .field("constants", &self.constants)
            .finish_non_exhaustive()
    }
}
