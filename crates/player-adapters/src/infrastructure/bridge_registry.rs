//! Process-wide native bridge handle
//!
//! The native module exists once per process. The composition root installs
//! its handle here at startup; components created later look it up.

use once_cell::sync::OnceCell;

use augment_player_ports::outbound::NativeBridgeHandle;

static NATIVE_BRIDGE: OnceCell<NativeBridgeHandle> = OnceCell::new();

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BridgeRegistryError {
    #[error("native bridge handle is already installed")]
    AlreadyInstalled,
    #[error("native bridge handle has not been installed")]
    NotInstalled,
}

/// Install the process-wide handle. Only the first call succeeds.
pub fn install(handle: NativeBridgeHandle) -> Result<(), BridgeRegistryError> {
    NATIVE_BRIDGE
        .set(handle)
        .map_err(|_| BridgeRegistryError::AlreadyInstalled)?;
    tracing::info!(
        constants = ?NATIVE_BRIDGE.get().map(|h| h.constants()),
        "Native bridge handle installed"
    );
    Ok(())
}

/// The installed handle, if any
pub fn get() -> Option<&'static NativeBridgeHandle> {
    NATIVE_BRIDGE.get()
}

/// The installed handle, as an owned clone
pub fn native_bridge() -> Result<NativeBridgeHandle, BridgeRegistryError> {
    get().cloned().ok_or(BridgeRegistryError::NotInstalled)
}
