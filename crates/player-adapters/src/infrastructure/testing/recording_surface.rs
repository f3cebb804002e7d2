//! View surface fake that records what it was asked to mount

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use augment_player_ports::outbound::{NativeError, ViewSurfacePort};
use augment_player_ports::NativeViewSpec;

/// Records mounted view specs; optionally refuses to mount.
#[derive(Clone, Default)]
pub struct RecordingSurface {
    mounted: Arc<Mutex<Vec<NativeViewSpec>>>,
    failure: Option<NativeError>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(error: NativeError) -> Self {
        Self {
            mounted: Arc::default(),
            failure: Some(error),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<NativeViewSpec>> {
        self.mounted.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn mounted(&self) -> Vec<NativeViewSpec> {
        self.lock().clone()
    }
}

impl ViewSurfacePort for RecordingSurface {
    fn mount_native_view(&self, spec: &NativeViewSpec) -> Result<(), NativeError> {
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }
        self.lock().push(spec.clone());
        Ok(())
    }
}
