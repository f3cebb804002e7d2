//! Event Channel Port - Subscription point for native-originated events
//!
//! Native events are keyed by identifiers the native module exports at
//! startup (see [`BridgeConstants`](crate::view_types::BridgeConstants)),
//! never by hard-coded strings.

use std::fmt;
use std::sync::Arc;

/// Handler invoked with the raw payload of a native event
pub type EventHandler = Arc<dyn Fn(&serde_json::Value) + Send + Sync + 'static>;

/// Disposable handle returned by [`EventChannelPort::subscribe`].
///
/// Dropping the handle removes the handler, so an owner that keeps its
/// subscriptions in a field unsubscribes on teardown automatically.
#[must_use = "dropping a Subscription immediately removes the handler"]
pub struct Subscription {
    event_name: String,
    unsubscribe: Option<Box<dyn FnOnce() + Send + Sync + 'static>>,
}

impl Subscription {
    pub fn new(
        event_name: impl Into<String>,
        unsubscribe: impl FnOnce() + Send + Sync + 'static,
    ) -> Self {
        Self {
            event_name: event_name.into(),
            unsubscribe: Some(Box::new(unsubscribe)),
        }
    }

    /// Event identifier this subscription listens to
    pub fn event_name(&self) -> &str {
        &self.event_name
    }

    /// Remove the handler now
    pub fn dispose(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("event_name", &self.event_name)
            .field("active", &self.unsubscribe.is_some())
            .finish()
    }
}

/// Observer registration interface over the native event emitter
pub trait EventChannelPort: Send + Sync {
    /// Register `handler` for events named `event_name`.
    fn subscribe(&self, event_name: &str, handler: EventHandler) -> Subscription;
}
