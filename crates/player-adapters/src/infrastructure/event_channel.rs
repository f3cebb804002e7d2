//! Shared event channel for native-originated events
//!
//! One instance is shared process-wide: the native side calls [`EventChannel::emit`],
//! player components subscribe through [`EventChannelPort`].

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use augment_player_ports::outbound::{EventChannelPort, EventHandler, Subscription};

struct Listener {
    id: u64,
    handler: EventHandler,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: HashMap<String, Vec<Listener>>,
}

/// Fan-out of named native events to registered handlers
#[derive(Clone, Default)]
pub struct EventChannel {
    registry: Arc<Mutex<Registry>>,
}

impl EventChannel {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Registry> {
        self.registry.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Deliver `payload` to every handler registered for `event_name`.
    ///
    /// Handlers run in registration order on the caller's thread, outside the
    /// registry lock. Returns the number of handlers invoked.
    pub fn emit(&self, event_name: &str, payload: serde_json::Value) -> usize {
        let handlers: Vec<EventHandler> = {
            let registry = self.lock();
            match registry.listeners.get(event_name) {
                Some(listeners) => listeners.iter().map(|l| Arc::clone(&l.handler)).collect(),
                None => Vec::new(),
            }
        };

        if handlers.is_empty() {
            tracing::trace!(event = event_name, "Native event has no listeners");
            return 0;
        }

        tracing::debug!(
            event = event_name,
            listeners = handlers.len(),
            "Dispatching native event"
        );
        for handler in &handlers {
            handler(&payload);
        }
        handlers.len()
    }

    /// Number of live handlers for `event_name`
    pub fn listener_count(&self, event_name: &str) -> usize {
        self.lock()
            .listeners
            .get(event_name)
            .map_or(0, Vec::len)
    }
}

impl EventChannelPort for EventChannel {
    fn subscribe(&self, event_name: &str, handler: EventHandler) -> Subscription {
        let id = {
            let mut registry = self.lock();
            let id = registry.next_id;
            registry.next_id += 1;
            registry
                .listeners
                .entry(event_name.to_string())
                .or_default()
                .push(Listener { id, handler });
            id
        };

        let registry = Arc::downgrade(&self.registry);
        let name = event_name.to_string();
        Subscription::new(event_name, move || {
            // Channel already gone means nothing left to remove
            let Some(registry) = registry.upgrade() else {
                return;
            };
            let mut registry = registry.lock().unwrap_or_else(PoisonError::into_inner);
            if let Some(listeners) = registry.listeners.get_mut(&name) {
                listeners.retain(|l| l.id != id);
                if listeners.is_empty() {
                    registry.listeners.remove(&name);
                }
            }
            tracing::trace!(event = %name, id, "Listener removed");
        })
    }
}
