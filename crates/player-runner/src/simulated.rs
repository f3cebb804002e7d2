//! Simulated native side for the demo session
//!
//! Stands in for the AR SDK: answers commands from the command channel and
//! emits loading events on the shared event channel the way the SDK does
//! while a product model downloads.

use std::time::Duration;

use serde_json::json;

use augment_player_adapters::infrastructure::{EventChannel, NativeCommand, NativeCommandReceiver};
use augment_player_ports::outbound::NativeError;
use augment_player_ports::{BridgeConstants, ProductDescriptor};

/// Event identifiers the simulated SDK exports
pub fn simulated_constants() -> BridgeConstants {
    BridgeConstants::new(
        "AUGMENT_EVENT_LOADING_PROGRESS",
        "AUGMENT_EVENT_LOADING_OVER",
    )
}

pub struct SimulatedNative {
    events: EventChannel,
    constants: BridgeConstants,
    start_failure: Option<String>,
    step: Duration,
}

impl SimulatedNative {
    pub fn new(events: EventChannel, constants: BridgeConstants) -> Self {
        Self {
            events,
            constants,
            start_failure: None,
            step: Duration::from_millis(20),
        }
    }

    /// Make `start` reject with `code`
    pub fn failing_start(mut self, code: Option<String>) -> Self {
        self.start_failure = code;
        self
    }

    /// Serve commands until every bridge handle is dropped
    pub async fn run(self, mut commands: NativeCommandReceiver) {
        while let Some(command) = commands.recv().await {
            tracing::debug!(command = command.name(), "Simulated native received command");
            match command {
                NativeCommand::Start { respond_to } => {
                    tokio::time::sleep(self.step).await;
                    let outcome = match &self.start_failure {
                        Some(code) => Err(NativeError::new(code.clone())),
                        None => Ok(()),
                    };
                    let _ = respond_to.send(outcome);
                }
                NativeCommand::RecenterProducts { respond_to } => {
                    let _ = respond_to.send(Ok(()));
                }
                NativeCommand::AddProduct {
                    product,
                    respond_to,
                } => {
                    let outcome = self.load_product(&product).await;
                    let _ = respond_to.send(outcome);
                }
            }
        }
        tracing::debug!("Simulated native shutting down");
    }

    async fn load_product(
        &self,
        product: &ProductDescriptor,
    ) -> Result<serde_json::Value, NativeError> {
        let Some(identifier) = product.as_value().get("identifier").cloned() else {
            return Err(NativeError::new("invalid_product")
                .with_message("product descriptor has no identifier"));
        };

        for progress in [0, 25, 50, 75, 100] {
            self.events.emit(
                &self.constants.loading_progress_event,
                json!({ "progress": progress }),
            );
            tokio::time::sleep(self.step).await;
        }
        self.events
            .emit(&self.constants.loading_over_event, json!({}));

        Ok(json!({ "status": "added", "identifier": identifier }))
    }
}
