//! Augment Player Runner - wiring for the demo session
//!
//! Builds the native side (simulated SDK behind the command channel), the
//! shared event channel, and drives one player through its lifecycle.

pub mod simulated;

use std::sync::{Arc, Mutex, PoisonError};

use anyhow::Context;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use augment_player_adapters::infrastructure::command_channel::{self, DEFAULT_COMMAND_CAPACITY};
use augment_player_adapters::infrastructure::testing::sample_product;
use augment_player_adapters::infrastructure::EventChannel;
use augment_player_app::{AugmentPlayer, PlayerOptions, PlayerTimeouts};
use augment_player_ports::inbound::LoadingStatus;
use augment_player_ports::outbound::{NativeBridgeHandle, NativeError, ViewSurfacePort};
use augment_player_ports::{NativeViewSpec, ViewProps};

use simulated::{simulated_constants, SimulatedNative};

/// Makes the simulated `start` reject with the given code
pub const SIMULATED_FAILURE_ENV: &str = "AUGMENT_SIMULATED_FAILURE";

#[derive(Debug, Clone, Default)]
pub struct RunnerConfig {
    pub timeouts: PlayerTimeouts,
    pub simulated_failure: Option<String>,
}

impl RunnerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let timeouts = PlayerTimeouts::from_env().context("reading player timeouts")?;
        let simulated_failure = std::env::var(SIMULATED_FAILURE_ENV)
            .ok()
            .filter(|s| !s.trim().is_empty());
        Ok(Self {
            timeouts,
            simulated_failure,
        })
    }
}

/// Surface that "mounts" the native view by logging it
#[derive(Debug, Default)]
pub struct LoggingSurface;

impl ViewSurfacePort for LoggingSurface {
    fn mount_native_view(&self, spec: &NativeViewSpec) -> Result<(), NativeError> {
        tracing::info!(
            component = %spec.component_name,
            props = ?spec.props,
            "Mounting native view"
        );
        Ok(())
    }
}

/// Handle on the native side of the demo
pub struct NativeSide {
    pub handle: NativeBridgeHandle,
    pub events: EventChannel,
    pub task: JoinHandle<()>,
}

/// Spawn the simulated SDK and build the bridge handle that reaches it.
pub fn spawn_native(config: &RunnerConfig) -> NativeSide {
    let constants = simulated_constants();
    let events = EventChannel::new();
    let (bridge, commands) = command_channel::channel(constants.clone(), DEFAULT_COMMAND_CAPACITY);

    let native = SimulatedNative::new(events.clone(), constants)
        .failing_start(config.simulated_failure.clone());
    let task = tokio::spawn(native.run(commands));

    let handle = NativeBridgeHandle::new(Arc::new(bridge), Arc::new(events.clone()));
    NativeSide {
        handle,
        events,
        task,
    }
}

/// What the demo session observed
#[derive(Debug, Clone, PartialEq)]
pub struct SessionReport {
    pub statuses: Vec<LoadingStatus>,
    pub added: serde_json::Value,
}

/// Create a player, wait for readiness, add a product, recenter, tear down.
pub async fn run_session(
    native: NativeBridgeHandle,
    config: &RunnerConfig,
) -> anyhow::Result<SessionReport> {
    let statuses: Arc<Mutex<Vec<LoadingStatus>>> = Arc::default();
    let (ready_tx, ready_rx) = oneshot::channel();

    let sink = Arc::clone(&statuses);
    let options = PlayerOptions::new()
        .with_view(ViewProps {
            test_id: Some("augment-player".to_string()),
            ..ViewProps::default()
        })
        .with_timeouts(config.timeouts)
        .with_loader_callback(move |status| {
            tracing::info!(show = status.show, progress = status.progress, "Loading");
            sink.lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(status);
        })
        .on_player_ready(move |result| {
            let _ = ready_tx.send(result);
        });

    let player = AugmentPlayer::create(native, options);
    player.attach_to_surface(&LoggingSurface)?;

    let ready = ready_rx
        .await
        .context("player dropped its readiness callback")?;
    let player = match ready {
        Ok(player) => player,
        Err(e) => {
            player.teardown();
            return Err(e).context("player failed to start");
        }
    };

    let added = player
        .add_product(sample_product())
        .await
        .context("adding demo product")?;
    tracing::info!(result = %added, "Product added");

    player
        .recenter_products()?
        .await
        .context("recenter task panicked")?;

    player.teardown();

    let statuses = statuses
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .clone();
    Ok(SessionReport { statuses, added })
}
