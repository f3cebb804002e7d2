//! Augment Player Runner - composition root binary
//!
//! Runs one scripted player session against the simulated native SDK.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use augment_player_adapters::infrastructure::bridge_registry;
use augment_player_runner::{run_session, spawn_native, RunnerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine; the environment may already be set.
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "augment_player=debug,augment_player_app=debug,augment_player_adapters=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Augment Player");

    let config = RunnerConfig::from_env()?;
    tracing::debug!(?config, "Loaded configuration");

    let native = spawn_native(&config);
    bridge_registry::install(native.handle.clone())?;

    let report = run_session(bridge_registry::native_bridge()?, &config).await?;
    tracing::info!(
        updates = report.statuses.len(),
        added = %report.added,
        "Session finished"
    );

    Ok(())
}
