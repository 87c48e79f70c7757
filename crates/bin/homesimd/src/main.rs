//! # homesimd — home automation dashboard daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialize `tracing` with the configured filter
//! - Construct the session store and the ThingSpeak client (adapters)
//! - Construct application services, injecting adapters via port traits
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (Ctrl-C)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use homesim_adapter_http_axum::state::AppState;
use homesim_adapter_thingspeak::ThingSpeakClient;
use homesim_app::services::dashboard_service::DashboardService;
use homesim_app::services::telemetry_service::TelemetryService;
use homesim_app::session_store::InMemorySessionStore;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("loading configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Adapters
    let sessions = InMemorySessionStore::new(config.session_idle_timeout());
    let thingspeak =
        ThingSpeakClient::new(&config.thingspeak).context("building ThingSpeak client")?;

    if config.integrations.thingspeak_enabled && config.thingspeak.api_key.is_empty() {
        tracing::warn!("thingspeak enabled without an api key, updates will be rejected");
    }

    // Services
    let dashboard_service = DashboardService::new(sessions);
    let telemetry_service =
        TelemetryService::new(thingspeak, config.integrations.thingspeak_enabled);

    // HTTP
    let state = AppState::new(
        dashboard_service,
        telemetry_service,
        config.page_settings(),
    );
    let app = homesim_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("binding {bind_addr}"))?;
    tracing::info!(
        addr = %bind_addr,
        thingspeak = config.integrations.thingspeak_enabled,
        "homesimd listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("homesimd stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
