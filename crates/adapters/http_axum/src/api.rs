//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod devices;
#[allow(clippy::missing_errors_doc)]
pub mod telemetry;

use axum::Router;
use axum::routing::{get, post, put};

use homesim_app::ports::{SessionStore, TelemetrySink};

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<S, T>() -> Router<AppState<S, T>>
where
    S: SessionStore + Send + Sync + 'static,
    T: TelemetrySink + Send + Sync + 'static,
{
    Router::new()
        .route("/devices", get(devices::list::<S, T>))
        .route("/devices/{name}", put(devices::update::<S, T>))
        .route("/telemetry", post(telemetry::send::<S, T>))
}
