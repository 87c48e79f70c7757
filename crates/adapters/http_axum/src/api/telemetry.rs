//! JSON handler for sending the caller's registry to the telemetry endpoint.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

use homesim_app::ports::{SessionStore, TelemetrySink};
use homesim_domain::telemetry::TelemetryReceipt;

use crate::error::ApiError;
use crate::session::{SessionCookie, WithSession};
use crate::state::AppState;

/// Possible responses from the send endpoint.
pub enum SendResponse {
    Ok(Json<TelemetryReceipt>),
}

impl IntoResponse for SendResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `POST /api/telemetry`
pub async fn send<S, T>(
    State(state): State<AppState<S, T>>,
    session: SessionCookie,
) -> Result<WithSession<SendResponse>, ApiError>
where
    S: SessionStore + Send + Sync + 'static,
    T: TelemetrySink + Send + Sync + 'static,
{
    let current = state.dashboard.open(session.id()).await;
    let receipt = state.telemetry.send_snapshot(&current.registry).await?;
    Ok(session.respond(SendResponse::Ok(Json(receipt))))
}
