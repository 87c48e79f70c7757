//! Telemetry button handler.

use axum::extract::State;
use axum::response::Redirect;

use homesim_app::ports::{SessionStore, TelemetrySink};
use homesim_app::services::telemetry_service::TelemetryService;

use crate::session::{SessionCookie, WithSession};
use crate::state::AppState;

/// `POST /telemetry` — send the session's registry, flash the outcome (PRG).
///
/// Telemetry failures never fail the request; they become a notice.
pub async fn send<S, T>(
    State(state): State<AppState<S, T>>,
    session: SessionCookie,
) -> WithSession<Redirect>
where
    S: SessionStore + Send + Sync + 'static,
    T: TelemetrySink + Send + Sync + 'static,
{
    let current = state.dashboard.open(session.id()).await;
    let result = state.telemetry.send_snapshot(&current.registry).await;
    state
        .dashboard
        .post_notice(session.id(), TelemetryService::<T>::notice_for(&result))
        .await;

    session.respond(Redirect::to("/"))
}
