//! Device toggle form handler.

use axum::extract::{Form, State};
use axum::response::Redirect;
use serde::Deserialize;

use homesim_app::ports::{SessionStore, TelemetrySink};

use super::DashboardError;
use crate::session::{SessionCookie, WithSession};
use crate::state::AppState;

/// Form data for a toggle control.
#[derive(Deserialize)]
pub struct PowerForm {
    pub device: String,
    pub powered: bool,
}

/// `POST /devices/power` — switch one device, then back to `/` (PRG).
pub async fn set_power<S, T>(
    State(state): State<AppState<S, T>>,
    session: SessionCookie,
    Form(form): Form<PowerForm>,
) -> Result<WithSession<Redirect>, DashboardError>
where
    S: SessionStore + Send + Sync + 'static,
    T: TelemetrySink + Send + Sync + 'static,
{
    state
        .dashboard
        .set_power(session.id(), &form.device, form.powered)
        .await?;

    Ok(session.respond(Redirect::to("/")))
}
