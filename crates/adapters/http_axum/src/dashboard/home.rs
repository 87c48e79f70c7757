//! Dashboard home page — controls, room panels and status table.

use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Response};

use homesim_app::ports::{SessionStore, TelemetrySink};
use homesim_domain::presentation::{RoomPanel, StatusRow, room_panels, status_rows};
use homesim_domain::registry::DeviceEntry;
use homesim_domain::session::Notice;

use crate::session::{SessionCookie, WithSession};
use crate::state::AppState;

/// Home page template.
#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    title: String,
    refresh_seconds: u32,
    controls: Vec<DeviceEntry>,
    rooms: Vec<RoomPanel>,
    status_rows: Vec<StatusRow>,
    powered_count: usize,
    notice: Option<Notice>,
    telemetry_enabled: bool,
}

impl IntoResponse for HomeTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// `GET /` — the dashboard for the caller's session.
pub async fn index<S, T>(
    State(state): State<AppState<S, T>>,
    session: SessionCookie,
) -> WithSession<HomeTemplate>
where
    S: SessionStore + Send + Sync + 'static,
    T: TelemetrySink + Send + Sync + 'static,
{
    let current = state.dashboard.open(session.id()).await;
    let notice = state.dashboard.take_notice(session.id()).await;
    let registry = &current.registry;

    session.respond(HomeTemplate {
        title: state.page.title.clone(),
        refresh_seconds: state.page.refresh_seconds,
        controls: registry.entries().to_vec(),
        rooms: room_panels(registry),
        status_rows: status_rows(registry),
        powered_count: registry.powered_count(),
        notice,
        telemetry_enabled: state.telemetry.is_enabled(),
    })
}

#[cfg(test)]
mod tests {
    use crate::router::tests::{body_text, test_app};
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use homesim_domain::device::DEVICE_NAMES;
    use tower::ServiceExt;

    #[tokio::test]
    async fn should_render_every_device_off_for_new_visitor() {
        let response = test_app(true)
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key(header::SET_COOKIE));
        let body = body_text(response).await;
        for name in DEVICE_NAMES {
            assert!(body.contains(name), "missing {name}");
        }
        assert!(body.contains("Light: OFF"));
        assert!(body.contains("Door: Locked"));
        assert!(body.contains("0 of 6 devices on"));
    }

    #[tokio::test]
    async fn should_render_living_room_bedroom_and_garden() {
        let response = test_app(true)
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let body = body_text(response).await;
        let living = body.find("Living Room</h2>").unwrap();
        let bedroom = body.find("Bedroom</h2>").unwrap();
        let garden = body.find("Garden Area</h2>").unwrap();
        assert!(living < bedroom && bedroom < garden);
    }
}
