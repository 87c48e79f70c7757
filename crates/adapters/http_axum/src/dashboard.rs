//! Server-side rendered HTML dashboard (no JavaScript).

#[allow(clippy::missing_errors_doc)]
pub mod controls;
pub mod home;
pub mod telemetry;

use askama::Template;
use axum::Router;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};

use homesim_app::ports::{SessionStore, TelemetrySink};
use homesim_domain::error::{HomeSimError, TelemetryError};

use crate::state::AppState;

/// Build the dashboard sub-router for SSR HTML pages.
pub fn routes<S, T>() -> Router<AppState<S, T>>
where
    S: SessionStore + Send + Sync + 'static,
    T: TelemetrySink + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(home::index::<S, T>))
        .route("/devices/power", post(controls::set_power::<S, T>))
        .route("/telemetry", post(telemetry::send::<S, T>))
}

/// Error page template.
#[derive(Template)]
#[template(path = "error.html")]
struct ErrorTemplate {
    title: &'static str,
    refresh_seconds: u32,
    status: StatusCode,
    message: String,
}

/// Renders a [`HomeSimError`] as an HTML error page.
#[derive(Debug)]
pub struct DashboardError(HomeSimError);

impl From<HomeSimError> for DashboardError {
    fn from(err: HomeSimError) -> Self {
        Self(err)
    }
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            HomeSimError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            HomeSimError::Telemetry(TelemetryError::Disabled) => {
                (StatusCode::SERVICE_UNAVAILABLE, "Telemetry is disabled.".to_string())
            }
            HomeSimError::Telemetry(_) => (
                StatusCode::BAD_GATEWAY,
                "Telemetry endpoint unavailable.".to_string(),
            ),
        };

        let page = ErrorTemplate {
            title: "Error",
            refresh_seconds: 0,
            status,
            message,
        };
        match page.render() {
            Ok(html) => (status, Html(html)).into_response(),
            Err(err) => {
                tracing::error!(error = %err, "failed to render error page");
                status.into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::tests::body_text;
    use axum::http::header;
    use homesim_domain::error::NotFoundError;

    #[tokio::test]
    async fn should_render_unknown_device_as_html_not_found() {
        let err = DashboardError::from(HomeSimError::from(NotFoundError {
            entity: "Device",
            id: "Toaster".to_string(),
        }));
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("text/html"));
        let body = body_text(response).await;
        assert!(body.contains("Toaster"));
        assert!(body.contains("href=\"/\""));
    }
}
