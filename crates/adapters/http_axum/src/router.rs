//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use homesim_app::ports::{SessionStore, TelemetrySink};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Merges API routes under `/api` and dashboard routes at `/`.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<S, T>(state: AppState<S, T>) -> Router
where
    S: SessionStore + Send + Sync + 'static,
    T: TelemetrySink + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .merge(crate::dashboard::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::state::PageSettings;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use homesim_app::services::dashboard_service::DashboardService;
    use homesim_app::services::telemetry_service::TelemetryService;
    use homesim_app::session_store::InMemorySessionStore;
    use homesim_domain::error::TelemetryError;
    use homesim_domain::telemetry::{TelemetryPayload, TelemetryReceipt};
    use http_body_util::BodyExt;
    use std::future::Future;
    use std::time::Duration;
    use tower::ServiceExt;

    /// Sink that answers every payload with a fixed outcome.
    pub(crate) struct StubSink {
        pub(crate) accept: bool,
    }

    impl TelemetrySink for StubSink {
        fn publish(
            &self,
            _payload: TelemetryPayload,
        ) -> impl Future<Output = Result<TelemetryReceipt, TelemetryError>> + Send {
            let result = if self.accept {
                Ok(TelemetryReceipt {
                    entry: "17".to_string(),
                })
            } else {
                Err(TelemetryError::Rejected {
                    status: 200,
                    body: "0".to_string(),
                })
            };
            async { result }
        }
    }

    pub(crate) fn test_app(accept: bool) -> Router {
        build(AppState::new(
            DashboardService::new(InMemorySessionStore::new(Duration::from_secs(1800))),
            TelemetryService::new(StubSink { accept }, true),
            PageSettings::default(),
        ))
    }

    pub(crate) async fn body_text(response: axum::response::Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let response = test_app(true)
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "OK");
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_route() {
        let response = test_app(true)
            .oneshot(
                Request::builder()
                    .uri("/nope")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
