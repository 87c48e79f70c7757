//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use homesim_domain::error::{HomeSimError, TelemetryError, error_chain};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`HomeSimError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(HomeSimError);

impl From<HomeSimError> for ApiError {
    fn from(err: HomeSimError) -> Self {
        Self(err)
    }
}

impl From<TelemetryError> for ApiError {
    fn from(err: TelemetryError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            HomeSimError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            HomeSimError::Telemetry(TelemetryError::Disabled) => {
                (StatusCode::SERVICE_UNAVAILABLE, "telemetry is disabled".to_string())
            }
            HomeSimError::Telemetry(err) => {
                tracing::warn!(error = %error_chain(err), "telemetry error");
                (StatusCode::BAD_GATEWAY, error_chain(err))
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
