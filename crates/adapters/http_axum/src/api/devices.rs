//! JSON REST handlers for the caller's device registry.

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use homesim_app::ports::{SessionStore, TelemetrySink};
use homesim_domain::registry::{DeviceEntry, DeviceRegistry};

use crate::error::ApiError;
use crate::session::{SessionCookie, WithSession};
use crate::state::AppState;

/// Request body for switching a device.
#[derive(Deserialize)]
pub struct UpdateDeviceRequest {
    pub powered: bool,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<DeviceRegistry>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the update endpoint.
pub enum UpdateResponse {
    Ok(Json<DeviceEntry>),
}

impl IntoResponse for UpdateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/devices` — every device in registry order.
pub async fn list<S, T>(
    State(state): State<AppState<S, T>>,
    session: SessionCookie,
) -> WithSession<ListResponse>
where
    S: SessionStore + Send + Sync + 'static,
    T: TelemetrySink + Send + Sync + 'static,
{
    let current = state.dashboard.open(session.id()).await;
    session.respond(ListResponse::Ok(Json(current.registry)))
}

/// `PUT /api/devices/:name` — switch one device.
pub async fn update<S, T>(
    State(state): State<AppState<S, T>>,
    session: SessionCookie,
    Path(name): Path<String>,
    Json(req): Json<UpdateDeviceRequest>,
) -> Result<WithSession<UpdateResponse>, ApiError>
where
    S: SessionStore + Send + Sync + 'static,
    T: TelemetrySink + Send + Sync + 'static,
{
    let updated = state
        .dashboard
        .set_power(session.id(), &name, req.powered)
        .await?;
    let entry = updated.registry.entry(&name)?;

    Ok(session.respond(UpdateResponse::Ok(Json(entry))))
}

#[cfg(test)]
mod tests {
    use crate::router::tests::{body_text, test_app};
    use crate::session::COOKIE_NAME;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use homesim_domain::id::SessionId;
    use tower::ServiceExt;

    fn put(cookie: &str, path: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("PUT")
            .uri(path)
            .header(header::COOKIE, cookie)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn should_list_six_devices_in_order() {
        let response = test_app(true)
            .oneshot(
                Request::builder()
                    .uri("/api/devices")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        let names: Vec<&str> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|entry| entry["name"].as_str().unwrap())
            .collect();
        assert_eq!(
            names,
            vec![
                "Living Room Light",
                "Ceiling Fan",
                "Air Conditioner",
                "Main Door Lock",
                "Garden Sprinkler",
                "Water Pump",
            ]
        );
    }

    #[tokio::test]
    async fn should_update_device_by_percent_encoded_name() {
        let app = test_app(true);
        let cookie = format!("{COOKIE_NAME}={}", SessionId::new());

        let response = app
            .clone()
            .oneshot(put(&cookie, "/api/devices/Water%20Pump", r#"{"powered":true}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(json["name"], "Water Pump");
        assert_eq!(json["powered"], true);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/devices")
                    .header(header::COOKIE, &cookie)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(json[5]["powered"], true);
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_device() {
        let cookie = format!("{COOKIE_NAME}={}", SessionId::new());
        let response = test_app(true)
            .oneshot(put(&cookie, "/api/devices/Toaster", r#"{"powered":true}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(json["error"], "Device 'Toaster' not found");
    }
}
