//! HTTP client for the ThingSpeak channel update endpoint.

use std::future::Future;
use std::time::Duration;

use homesim_app::ports::TelemetrySink;
use homesim_domain::error::TelemetryError;
use homesim_domain::telemetry::{TelemetryPayload, TelemetryReceipt, evaluate_response};

use crate::config::ThingSpeakConfig;
use crate::error::ThingSpeakError;

/// Sends registry snapshots to ThingSpeak's `update` endpoint.
#[derive(Debug, Clone)]
pub struct ThingSpeakClient {
    http: reqwest::Client,
    url: String,
    api_key: String,
}

impl ThingSpeakClient {
    /// Build a client with the configured endpoint, key and timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ThingSpeakError::Client`] if the HTTP client cannot be
    /// constructed.
    pub fn new(config: &ThingSpeakConfig) -> Result<Self, ThingSpeakError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(ThingSpeakError::Client)?;

        Ok(Self {
            http,
            url: config.url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    async fn send(&self, payload: &TelemetryPayload) -> Result<(u16, String), ThingSpeakError> {
        let response = self
            .http
            .get(&self.url)
            .query(&[("api_key", self.api_key.as_str())])
            .query(&payload.query_pairs())
            .send()
            .await
            .map_err(ThingSpeakError::request)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(ThingSpeakError::request)?;
        Ok((status, body))
    }
}

impl TelemetrySink for ThingSpeakClient {
    fn publish(
        &self,
        payload: TelemetryPayload,
    ) -> impl Future<Output = Result<TelemetryReceipt, TelemetryError>> + Send {
        async move {
            let (status, body) = self.send(&payload).await?;
            tracing::debug!(status, body = body.trim(), "ThingSpeak responded");
            evaluate_response(status, &body)
        }
    }
}
