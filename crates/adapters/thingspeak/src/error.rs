//! ThingSpeak adapter error types.

use homesim_domain::error::TelemetryError;

/// Errors specific to the ThingSpeak adapter.
#[derive(Debug, thiserror::Error)]
pub enum ThingSpeakError {
    /// The HTTP client could not be constructed (e.g. TLS backend failure).
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    /// The request failed before a complete response was read.
    #[error("request to ThingSpeak failed")]
    Request(#[source] reqwest::Error),
}

impl ThingSpeakError {
    /// Wrap a failed request, dropping its URL.
    ///
    /// The URL carries the channel write key in its query string and must
    /// never reach a notice, an API body or a log line.
    pub fn request(err: reqwest::Error) -> Self {
        Self::Request(err.without_url())
    }

    /// Convert into a [`TelemetryError::Transport`] for propagation across
    /// the port boundary.
    pub fn into_telemetry(self) -> TelemetryError {
        TelemetryError::transport(self)
    }
}

impl From<ThingSpeakError> for TelemetryError {
    fn from(err: ThingSpeakError) -> Self {
        err.into_telemetry()
    }
}
