//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`HomeSimError`] via `#[from]`.

use std::error::Error as StdError;

/// Top-level error shared by the domain and application layers.
#[derive(Debug, thiserror::Error)]
pub enum HomeSimError {
    /// A lookup referenced something outside the fixed catalog.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// Forwarding a snapshot to the telemetry endpoint failed.
    #[error("telemetry error")]
    Telemetry(#[from] TelemetryError),
}

/// A named item does not exist.
///
/// For the device registry this is the `KeyNotFound` condition: the name is
/// not one of the six registered devices.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} '{id}' not found")]
pub struct NotFoundError {
    /// Kind of item that was looked up (e.g. `"Device"`).
    pub entity: &'static str,
    /// The key that was requested.
    pub id: String,
}

/// Failure while sending a registry snapshot to the telemetry endpoint.
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// Telemetry forwarding is switched off in configuration.
    #[error("telemetry is disabled")]
    Disabled,

    /// The endpoint could not be reached or the exchange broke down
    /// (timeout, DNS failure, connection refused, truncated body).
    #[error("telemetry transport error")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// The endpoint answered but did not accept the update.
    #[error("telemetry rejected (status {status}): {body}")]
    Rejected {
        /// HTTP status code returned by the endpoint.
        status: u16,
        /// Trimmed response body.
        body: String,
    },
}

impl TelemetryError {
    /// Wrap any transport-level error.
    pub fn transport(err: impl StdError + Send + Sync + 'static) -> Self {
        Self::Transport(Box::new(err))
    }
}

/// Render an error and all of its sources as `outer: inner: root`.
///
/// Transport errors from HTTP clients usually hide the interesting part
/// (e.g. "Connection refused") a few levels down the source chain.
#[must_use]
pub fn error_chain(err: &(dyn StdError + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
