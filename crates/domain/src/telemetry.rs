//! Telemetry payloads — the numbered-field view of a registry snapshot.
//!
//! Each device is assigned `field1`, `field2`, … in registry order and its
//! powered flag is encoded as `0` or `1`. The payload is computed at send
//! time and never stored.

use serde::Serialize;

use crate::error::TelemetryError;
use crate::registry::DeviceRegistry;

/// A single numbered field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TelemetryField {
    /// 1-based position in the registry.
    pub index: usize,
    pub device: &'static str,
    /// `1` when powered, `0` otherwise.
    pub value: u8,
}

impl TelemetryField {
    /// Query parameter name, e.g. `field3`.
    #[must_use]
    pub fn key(&self) -> String {
        format!("field{}", self.index)
    }
}

/// All fields derived from one registry snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TelemetryPayload {
    fields: Vec<TelemetryField>,
}

impl TelemetryPayload {
    /// Encode a registry snapshot.
    #[must_use]
    pub fn from_registry(registry: &DeviceRegistry) -> Self {
        let fields = registry
            .entries()
            .iter()
            .enumerate()
            .map(|(idx, entry)| TelemetryField {
                index: idx + 1,
                device: entry.name,
                value: u8::from(entry.powered),
            })
            .collect();
        Self { fields }
    }

    #[must_use]
    pub fn fields(&self) -> &[TelemetryField] {
        &self.fields
    }

    /// `(fieldN, value)` pairs ready to be encoded as query parameters.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(String, u8)> {
        self.fields
            .iter()
            .map(|field| (field.key(), field.value))
            .collect()
    }
}

/// Acknowledgement returned by the endpoint for an accepted update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TelemetryReceipt {
    /// Trimmed response body; ThingSpeak returns the new entry id here.
    pub entry: String,
}

/// Decide whether an endpoint response means the update was accepted.
///
/// Accepted means status `200` and a trimmed body other than `"0"`.
///
/// # Errors
///
/// Returns [`TelemetryError::Rejected`] for any other status or for the
/// literal body `"0"`.
pub fn evaluate_response(status: u16, body: &str) -> Result<TelemetryReceipt, TelemetryError> {
    let body = body.trim();
    if status == 200 && body != "0" {
        Ok(TelemetryReceipt {
            entry: body.to_string(),
        })
    } else {
        Err(TelemetryError::Rejected {
            status,
            body: body.to_string(),
        })
    }
}
