//! Telemetry service — forwards the current registry to the telemetry endpoint.

use homesim_domain::error::{TelemetryError, error_chain};
use homesim_domain::registry::DeviceRegistry;
use homesim_domain::session::Notice;
use homesim_domain::telemetry::{TelemetryPayload, TelemetryReceipt};

use crate::ports::TelemetrySink;

/// Application service for sending registry snapshots.
///
/// Sending is triggered only by explicit user action and never retried.
/// The outcome is returned as a value; callers decide how to surface it.
pub struct TelemetryService<T> {
    sink: T,
    enabled: bool,
}

impl<T: TelemetrySink + Send + Sync> TelemetryService<T> {
    /// Create a new service delivering through `sink`.
    pub fn new(sink: T, enabled: bool) -> Self {
        Self { sink, enabled }
    }

    /// Whether sending is switched on.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Encode `registry` and send it in a single attempt.
    ///
    /// # Errors
    ///
    /// Returns [`TelemetryError::Disabled`] when switched off, or whatever
    /// rejection / transport error the sink reports.
    #[tracing::instrument(skip_all, fields(powered = registry.powered_count()))]
    pub async fn send_snapshot(
        &self,
        registry: &DeviceRegistry,
    ) -> Result<TelemetryReceipt, TelemetryError> {
        if !self.enabled {
            return Err(TelemetryError::Disabled);
        }

        let payload = TelemetryPayload::from_registry(registry);
        match self.sink.publish(payload).await {
            Ok(receipt) => {
                tracing::info!(entry = %receipt.entry, "telemetry accepted");
                Ok(receipt)
            }
            Err(err) => {
                tracing::warn!(error = %error_chain(&err), "telemetry failed");
                Err(err)
            }
        }
    }

    /// Describe the outcome of [`send_snapshot`](Self::send_snapshot) for the user.
    #[must_use]
    pub fn notice_for(result: &Result<TelemetryReceipt, TelemetryError>) -> Notice {
        match result {
            Ok(receipt) if receipt.entry.is_empty() => Notice::success("Data sent to telemetry!"),
            Ok(receipt) => Notice::success(format!(
                "Data sent to telemetry! (entry {})",
                receipt.entry
            )),
            Err(TelemetryError::Disabled) => Notice::warning("Telemetry is disabled."),
            Err(TelemetryError::Rejected { status, body }) => Notice::warning(format!(
                "Failed to send to telemetry (status {status}, response \"{body}\")."
            )),
            Err(err @ TelemetryError::Transport(_)) => {
                Notice::error(format!("Error sending data: {}", error_chain(err)))
            }
        }
    }
}
