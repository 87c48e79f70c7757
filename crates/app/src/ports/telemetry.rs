//! Telemetry port — outbound delivery of registry snapshots.

use std::future::Future;

use homesim_domain::error::TelemetryError;
use homesim_domain::telemetry::{TelemetryPayload, TelemetryReceipt};

/// Delivers a telemetry payload to a remote endpoint.
///
/// A single attempt is made per call; implementations must not retry.
pub trait TelemetrySink {
    /// Send one payload and report whether the endpoint accepted it.
    fn publish(
        &self,
        payload: TelemetryPayload,
    ) -> impl Future<Output = Result<TelemetryReceipt, TelemetryError>> + Send;
}

impl<T: TelemetrySink + Send + Sync> TelemetrySink for std::sync::Arc<T> {
    fn publish(
        &self,
        payload: TelemetryPayload,
    ) -> impl Future<Output = Result<TelemetryReceipt, TelemetryError>> + Send {
        (**self).publish(payload)
    }
}
