//! Shared application state for axum handlers.

use std::sync::Arc;

use homesim_app::ports::{SessionStore, TelemetrySink};
use homesim_app::services::dashboard_service::DashboardService;
use homesim_app::services::telemetry_service::TelemetryService;

/// Static page settings.
#[derive(Debug, Clone)]
pub struct PageSettings {
    /// Title shown in the browser tab and page heading.
    pub title: String,
    /// Auto-reload interval for the dashboard; `0` disables it.
    pub refresh_seconds: u32,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            title: "IoT Home Automation Dashboard".to_string(),
            refresh_seconds: 0,
        }
    }
}

/// Application state shared across all axum handlers.
///
/// Generic over the session store and telemetry sink to avoid dynamic
/// dispatch. `Clone` is implemented manually so the underlying types
/// themselves do not need to be `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<S, T> {
    /// Session-scoped device control.
    pub dashboard: Arc<DashboardService<S>>,
    /// Snapshot forwarding.
    pub telemetry: Arc<TelemetryService<T>>,
    /// Title and refresh settings.
    pub page: Arc<PageSettings>,
}

impl<S, T> Clone for AppState<S, T> {
    fn clone(&self) -> Self {
        Self {
            dashboard: Arc::clone(&self.dashboard),
            telemetry: Arc::clone(&self.telemetry),
            page: Arc::clone(&self.page),
        }
    }
}

impl<S, T> AppState<S, T>
where
    S: SessionStore + Send + Sync + 'static,
    T: TelemetrySink + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        dashboard: DashboardService<S>,
        telemetry: TelemetryService<T>,
        page: PageSettings,
    ) -> Self {
        Self {
            dashboard: Arc::new(dashboard),
            telemetry: Arc::new(telemetry),
            page: Arc::new(page),
        }
    }
}
