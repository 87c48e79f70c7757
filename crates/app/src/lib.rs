//! # homesim-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `SessionStore` — load & save per-visitor sessions
//!   - `TelemetrySink` — forward a registry snapshot to a telemetry endpoint
//! - Define **driving/inbound ports** as use-case structs:
//!   - `DashboardService` — open a session, switch devices, flash notices
//!   - `TelemetryService` — send the current snapshot, turn the outcome into a notice
//! - Provide **in-process infrastructure** (session store) that doesn't need IO
//!
//! ## Dependency rule
//! Depends on `homesim-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
pub mod session_store;
