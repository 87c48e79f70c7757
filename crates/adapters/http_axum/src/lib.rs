//! # homesim-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **server-side-rendered HTML dashboard** that works with
//!   **zero JavaScript**: device toggles, room panels, status table and the
//!   telemetry button are plain HTML forms
//! - Serve a small **JSON API** for programmatic access
//!   (`/api/devices`, `/api/telemetry`)
//! - Bind every request to a visitor session through a cookie
//! - Map application results into HTTP responses (JSON or HTML)
//!
//! ## No-JS dashboard approach
//! - Every page is rendered server-side as complete HTML.
//! - Controls are `<form>` elements that POST back to the server and
//!   redirect (PRG pattern).
//! - Pending notices (telemetry outcome) are shown once on the next render.
//!
//! ## Dependency rule
//! Depends on `homesim-app` (for port traits and services) and
//! `homesim-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod dashboard;
pub mod error;
pub mod router;
pub mod session;
pub mod state;
