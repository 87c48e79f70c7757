//! # homesim-domain
//!
//! Pure domain model for the homesim home automation simulator.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define the fixed **device catalog** (six simulated devices)
//! - Define the **device registry** (ordered name → powered flag mapping)
//! - Define the **presentation table** (icons, captions, room grouping)
//! - Define **telemetry payloads** and the response acceptance rule
//! - Define **sessions** and one-shot user **notices**
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod device;
pub mod presentation;
pub mod registry;
pub mod session;
pub mod telemetry;
