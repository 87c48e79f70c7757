//! # homesim-adapter-thingspeak
//!
//! Telemetry adapter — forwards device snapshots to a
//! [ThingSpeak](https://thingspeak.com) channel.
//!
//! ## Responsibilities
//! - Implement the `TelemetrySink` port with a single HTTP `GET` per send
//! - Encode the payload as `api_key` + `field1..fieldN` query parameters
//! - Apply a bounded request timeout; never retry
//!
//! ## Dependency rule
//! Same as other adapters: depends on `homesim-app` and `homesim-domain`.

pub mod client;
pub mod config;
pub mod error;

pub use client::ThingSpeakClient;
pub use config::ThingSpeakConfig;
pub use error::ThingSpeakError;
