//! ThingSpeak integration configuration.

use serde::Deserialize;

/// Configuration for the ThingSpeak telemetry endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ThingSpeakConfig {
    /// Full URL of the channel update endpoint.
    pub url: String,
    /// Channel write API key, sent as the `api_key` query parameter.
    pub api_key: String,
    /// Upper bound for the whole request, in seconds.
    pub timeout_secs: u64,
}

impl Default for ThingSpeakConfig {
    fn default() -> Self {
        Self {
            url: "https://api.thingspeak.com/update".to_string(),
            api_key: String::new(),
            timeout_secs: 10,
        }
    }
}
