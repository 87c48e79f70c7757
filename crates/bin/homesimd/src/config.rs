//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `homesim.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::time::Duration;

use homesim_adapter_http_axum::state::PageSettings;
use homesim_adapter_thingspeak::ThingSpeakConfig;
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Dashboard page settings.
    pub dashboard: DashboardConfig,
    /// Visitor session settings.
    pub session: SessionConfig,
    /// ThingSpeak endpoint settings.
    pub thingspeak: ThingSpeakConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Integration toggles.
    pub integrations: IntegrationsConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Dashboard page configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Page title.
    pub title: String,
    /// Auto-reload interval in seconds; `0` disables it.
    pub refresh_seconds: u32,
}

/// Session lifetime configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Idle time after which a session ends and its registry is dropped.
    pub idle_timeout_secs: u64,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Per-integration toggles.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct IntegrationsConfig {
    /// Enable forwarding snapshots to ThingSpeak.
    pub thingspeak_enabled: bool,
}

impl Config {
    /// Load configuration from `homesim.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("homesim.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("HOMESIM_HOST") {
            self.server.host = val;
        }
        if let Ok(val) = std::env::var("HOMESIM_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("HOMESIM_BIND") {
            if let Some((host, port)) = val.rsplit_once(':') {
                self.server.host = host.to_string();
                if let Ok(port) = port.parse() {
                    self.server.port = port;
                }
            }
        }
        if let Ok(val) = std::env::var("HOMESIM_THINGSPEAK_URL") {
            self.thingspeak.url = val;
        }
        if let Ok(val) = std::env::var("HOMESIM_THINGSPEAK_API_KEY") {
            self.thingspeak.api_key = val;
        }
        if let Ok(val) = std::env::var("HOMESIM_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.thingspeak.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "thingspeak.timeout_secs must be non-zero".to_string(),
            ));
        }
        if self.session.idle_timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "session.idle_timeout_secs must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Return the session idle timeout.
    #[must_use]
    pub fn session_idle_timeout(&self) -> Duration {
        Duration::from_secs(self.session.idle_timeout_secs)
    }

    /// Return the page settings handed to the HTTP adapter.
    #[must_use]
    pub fn page_settings(&self) -> PageSettings {
        PageSettings {
            title: self.dashboard.title.clone(),
            refresh_seconds: self.dashboard.refresh_seconds,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8501,
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        let page = PageSettings::default();
        Self {
            title: page.title,
            refresh_seconds: page.refresh_seconds,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            idle_timeout_secs: 30 * 60,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "homesimd=info,homesim=info,tower_http=debug".to_string(),
        }
    }
}

impl Default for IntegrationsConfig {
    fn default() -> Self {
        Self {
            thingspeak_enabled: true,
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
