//! # Client configuration: `smartqueue.toml`
//!
//! Where the backend lives and how patiently the client talks to it. The web
//! crate embeds this file at build time.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "/api"       # user + queue service
//! timeout_ms = 10000
//! read_retries = 1        # extra attempts for failed GETs
//!
//! [eta]
//! base_url = "/"          # ETA tracking service
//! timeout_ms = 10000
//! read_retries = 0
//!
//! [dashboard]
//! tick_interval_secs = 30 # local countdown refresh, 0 to disable
//! ```
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`SmartQueueConfig`] | Top-level config with TOML (de)serialisation and the canonical filename. |
//! | [`EndpointConfig`] | One HTTP client root: base URL, request timeout, read retry count. |
//! | [`DashboardConfig`] | Dashboard behaviour: the local ETA tick interval. |
//!
//! Every field has a default, so a missing or empty file is the default
//! configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `smartqueue.toml`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SmartQueueConfig {
    #[serde(default = "EndpointConfig::api")]
    pub api: EndpointConfig,
    #[serde(default = "EndpointConfig::eta")]
    pub eta: EndpointConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

impl Default for SmartQueueConfig {
    fn default() -> Self {
        Self {
            api: EndpointConfig::api(),
            eta: EndpointConfig::eta(),
            dashboard: DashboardConfig::default(),
        }
    }
}

/// Settings for one HTTP client root.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EndpointConfig {
    pub base_url: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    #[serde(default)]
    pub read_retries: u32,
}

fn default_timeout_ms() -> u64 {
    10_000
}

impl EndpointConfig {
    /// Defaults for the user + queue service.
    pub fn api() -> Self {
        Self {
            base_url: "/api".to_string(),
            timeout_ms: default_timeout_ms(),
            read_retries: 1,
        }
    }

    /// Defaults for the ETA tracking service.
    pub fn eta() -> Self {
        Self {
            base_url: "/".to_string(),
            timeout_ms: default_timeout_ms(),
            read_retries: 0,
        }
    }

    /// Builder method to point at a different base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// Dashboard configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Seconds between local ETA recomputations. 0 disables the tick.
    #[serde(default = "default_tick_interval")]
    pub tick_interval_secs: u32,
}

fn default_tick_interval() -> u32 {
    30
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            tick_interval_secs: default_tick_interval(),
        }
    }
}

impl SmartQueueConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "smartqueue.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = SmartQueueConfig::from_toml("").unwrap();
        assert_eq!(config, SmartQueueConfig::default());
        assert_eq!(config.api.base_url, "/api");
        assert_eq!(config.api.read_retries, 1);
        assert_eq!(config.eta.base_url, "/");
        assert_eq!(config.eta.read_retries, 0);
        assert_eq!(config.dashboard.tick_interval_secs, 30);
    }

    #[test]
    fn test_partial_sections() {
        let config = SmartQueueConfig::from_toml(
            r#"
            [api]
            base_url = "https://queue.example.com/api"

            [dashboard]
            tick_interval_secs = 0
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://queue.example.com/api");
        assert_eq!(config.api.timeout_ms, 10_000);
        assert_eq!(config.api.read_retries, 0);
        assert_eq!(config.eta, EndpointConfig::eta());
        assert_eq!(config.dashboard.tick_interval_secs, 0);
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = SmartQueueConfig {
            eta: EndpointConfig::eta().with_base_url("http://eta:9000"),
            ..SmartQueueConfig::default()
        };
        let text = config.to_toml().unwrap();
        assert_eq!(SmartQueueConfig::from_toml(&text).unwrap(), config);
    }
}
