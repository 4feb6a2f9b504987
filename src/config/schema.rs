//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the service.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Default upstream endpoint for holiday lookups.
pub const CALENDARIFIC_URL: &str = "https://calendarific.com/api/v2/holidays";

/// Environment variable holding the upstream API key.
pub const API_KEY_ENV: &str = "CALENDARIFIC_API_KEY";

/// Environment variable overriding the listener bind address.
pub const BIND_ADDRESS_ENV: &str = "HOLIDAYS_BIND_ADDRESS";

/// Root configuration for the holiday service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServiceConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Upstream holiday API settings.
    pub upstream: UpstreamConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl ServiceConfig {
    /// Apply settings that only come from the process environment.
    ///
    /// `CALENDARIFIC_API_KEY` is read exactly once here. An unset variable
    /// leaves the key empty, which the holiday endpoint reports as a 500.
    pub fn with_env_overrides(mut self) -> Self {
        self.upstream.api_key = std::env::var(API_KEY_ENV).unwrap_or_default();
        if let Ok(addr) = std::env::var(BIND_ADDRESS_ENV) {
            if !addr.is_empty() {
                self.listener.bind_address = addr;
            }
        }
        self
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:5000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:5000".to_string(),
        }
    }
}

/// Upstream holiday API configuration.
#[derive(Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Holidays endpoint URL.
    pub base_url: String,

    /// Timeout for a single upstream call in seconds.
    pub timeout_secs: u64,

    /// API key. Environment only, never read from or written to files.
    #[serde(skip)]
    pub api_key: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: CALENDARIFIC_URL.to_string(),
            timeout_secs: 10,
            api_key: String::new(),
        }
    }
}

// Keeps the key out of `{:?}` output.
impl std::fmt::Debug for UpstreamConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpstreamConfig")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("api_key_configured", &!self.api_key.is_empty())
            .finish()
    }
}

/// Timeout configuration for inbound requests.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Serve the Prometheus scrape endpoint at `/metrics`.
    pub metrics_enabled: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: true,
        }
    }
}
