//! Client configuration
//!
//! Loads connection settings from environment variables.

use serde::Deserialize;
use std::env;

/// Client configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the home instance, e.g. `https://chat.example.org`
    pub instance: String,

    /// Username for automatic login
    #[serde(default)]
    pub username: Option<String>,

    /// Password for automatic login
    #[serde(default)]
    pub password: Option<String>,

    /// Gateway heartbeat cadence
    #[serde(default = "default_heartbeat_interval_ms")]
    pub heartbeat_interval_ms: u64,

    /// Reconnect attempts before giving up on the gateway
    #[serde(default = "default_max_reconnect_attempts")]
    pub max_reconnect_attempts: u32,
}

// Default value functions
fn default_heartbeat_interval_ms() -> u64 {
    4500
}

fn default_max_reconnect_attempts() -> u32 {
    5
}

impl ClientConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if `QUILL_INSTANCE` is missing.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Ok(Self {
            instance: env::var("QUILL_INSTANCE")
                .map_err(|_| ConfigError::MissingVar("QUILL_INSTANCE"))?,
            username: env::var("QUILL_USERNAME").ok(),
            password: env::var("QUILL_PASSWORD").ok(),
            heartbeat_interval_ms: env::var("QUILL_HEARTBEAT_INTERVAL_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or_else(default_heartbeat_interval_ms),
            max_reconnect_attempts: env::var("QUILL_MAX_RECONNECT_ATTEMPTS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or_else(default_max_reconnect_attempts),
        })
    }

    /// Derive the gateway WebSocket URL from the instance URL
    ///
    /// # Errors
    /// Returns an error if the instance URL has no http(s) scheme.
    pub fn gateway_url(&self) -> Result<String, ConfigError> {
        if let Some(rest) = self.instance.strip_prefix("http://") {
            Ok(format!("ws://{rest}"))
        } else if let Some(rest) = self.instance.strip_prefix("https://") {
            Ok(format!("wss://{rest}"))
        } else {
            Err(ConfigError::InvalidInstanceUrl(self.instance.clone()))
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid instance url: {0}")]
    InvalidInstanceUrl(String),
}
