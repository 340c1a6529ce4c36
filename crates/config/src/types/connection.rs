//! Connection configuration types for the Atlas client.
//!
//! Responsibilities:
//! - Define connection settings (base URL, request and download timeouts).
//! - Define the main `Config` structure combining connection, keys and project.
//! - Provide serialization helpers for `Duration`.
//!
//! Does NOT handle:
//! - Configuration loading from files/env (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - All duration fields are serialized as seconds (integers).

use crate::constants::{DEFAULT_BASE_URL, DEFAULT_FILE_TIMEOUT_SECS, DEFAULT_TIMEOUT_SECS};
use crate::types::auth::ApiKeyPair;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Module for serializing Duration as seconds (integer).
mod duration_seconds {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

/// Connection configuration for the Atlas Admin API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Base URL of the Atlas service (e.g., https://cloud.mongodb.com)
    pub base_url: String,
    /// Timeout for regular API calls (serialized as seconds)
    #[serde(with = "duration_seconds")]
    pub timeout: Duration,
    /// Timeout for log file downloads (serialized as seconds)
    #[serde(with = "duration_seconds")]
    pub file_timeout: Duration,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            file_timeout: Duration::from_secs(DEFAULT_FILE_TIMEOUT_SECS),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Connection settings
    pub connection: ConnectionConfig,
    /// Programmatic API keys
    pub keys: ApiKeyPair,
    /// Default project (group) id for project-scoped calls
    pub group_id: Option<String>,
}

impl Config {
    /// Build a config against the public Atlas endpoint with default timeouts.
    pub fn with_keys(keys: ApiKeyPair) -> Self {
        Self {
            connection: ConnectionConfig::default(),
            keys,
            group_id: None,
        }
    }
}
