//! Profile configuration types.
//!
//! Responsibilities:
//! - Define `ProfileConfig` for storing named connection profiles.
//! - Define `ConfigFile`, the on-disk JSON document holding the profiles.
//!
//! Does NOT handle:
//! - Profile loading or merging (see `loader` module).
//!
//! Invariants:
//! - All profile fields are optional to allow partial profile definitions.
//! - Unknown keys in the config file are ignored.

use crate::types::auth::secret_string;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

mod optional_secret {
    use secrecy::SecretString;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(secret: &Option<SecretString>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match secret {
            Some(s) => super::secret_string::serialize(s, serializer),
            None => Option::<String>::None.serialize(serializer),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<SecretString>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<String>::deserialize(deserializer)?.map(|s| SecretString::new(s.into())))
    }
}

/// Profile configuration for storing named connection profiles.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    /// Base URL of the Atlas service
    pub base_url: Option<String>,
    /// Programmatic API public key
    pub public_key: Option<String>,
    /// Programmatic API private key
    #[serde(with = "optional_secret", skip_serializing_if = "Option::is_none")]
    pub private_key: Option<SecretString>,
    /// Default project (group) id
    pub group_id: Option<String>,
    /// Request timeout in seconds
    pub timeout_seconds: Option<u64>,
    /// Log download timeout in seconds
    pub file_timeout_seconds: Option<u64>,
}

/// JSON document stored at the config path.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub profiles: BTreeMap<String, ProfileConfig>,
}
