//! API key types for Atlas configuration.
//!
//! Responsibilities:
//! - Hold the programmatic API key pair (public key + private key).
//! - Handle serialization of secret values.
//! - Provide an obfuscated rendering safe for logs and CLI output.
//!
//! Does NOT handle:
//! - The digest authentication handshake (see client crate).
//!
//! Invariants:
//! - The private key is always a `secrecy::SecretString`.
//! - `Debug` output never contains the private key.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Module for serializing SecretString as strings.
pub(crate) mod secret_string {
    use secrecy::{ExposeSecret, SecretString};
    use serde::{Deserialize as DeserializeTrait, Serialize as SerializeTrait};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        secret.expose_secret().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(SecretString::new(s.into()))
    }
}

/// Number of trailing characters left visible by [`obfuscate`].
const VISIBLE_SUFFIX: usize = 4;

/// Replace all but the last four characters of `value` with `*`.
///
/// Values of four characters or fewer are fully masked.
pub fn obfuscate(value: &str) -> String {
    let count = value.chars().count();
    if count <= VISIBLE_SUFFIX {
        return "*".repeat(count);
    }
    let masked = count - VISIBLE_SUFFIX;
    let mut out = "*".repeat(masked);
    out.extend(value.chars().skip(masked));
    out
}

/// Programmatic API key pair used for HTTP digest authentication.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiKeyPair {
    /// Public key (digest username).
    pub public_key: String,
    /// Private key (digest password).
    #[serde(with = "secret_string")]
    pub private_key: SecretString,
}

impl ApiKeyPair {
    pub fn new(public_key: impl Into<String>, private_key: impl Into<String>) -> Self {
        Self {
            public_key: public_key.into(),
            private_key: SecretString::new(private_key.into().into()),
        }
    }

    /// Render the pair for display with the private key masked.
    pub fn obfuscated(&self) -> String {
        format!(
            "{}:{}",
            self.public_key,
            obfuscate(self.private_key.expose_secret())
        )
    }
}
