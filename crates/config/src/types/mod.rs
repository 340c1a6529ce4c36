//! Configuration type definitions for the Atlas client.
//!
//! Responsibilities:
//! - Define configuration types for API keys, connections and profiles.
//! - Provide serialization helpers for sensitive types (secrets, durations).
//!
//! Does NOT handle:
//! - Configuration loading from files or environment variables (see `loader` module).
//! - Actual network connections or authentication flows (see client crate).
//!
//! Invariants:
//! - All secret types use `secrecy::SecretString` to prevent accidental logging.

mod auth;
pub(crate) mod connection;
mod profile;

pub use auth::{ApiKeyPair, obfuscate};
pub use connection::{Config, ConnectionConfig};
pub use profile::{ConfigFile, ProfileConfig};
