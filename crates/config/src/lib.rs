//! Configuration management for the Atlas Admin API client.
//!
//! This crate provides types and loaders for the Atlas programmatic API keys,
//! the default project and connection settings, sourced from environment
//! variables, `.env` files and JSON profile files.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{
    ConfigError, ConfigLoader, default_config_path, env_var_or_none, read_config_file,
};
pub use types::{ApiKeyPair, Config, ConfigFile, ConnectionConfig, ProfileConfig, obfuscate};
