//! Error types for configuration loading.
//!
//! Invariants:
//! - All error variants include context for debugging (variable names, paths, etc.).
//! - Dotenv errors NEVER include raw .env line contents to prevent secret leakage.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    #[error("Base URL is empty. Set ATLAS_BASE_URL or remove it to use the default.")]
    MissingBaseUrl,

    #[error(
        "API public key is required. Pass --publickey or set ATLAS_PUBLIC_KEY (ATLAS_USER is also accepted)."
    )]
    MissingPublicKey,

    #[error(
        "API private key is required. Pass --privatekey or set ATLAS_PRIVATE_KEY (ATLAS_KEY is also accepted)."
    )]
    MissingPrivateKey,

    #[error("Unable to determine config directory: {0}")]
    ConfigDirUnavailable(String),

    #[error("Failed to read config file at {path}")]
    ConfigFileRead { path: PathBuf },

    #[error("Failed to parse config file at {path}")]
    ConfigFileParse { path: PathBuf },

    #[error("Profile '{0}' not found in config file")]
    ProfileNotFound(String),

    #[error("invalid timeout: {message}")]
    InvalidTimeout { message: String },

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// SAFETY: only the byte index of the failure is kept, never the line.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}

impl ConfigError {
    /// Whether the error means credentials were not supplied at all.
    pub fn is_missing_credentials(&self) -> bool {
        matches!(self, Self::MissingPublicKey | Self::MissingPrivateKey)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_messages_name_flag_and_variable() {
        let msg = ConfigError::MissingPublicKey.to_string();
        assert!(msg.contains("--publickey"));
        assert!(msg.contains("ATLAS_PUBLIC_KEY"));

        let msg = ConfigError::MissingPrivateKey.to_string();
        assert!(msg.contains("--privatekey"));
        assert!(msg.contains("ATLAS_PRIVATE_KEY"));
    }

    #[test]
    fn test_is_missing_credentials() {
        assert!(ConfigError::MissingPublicKey.is_missing_credentials());
        assert!(ConfigError::MissingPrivateKey.is_missing_credentials());
        assert!(!ConfigError::MissingBaseUrl.is_missing_credentials());
    }

    #[test]
    fn test_dotenv_parse_error_hides_content() {
        let msg = ConfigError::DotenvParse { error_index: 12 }.to_string();
        assert!(msg.contains("position 12"));
        assert!(msg.contains("DOTENV_DISABLED"));
    }
}
