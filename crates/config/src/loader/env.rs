//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse `ATLAS_*` environment variables.
//! - Apply environment variable values to a ConfigLoader instance.
//!
//! Does NOT handle:
//! - Loading from profile files (see profile.rs).
//! - .env file loading (handled by ConfigLoader::load_dotenv).
//!
//! Invariants:
//! - Environment variables take precedence over profile settings.
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - The primary key variables win over their legacy aliases.

use secrecy::SecretString;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::constants::{
    ENV_BASE_URL, ENV_FILE_TIMEOUT, ENV_GROUP, ENV_PRIVATE_KEY, ENV_PRIVATE_KEY_LEGACY,
    ENV_PUBLIC_KEY, ENV_PUBLIC_KEY_LEGACY, ENV_TIMEOUT,
};

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// First non-empty value among `keys`, in order.
fn first_env_var(keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| env_var_or_none(key))
}

fn parse_seconds(var: &str, raw: &str) -> Result<Duration, ConfigError> {
    let secs: u64 = raw.parse().map_err(|_| ConfigError::InvalidValue {
        var: var.to_string(),
        message: "must be a whole number of seconds".to_string(),
    })?;
    Ok(Duration::from_secs(secs))
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(url) = env_var_or_none(ENV_BASE_URL) {
        loader.set_base_url(Some(url));
    }
    if let Some(public_key) = first_env_var(&[ENV_PUBLIC_KEY, ENV_PUBLIC_KEY_LEGACY]) {
        loader.set_public_key(Some(public_key));
    }
    if let Some(private_key) = first_env_var(&[ENV_PRIVATE_KEY, ENV_PRIVATE_KEY_LEGACY]) {
        loader.set_private_key(Some(SecretString::new(private_key.into())));
    }
    if let Some(group) = env_var_or_none(ENV_GROUP) {
        loader.set_group_id(Some(group));
    }
    if let Some(timeout) = env_var_or_none(ENV_TIMEOUT) {
        loader.set_timeout(Some(parse_seconds(ENV_TIMEOUT, &timeout)?));
    }
    if let Some(timeout) = env_var_or_none(ENV_FILE_TIMEOUT) {
        loader.set_file_timeout(Some(parse_seconds(ENV_FILE_TIMEOUT, &timeout)?));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_seconds() {
        assert_eq!(
            parse_seconds("ATLAS_TIMEOUT", "15").unwrap(),
            Duration::from_secs(15)
        );
        let err = parse_seconds("ATLAS_TIMEOUT", "soon").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { var, .. } if var == "ATLAS_TIMEOUT"));
    }
}
