//! Profile file loading for configuration.
//!
//! Responsibilities:
//! - Resolve the config file location (explicit path, `ATLAS_CONFIG_PATH`, or platform default).
//! - Load a named profile from the JSON config file and apply it to a ConfigLoader.
//!
//! Invariants:
//! - Profile settings are applied before environment variables (env vars take precedence).
//! - Missing profiles are recorded for later error handling in build().

use anyhow::Context;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::builder::ConfigLoader;
use super::env::env_var_or_none;
use super::error::ConfigError;
use crate::constants::ENV_CONFIG_PATH;
use crate::types::{ConfigFile, ProfileConfig};

/// Returns the default path to the configuration file.
///
/// - Linux: `~/.config/atlas-client/config.json`
/// - macOS: `~/Library/Application Support/atlas-client/config.json`
/// - Windows: `%AppData%\atlas-client\config.json`
pub fn default_config_path() -> Result<PathBuf, anyhow::Error> {
    let proj_dirs = directories::ProjectDirs::from("", "", "atlas-client")
        .context("Failed to determine project directories")?;

    Ok(proj_dirs.config_dir().join("config.json"))
}

fn resolve_config_path(loader: &ConfigLoader) -> Result<PathBuf, ConfigError> {
    if let Some(path) = loader.config_path() {
        return Ok(path.clone());
    }
    if let Some(path) = env_var_or_none(ENV_CONFIG_PATH) {
        return Ok(PathBuf::from(path));
    }
    default_config_path().map_err(|e| ConfigError::ConfigDirUnavailable(e.to_string()))
}

/// Read and parse the config file at `path`.
pub fn read_config_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|_| ConfigError::ConfigFileRead {
        path: path.to_path_buf(),
    })?;
    serde_json::from_str(&raw).map_err(|_| ConfigError::ConfigFileParse {
        path: path.to_path_buf(),
    })
}

/// Apply profile configuration from a profile file to the loader.
///
/// If the profile is not found, this records the missing profile name
/// for later error handling in `build()`.
pub fn apply_profile(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    let profile_name = match loader.profile_name() {
        Some(name) => name.clone(),
        None => return Ok(()),
    };

    let config_path = resolve_config_path(loader)?;
    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "config file not found");
        loader.set_profile_missing(Some(profile_name));
        return Ok(());
    }

    let file = read_config_file(&config_path)?;
    match file.profiles.get(&profile_name) {
        Some(profile) => {
            tracing::debug!(profile = %profile_name, "applying profile");
            apply_profile_config(loader, profile);
        }
        None => loader.set_profile_missing(Some(profile_name)),
    }
    Ok(())
}

fn apply_profile_config(loader: &mut ConfigLoader, profile: &ProfileConfig) {
    if let Some(url) = &profile.base_url {
        loader.set_base_url(Some(url.clone()));
    }
    if let Some(key) = &profile.public_key {
        loader.set_public_key(Some(key.clone()));
    }
    if let Some(key) = &profile.private_key {
        loader.set_private_key(Some(key.clone()));
    }
    if let Some(group) = &profile.group_id {
        loader.set_group_id(Some(group.clone()));
    }
    if let Some(secs) = profile.timeout_seconds {
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }
    if let Some(secs) = profile.file_timeout_seconds {
        loader.set_file_timeout(Some(Duration::from_secs(secs)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_path_ends_with_config_json() {
        let path = default_config_path().unwrap();
        assert!(path.ends_with("config.json"));
        assert!(path.to_string_lossy().contains("atlas-client"));
    }

    #[test]
    fn test_read_config_file_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = read_config_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ConfigFileParse { .. }));
    }

    #[test]
    fn test_read_config_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_config_file(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ConfigError::ConfigFileRead { .. }));
    }
}
