//! CLI command implementations.

pub mod list;

use anyhow::{Context, Result};
use atlas_client::AtlasClient;

/// Build an [`AtlasClient`] from a loaded configuration.
pub fn build_client_from_config(config: &atlas_config::Config) -> Result<AtlasClient> {
    AtlasClient::builder()
        .from_config(config)
        .build()
        .context("Failed to build Atlas client")
}
