//! Main Atlas Admin API client and its API methods.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `clusters`: Cluster lifecycle and advanced options
//! - `database_users`: Database user management
//! - `projects`: Projects, organizations, project users and teams
//! - `alerts`: Alert listing and acknowledgement
//! - `monitoring`: Processes, measurements, databases, disks and logs
//! - `project_settings`: IP whitelist, maintenance window and events
//! - `cloud_backup`: Cloud provider snapshots and restore jobs
//! - `api_keys`: An organization's programmatic API keys
//!
//! HTTP requests themselves live in [`crate::endpoints`]; methods here add
//! the configured project id, pagination and confirmation checks.
//!
//! Every listing comes in three forms: `*_stream(page)` walks all pages
//! starting at `page`, `list_*()` collects that stream, and `*_page(page)`
//! fetches a single page.

pub mod builder;

mod alerts;
mod api_keys;
mod cloud_backup;
mod clusters;
mod database_users;
mod monitoring;
mod project_settings;
mod projects;

use std::time::Duration;

use crate::auth::DigestAuth;
use crate::error::{ClientError, Result};

/// Atlas Admin API client.
///
/// ```rust,ignore
/// use atlas_client::{AtlasClient, PageRequest};
/// use futures::TryStreamExt;
///
/// let client = AtlasClient::builder().from_config(&config).build()?;
/// let clusters = client.list_clusters().await?;
/// let mut alerts = client.alerts_stream(None, PageRequest::default());
/// while let Some(alert) = alerts.try_next().await? {
///     println!("{}", alert.id);
/// }
/// ```
#[derive(Debug)]
pub struct AtlasClient {
    pub(crate) http: reqwest::Client,
    /// Server root plus `/api/atlas/v1.0`.
    pub(crate) api_url: String,
    pub(crate) auth: DigestAuth,
    pub(crate) group_id: Option<String>,
    pub(crate) file_timeout: Duration,
}

impl AtlasClient {
    pub fn builder() -> builder::AtlasClientBuilder {
        builder::AtlasClientBuilder::new()
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn group_id(&self) -> Option<&str> {
        self.group_id.as_deref()
    }

    pub fn public_key(&self) -> &str {
        self.auth.public_key()
    }

    /// The configured project id, or `MissingGroupId`.
    pub(crate) fn require_group(&self) -> Result<&str> {
        self.group_id.as_deref().ok_or(ClientError::MissingGroupId)
    }
}

/// Fail with `ConfirmationRequired` unless `approved`.
pub(crate) fn confirm(approved: bool, action: &str) -> Result<()> {
    if approved {
        Ok(())
    } else {
        Err(ClientError::ConfirmationRequired(format!(
            "{action} is destructive; pass an explicit confirmation to proceed"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atlas_config::ApiKeyPair;

    #[test]
    fn test_require_group() {
        let client = AtlasClient::builder()
            .keys(ApiKeyPair::new("pub", "priv"))
            .build()
            .unwrap();
        assert!(matches!(
            client.require_group(),
            Err(ClientError::MissingGroupId)
        ));

        let client = AtlasClient::builder()
            .keys(ApiKeyPair::new("pub", "priv"))
            .group_id("g1")
            .build()
            .unwrap();
        assert_eq!(client.require_group().unwrap(), "g1");
    }

    #[test]
    fn test_confirm() {
        assert!(confirm(true, "Deleting cluster x").is_ok());
        let err = confirm(false, "Deleting cluster x").unwrap_err();
        assert!(matches!(err, ClientError::ConfirmationRequired(msg) if msg.contains("cluster x")));
    }
}
