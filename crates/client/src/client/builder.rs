//! Client builder for constructing [`AtlasClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Normalizing the base URL and appending the Admin API prefix
//! - Configuring the underlying HTTP client (timeout, redirect limit)
//!
//! # Invariants
//! - An API key pair must be provided before calling `build()`
//! - The base URL defaults to the public Atlas endpoint and never keeps a
//!   trailing slash

use std::time::Duration;

use atlas_config::{
    ApiKeyPair, Config,
    constants::{
        API_PATH_PREFIX, DEFAULT_BASE_URL, DEFAULT_FILE_TIMEOUT_SECS, DEFAULT_MAX_REDIRECTS,
        DEFAULT_TIMEOUT_SECS,
    },
};

use crate::auth::DigestAuth;
use crate::client::AtlasClient;
use crate::error::{ClientError, Result};

/// Builder for creating a new [`AtlasClient`].
///
/// ```rust,ignore
/// use atlas_client::AtlasClient;
/// use atlas_config::ApiKeyPair;
///
/// let client = AtlasClient::builder()
///     .keys(ApiKeyPair::new("PUBLIC", "PRIVATE"))
///     .group_id("5b1e2b8e0f2912c1a6e1c8a7")
///     .build()?;
/// ```
pub struct AtlasClientBuilder {
    base_url: String,
    keys: Option<ApiKeyPair>,
    group_id: Option<String>,
    timeout: Duration,
    file_timeout: Duration,
}

impl Default for AtlasClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            keys: None,
            group_id: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            file_timeout: Duration::from_secs(DEFAULT_FILE_TIMEOUT_SECS),
        }
    }
}

impl AtlasClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Server root, e.g. `https://cloud.mongodb.com`. The API prefix is added.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn keys(mut self, keys: ApiKeyPair) -> Self {
        self.keys = Some(keys);
        self
    }

    /// Project used by project-scoped calls.
    pub fn group_id(mut self, group_id: impl Into<String>) -> Self {
        self.group_id = Some(group_id.into());
        self
    }

    /// Per-request timeout. Default is 10 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Timeout for log downloads. Default is 360 seconds.
    pub fn file_timeout(mut self, timeout: Duration) -> Self {
        self.file_timeout = timeout;
        self
    }

    /// Take every setting from a loaded [`Config`].
    pub fn from_config(mut self, config: &Config) -> Self {
        self.base_url = config.connection.base_url.clone();
        self.keys = Some(config.keys.clone());
        self.group_id = config.group_id.clone();
        self.timeout = config.connection.timeout;
        self.file_timeout = config.connection.file_timeout;
        self
    }

    /// `"https://cloud.mongodb.com//"` -> `"https://cloud.mongodb.com"`
    fn normalize_base_url(url: &str) -> String {
        url.trim().trim_end_matches('/').to_string()
    }

    /// Build the [`AtlasClient`].
    ///
    /// # Errors
    ///
    /// `ClientError::MissingCredentials` without a key pair,
    /// `ClientError::InvalidUrl` for a base URL that is not absolute http(s),
    /// `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<AtlasClient> {
        let keys = self.keys.ok_or(ClientError::MissingCredentials)?;

        let base_url = Self::normalize_base_url(&self.base_url);
        let parsed = url::Url::parse(&base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("Invalid base URL '{base_url}': {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
            return Err(ClientError::InvalidUrl(format!(
                "Base URL must be an absolute http(s) URL: {base_url}"
            )));
        }

        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS))
            .build()?;

        let group_id = self.group_id.filter(|g| !g.trim().is_empty());
        tracing::debug!(
            base_url = %base_url,
            public_key = %keys.obfuscated(),
            group_id = group_id.as_deref().unwrap_or("-"),
            "Built Atlas client"
        );

        Ok(AtlasClient {
            http,
            api_url: format!("{base_url}{API_PATH_PREFIX}"),
            auth: DigestAuth::new(keys),
            group_id,
            file_timeout: self.file_timeout,
        })
    }
}
