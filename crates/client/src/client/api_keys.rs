//! Programmatic API key methods for [`AtlasClient`]. Keys belong to an
//! organization, so these calls take the organization id instead of using
//! the configured project.

use futures::TryStreamExt;
use futures::stream::BoxStream;

use crate::client::AtlasClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{ApiKey, WhitelistEntry};
use crate::pagination::{PageRequest, paginate};

impl AtlasClient {
    pub fn api_keys_stream<'a>(
        &'a self,
        org_id: &'a str,
        page: PageRequest,
    ) -> BoxStream<'a, Result<ApiKey>> {
        paginate(page, move |p| {
            endpoints::list_api_keys(&self.http, &self.api_url, &self.auth, org_id, p)
        })
    }

    pub async fn list_api_keys(&self, org_id: &str) -> Result<Vec<ApiKey>> {
        self.api_keys_stream(org_id, PageRequest::default())
            .try_collect()
            .await
    }

    pub async fn get_api_key(&self, org_id: &str, key_id: &str) -> Result<ApiKey> {
        endpoints::get_api_key(&self.http, &self.api_url, &self.auth, org_id, key_id).await
    }

    /// Addresses allowed to call the API with this key.
    pub async fn api_key_whitelist(&self, org_id: &str, key_id: &str) -> Result<Vec<WhitelistEntry>> {
        paginate(PageRequest::default(), move |p| {
            endpoints::list_api_key_whitelist(&self.http, &self.api_url, &self.auth, org_id, key_id, p)
        })
        .try_collect()
        .await
    }
}
