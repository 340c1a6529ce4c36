//! Project-level settings for [`AtlasClient`]: IP whitelist, maintenance
//! window and the event feed.

use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use futures::stream::BoxStream;

use crate::client::AtlasClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{AtlasEvent, MaintenanceWindow, NewWhitelistEntry, Page, WhitelistEntry};
use crate::pagination::{PageRequest, paginate};

impl AtlasClient {
    pub fn whitelist_stream(&self, page: PageRequest) -> BoxStream<'_, Result<WhitelistEntry>> {
        paginate(page, move |p| async move {
            let group = self.require_group()?;
            endpoints::list_whitelist(&self.http, &self.api_url, &self.auth, group, p).await
        })
    }

    pub async fn list_whitelist(&self) -> Result<Vec<WhitelistEntry>> {
        self.whitelist_stream(PageRequest::default())
            .try_collect()
            .await
    }

    pub async fn whitelist_page(&self, page: PageRequest) -> Result<Page<WhitelistEntry>> {
        let group = self.require_group()?;
        endpoints::list_whitelist(&self.http, &self.api_url, &self.auth, group, page).await
    }

    /// `entry` is an IP address or CIDR block.
    pub async fn get_whitelist_entry(&self, entry: &str) -> Result<WhitelistEntry> {
        let group = self.require_group()?;
        endpoints::get_whitelist_entry(&self.http, &self.api_url, &self.auth, group, entry).await
    }

    /// Add entries; returns the whole whitelist after the change.
    pub async fn create_whitelist_entries(
        &self,
        entries: &[NewWhitelistEntry],
    ) -> Result<Page<WhitelistEntry>> {
        let group = self.require_group()?;
        tracing::info!(count = entries.len(), "Adding whitelist entries");
        endpoints::create_whitelist_entries(&self.http, &self.api_url, &self.auth, group, entries)
            .await
    }

    pub async fn delete_whitelist_entry(&self, entry: &str) -> Result<()> {
        let group = self.require_group()?;
        tracing::info!(%entry, "Removing whitelist entry");
        endpoints::delete_whitelist_entry(&self.http, &self.api_url, &self.auth, group, entry).await
    }

    pub async fn maintenance_window(&self) -> Result<MaintenanceWindow> {
        let group = self.require_group()?;
        endpoints::get_maintenance_window(&self.http, &self.api_url, &self.auth, group).await
    }

    pub async fn update_maintenance_window(&self, window: &MaintenanceWindow) -> Result<()> {
        let group = self.require_group()?;
        endpoints::update_maintenance_window(&self.http, &self.api_url, &self.auth, group, window)
            .await
    }

    /// Defer the scheduled maintenance by one week.
    pub async fn defer_maintenance_window(&self) -> Result<()> {
        let group = self.require_group()?;
        endpoints::defer_maintenance_window(&self.http, &self.api_url, &self.auth, group).await
    }

    /// Clear the configured window so Atlas picks its own.
    pub async fn reset_maintenance_window(&self) -> Result<()> {
        let group = self.require_group()?;
        endpoints::reset_maintenance_window(&self.http, &self.api_url, &self.auth, group).await
    }

    /// Stream project events, optionally only those at or after `min_date`.
    pub fn events_stream(
        &self,
        min_date: Option<DateTime<Utc>>,
        page: PageRequest,
    ) -> BoxStream<'_, Result<AtlasEvent>> {
        paginate(page, move |p| async move {
            let group = self.require_group()?;
            endpoints::list_events(
                &self.http,
                &self.api_url,
                &self.auth,
                group,
                min_date.as_ref(),
                p,
            )
            .await
        })
    }

    pub async fn events_since(&self, since: DateTime<Utc>) -> Result<Vec<AtlasEvent>> {
        self.events_stream(Some(since), PageRequest::default())
            .try_collect()
            .await
    }

    pub async fn events_page(
        &self,
        min_date: Option<DateTime<Utc>>,
        page: PageRequest,
    ) -> Result<Page<AtlasEvent>> {
        let group = self.require_group()?;
        endpoints::list_events(
            &self.http,
            &self.api_url,
            &self.auth,
            group,
            min_date.as_ref(),
            page,
        )
        .await
    }
}
