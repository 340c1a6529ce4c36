//! Alert API methods for [`AtlasClient`].

use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use futures::stream::BoxStream;

use crate::client::AtlasClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{Alert, AlertStatus, Page};
use crate::pagination::{PageRequest, paginate};

impl AtlasClient {
    /// Stream alerts, optionally only those in `status`.
    pub fn alerts_stream(
        &self,
        status: Option<AlertStatus>,
        page: PageRequest,
    ) -> BoxStream<'_, Result<Alert>> {
        paginate(page, move |p| {
            let status = status.clone();
            async move {
                let group = self.require_group()?;
                endpoints::list_alerts(
                    &self.http,
                    &self.api_url,
                    &self.auth,
                    group,
                    status.as_ref(),
                    p,
                )
                .await
            }
        })
    }

    pub async fn list_alerts(&self, status: Option<AlertStatus>) -> Result<Vec<Alert>> {
        self.alerts_stream(status, PageRequest::default())
            .try_collect()
            .await
    }

    pub async fn alerts_page(
        &self,
        status: Option<&AlertStatus>,
        page: PageRequest,
    ) -> Result<Page<Alert>> {
        let group = self.require_group()?;
        endpoints::list_alerts(&self.http, &self.api_url, &self.auth, group, status, page).await
    }

    pub async fn get_alert(&self, alert_id: &str) -> Result<Alert> {
        let group = self.require_group()?;
        endpoints::get_alert(&self.http, &self.api_url, &self.auth, group, alert_id).await
    }

    /// Acknowledge an alert until `until`.
    pub async fn acknowledge_alert(
        &self,
        alert_id: &str,
        until: DateTime<Utc>,
        comment: Option<&str>,
    ) -> Result<Alert> {
        let group = self.require_group()?;
        tracing::info!(%alert_id, %until, "Acknowledging alert");
        endpoints::acknowledge_alert(
            &self.http,
            &self.api_url,
            &self.auth,
            group,
            alert_id,
            &until,
            comment,
        )
        .await
    }

    pub async fn unacknowledge_alert(&self, alert_id: &str) -> Result<Alert> {
        let group = self.require_group()?;
        endpoints::unacknowledge_alert(&self.http, &self.api_url, &self.auth, group, alert_id)
            .await
    }
}
