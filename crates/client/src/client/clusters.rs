//! Cluster API methods for [`AtlasClient`].

use futures::TryStreamExt;
use futures::stream::BoxStream;

use crate::client::{AtlasClient, confirm};
use crate::endpoints;
use crate::error::Result;
use crate::models::{AdvancedOptions, BasicReplicaSet, ClusterConfig, InstanceSizeName, Page};
use crate::pagination::{PageRequest, paginate};

impl AtlasClient {
    /// Stream every cluster in the project, starting at `page`.
    pub fn clusters_stream(&self, page: PageRequest) -> BoxStream<'_, Result<ClusterConfig>> {
        paginate(page, move |p| async move {
            let group = self.require_group()?;
            endpoints::list_clusters(&self.http, &self.api_url, &self.auth, group, p).await
        })
    }

    pub async fn list_clusters(&self) -> Result<Vec<ClusterConfig>> {
        self.clusters_stream(PageRequest::default())
            .try_collect()
            .await
    }

    pub async fn clusters_page(&self, page: PageRequest) -> Result<Page<ClusterConfig>> {
        let group = self.require_group()?;
        endpoints::list_clusters(&self.http, &self.api_url, &self.auth, group, page).await
    }

    pub async fn get_cluster(&self, name: &str) -> Result<ClusterConfig> {
        let group = self.require_group()?;
        endpoints::get_cluster(&self.http, &self.api_url, &self.auth, group, name).await
    }

    /// `false` on 404; every other error is returned.
    pub async fn cluster_exists(&self, name: &str) -> Result<bool> {
        match self.get_cluster(name).await {
            Ok(_) => Ok(true),
            Err(e) if e.is_not_found() => Ok(false),
            Err(e) => Err(e),
        }
    }

    pub async fn create_cluster(&self, cluster: &ClusterConfig) -> Result<ClusterConfig> {
        let group = self.require_group()?;
        tracing::info!(cluster = %cluster.name, "Creating cluster");
        endpoints::create_cluster(&self.http, &self.api_url, &self.auth, group, cluster).await
    }

    /// Create a single-region replica set from [`BasicReplicaSet`] defaults.
    pub async fn create_basic_replica_set(&self, spec: BasicReplicaSet) -> Result<ClusterConfig> {
        self.create_cluster(&spec.into_config()).await
    }

    pub async fn modify_cluster(&self, name: &str, cluster: &ClusterConfig) -> Result<ClusterConfig> {
        let group = self.require_group()?;
        endpoints::modify_cluster(&self.http, &self.api_url, &self.auth, group, name, cluster).await
    }

    /// Change the tier of a cluster, keeping its provider.
    pub async fn modify_cluster_instance_size(
        &self,
        name: &str,
        size: InstanceSizeName,
    ) -> Result<ClusterConfig> {
        let current = self.get_cluster(name).await?;
        let provider = current
            .provider_settings
            .map(|settings| settings.provider_name)
            .unwrap_or(crate::models::ProviderName::Aws);
        let group = self.require_group()?;
        tracing::info!(cluster = %name, size = %size, "Resizing cluster");
        endpoints::modify_instance_size(
            &self.http,
            &self.api_url,
            &self.auth,
            group,
            name,
            &provider,
            &size,
        )
        .await
    }

    /// Pause (`true`) or resume (`false`) a cluster.
    pub async fn pause_cluster(&self, name: &str, pause: bool) -> Result<ClusterConfig> {
        let group = self.require_group()?;
        endpoints::pause_cluster(&self.http, &self.api_url, &self.auth, group, name, pause).await
    }

    /// Delete a cluster. Nothing is sent unless `are_you_sure` is true.
    pub async fn delete_cluster(&self, name: &str, are_you_sure: bool) -> Result<()> {
        confirm(are_you_sure, &format!("Deleting cluster {name}"))?;
        let group = self.require_group()?;
        tracing::warn!(cluster = %name, "Deleting cluster");
        endpoints::delete_cluster(&self.http, &self.api_url, &self.auth, group, name).await
    }

    /// Trigger a primary election on every replica set of the cluster.
    pub async fn test_failover(&self, name: &str) -> Result<()> {
        let group = self.require_group()?;
        endpoints::test_failover(&self.http, &self.api_url, &self.auth, group, name).await
    }

    pub async fn get_cluster_advanced_options(&self, name: &str) -> Result<AdvancedOptions> {
        let group = self.require_group()?;
        endpoints::get_advanced_options(&self.http, &self.api_url, &self.auth, group, name).await
    }

    pub async fn modify_cluster_advanced_options(
        &self,
        name: &str,
        options: &AdvancedOptions,
    ) -> Result<AdvancedOptions> {
        let group = self.require_group()?;
        endpoints::modify_advanced_options(
            &self.http,
            &self.api_url,
            &self.auth,
            group,
            name,
            options,
        )
        .await
    }
}
