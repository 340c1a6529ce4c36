//! Cloud backup API methods for [`AtlasClient`]: snapshots and restore jobs.

use futures::TryStreamExt;
use futures::stream::BoxStream;

use crate::client::AtlasClient;
use crate::endpoints;
use crate::error::{ClientError, Result};
use crate::models::{CloudBackupSnapshot, NewSnapshot, Page, RestoreJob, SnapshotRestore};
use crate::pagination::{PageRequest, paginate};

impl AtlasClient {
    pub fn snapshots_stream<'a>(
        &'a self,
        cluster: &'a str,
        page: PageRequest,
    ) -> BoxStream<'a, Result<CloudBackupSnapshot>> {
        paginate(page, move |p| async move {
            let group = self.require_group()?;
            endpoints::list_snapshots(&self.http, &self.api_url, &self.auth, group, cluster, p).await
        })
    }

    /// Every cloud provider snapshot of a cluster.
    pub async fn list_snapshots(&self, cluster: &str) -> Result<Vec<CloudBackupSnapshot>> {
        self.snapshots_stream(cluster, PageRequest::default())
            .try_collect()
            .await
    }

    pub async fn snapshots_page(
        &self,
        cluster: &str,
        page: PageRequest,
    ) -> Result<Page<CloudBackupSnapshot>> {
        let group = self.require_group()?;
        endpoints::list_snapshots(&self.http, &self.api_url, &self.auth, group, cluster, page).await
    }

    pub async fn get_snapshot(&self, cluster: &str, snapshot_id: &str) -> Result<CloudBackupSnapshot> {
        let group = self.require_group()?;
        endpoints::get_snapshot(&self.http, &self.api_url, &self.auth, group, cluster, snapshot_id)
            .await
    }

    /// `false` when Atlas answers 404, or 400 for a malformed snapshot id.
    pub async fn snapshot_exists(&self, cluster: &str, snapshot_id: &str) -> Result<bool> {
        match self.get_snapshot(cluster, snapshot_id).await {
            Ok(_) => Ok(true),
            Err(e) if e.is_not_found() || matches!(e, ClientError::BadRequest(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Take an on-demand snapshot of a cluster.
    pub async fn create_snapshot(
        &self,
        cluster: &str,
        snapshot: &NewSnapshot,
    ) -> Result<CloudBackupSnapshot> {
        let group = self.require_group()?;
        tracing::info!(%cluster, retention_days = snapshot.retention_in_days, "Creating snapshot");
        endpoints::create_snapshot(&self.http, &self.api_url, &self.auth, group, cluster, snapshot)
            .await
    }

    pub fn restore_jobs_stream<'a>(
        &'a self,
        cluster: &'a str,
        page: PageRequest,
    ) -> BoxStream<'a, Result<RestoreJob>> {
        paginate(page, move |p| async move {
            let group = self.require_group()?;
            endpoints::list_restore_jobs(&self.http, &self.api_url, &self.auth, group, cluster, p)
                .await
        })
    }

    pub async fn list_restore_jobs(&self, cluster: &str) -> Result<Vec<RestoreJob>> {
        self.restore_jobs_stream(cluster, PageRequest::default())
            .try_collect()
            .await
    }

    pub async fn get_restore_job(&self, cluster: &str, restore_id: &str) -> Result<RestoreJob> {
        let group = self.require_group()?;
        endpoints::get_restore_job(&self.http, &self.api_url, &self.auth, group, cluster, restore_id)
            .await
    }

    /// Restore a snapshot of `source_cluster`.
    ///
    /// Before anything is posted the request is checked: deliveries onto a
    /// cluster need a target cluster that exists in the target project and is
    /// not the source itself, and the snapshot must exist. Failed checks
    /// return [`ClientError::InvalidRestore`].
    pub async fn request_snapshot_restore(
        &self,
        source_cluster: &str,
        restore: &SnapshotRestore,
    ) -> Result<RestoreJob> {
        let group = self.require_group()?;
        let target_group = restore.target_group_id.as_deref().unwrap_or(group);

        let target_cluster = match restore.target_cluster_name.as_deref() {
            Some(target) => Some(target),
            None if restore.delivery_type.needs_target_cluster() => {
                return Err(ClientError::InvalidRestore(format!(
                    "{} restores need a target cluster",
                    restore.delivery_type
                )));
            }
            None => None,
        };
        if target_cluster == Some(source_cluster) && target_group == group {
            return Err(ClientError::InvalidRestore(format!(
                "Cannot restore cluster {source_cluster} onto itself"
            )));
        }

        if !self.snapshot_exists(source_cluster, &restore.snapshot_id).await? {
            return Err(ClientError::InvalidRestore(format!(
                "Snapshot {} does not exist for cluster {source_cluster}",
                restore.snapshot_id
            )));
        }
        if let Some(target) = target_cluster {
            match endpoints::get_cluster(&self.http, &self.api_url, &self.auth, target_group, target)
                .await
            {
                Ok(_) => {}
                Err(e) if e.is_not_found() => {
                    return Err(ClientError::InvalidRestore(format!(
                        "Target cluster {target} does not exist in project {target_group}"
                    )));
                }
                Err(e) => return Err(e),
            }
        }

        tracing::info!(
            source = %source_cluster,
            snapshot = %restore.snapshot_id,
            delivery = %restore.delivery_type,
            "Requesting snapshot restore"
        );
        endpoints::create_restore_job(
            &self.http,
            &self.api_url,
            &self.auth,
            group,
            source_cluster,
            restore,
        )
        .await
    }

    /// Cancel a restore job. Atlas refuses for automated restores with
    /// [`ClientError::BackupError`].
    pub async fn cancel_restore_job(&self, cluster: &str, restore_id: &str) -> Result<()> {
        let group = self.require_group()?;
        tracing::warn!(%cluster, restore = %restore_id, "Cancelling restore job");
        endpoints::cancel_restore_job(&self.http, &self.api_url, &self.auth, group, cluster, restore_id)
            .await
    }
}
