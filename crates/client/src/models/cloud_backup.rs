//! Cloud provider snapshots and restore jobs
//! (`/groups/{GROUP-ID}/clusters/{CLUSTER}/backup`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::clusters::ProviderName;
use super::common::Link;
use super::string_enum::atlas_enum;
use crate::serde_helpers::{lenient_datetime, lenient_u64, serialize_opt_datetime};

atlas_enum! {
    /// How a snapshot was taken.
    pub enum SnapshotType {
        OnDemand => "onDemand",
        Scheduled => "scheduled",
        Fallback => "fallback",
    }
}

atlas_enum! {
    pub enum SnapshotStatus {
        Queued => "queued",
        InProgress => "inProgress",
        Completed => "completed",
        Failed => "failed",
    }
}

atlas_enum! {
    /// Topology of the cluster a snapshot was taken from.
    pub enum SnapshotClusterType {
        ReplicaSet => "replicaSet",
        ShardedCluster => "shardedCluster",
    }
}

atlas_enum! {
    /// Where restored data goes.
    pub enum DeliveryType {
        /// Restore onto an Atlas cluster.
        Automated => "automated",
        /// Archive of the data directory for manual download.
        Download => "download",
        /// Point in time restore onto an Atlas cluster.
        PointInTime => "pointInTime",
    }
}

impl DeliveryType {
    /// Whether restored data lands on a target cluster.
    pub fn needs_target_cluster(&self) -> bool {
        matches!(self, Self::Automated | Self::PointInTime)
    }
}

/// Per-shard snapshot of a sharded cluster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotMember {
    pub id: String,
    #[serde(default)]
    pub cloud_provider: Option<ProviderName>,
    #[serde(default)]
    pub replica_set_name: Option<String>,
}

/// A cloud provider snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudBackupSnapshot {
    pub id: String,
    #[serde(default)]
    pub cloud_provider: Option<ProviderName>,
    #[serde(default, deserialize_with = "lenient_datetime", serialize_with = "serialize_opt_datetime")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient_datetime", serialize_with = "serialize_opt_datetime")]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, rename = "masterKeyUUID")]
    pub master_key_uuid: Option<String>,
    #[serde(default)]
    pub members: Vec<SnapshotMember>,
    #[serde(default)]
    pub mongod_version: Option<String>,
    #[serde(default)]
    pub replica_set_name: Option<String>,
    #[serde(default)]
    pub snapshot_ids: Vec<String>,
    #[serde(default)]
    pub snapshot_type: Option<SnapshotType>,
    #[serde(default)]
    pub status: Option<SnapshotStatus>,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub storage_size_bytes: Option<u64>,
    #[serde(default, rename = "type")]
    pub cluster_type: Option<SnapshotClusterType>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
}

impl CloudBackupSnapshot {
    pub fn is_completed(&self) -> bool {
        self.status == Some(SnapshotStatus::Completed)
    }
}

/// Body for `POST .../backup/snapshots`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSnapshot {
    pub description: String,
    pub retention_in_days: u32,
}

impl NewSnapshot {
    pub fn new(description: impl Into<String>, retention_in_days: u32) -> Self {
        Self {
            description: description.into(),
            retention_in_days,
        }
    }
}

/// Body for `POST .../backup/restoreJobs`.
///
/// ```rust,ignore
/// let restore = SnapshotRestore::new(DeliveryType::Automated, snapshot_id)
///     .target_cluster("Restored")
///     .target_group(other_group);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotRestore {
    pub delivery_type: DeliveryType,
    pub snapshot_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_cluster_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_group_id: Option<String>,
}

impl SnapshotRestore {
    pub fn new(delivery_type: DeliveryType, snapshot_id: impl Into<String>) -> Self {
        Self {
            delivery_type,
            snapshot_id: snapshot_id.into(),
            target_cluster_name: None,
            target_group_id: None,
        }
    }

    pub fn target_cluster(mut self, name: impl Into<String>) -> Self {
        self.target_cluster_name = Some(name.into());
        self
    }

    /// Restore into another project. Defaults to the source project.
    pub fn target_group(mut self, group_id: impl Into<String>) -> Self {
        self.target_group_id = Some(group_id.into());
        self
    }
}

/// A restore job as Atlas reports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestoreJob {
    pub id: String,
    #[serde(default)]
    pub delivery_type: Option<DeliveryType>,
    #[serde(default)]
    pub snapshot_id: Option<String>,
    #[serde(default)]
    pub target_cluster_name: Option<String>,
    #[serde(default)]
    pub target_group_id: Option<String>,
    #[serde(default)]
    pub target_deployment_item_name: Option<String>,
    #[serde(default)]
    pub cancelled: bool,
    #[serde(default)]
    pub expired: bool,
    #[serde(default, deserialize_with = "lenient_datetime", serialize_with = "serialize_opt_datetime")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient_datetime", serialize_with = "serialize_opt_datetime")]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient_datetime", serialize_with = "serialize_opt_datetime")]
    pub finished_at: Option<DateTime<Utc>>,
    /// When the restored snapshot was taken.
    #[serde(
        default,
        rename = "timestamp",
        deserialize_with = "lenient_datetime",
        serialize_with = "serialize_opt_datetime"
    )]
    pub snapshot_timestamp: Option<DateTime<Utc>>,
    /// Download links, only for `download` deliveries.
    #[serde(default)]
    pub delivery_url: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
}

impl RestoreJob {
    pub fn is_finished(&self) -> bool {
        self.finished_at.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_decodes_sharded_members() {
        let snapshot: CloudBackupSnapshot = serde_json::from_value(serde_json::json!({
            "id": "5f4e1a2b3c4d5e6f7a8b9c0d",
            "createdAt": "2021-07-31T01:44:22Z",
            "expiresAt": "not a date",
            "masterKeyUUID": "key-1",
            "members": [
                {"id": "m1", "cloudProvider": "AWS", "replicaSetName": "shard-0"},
                {"id": "m2", "cloudProvider": "AWS", "replicaSetName": "config"}
            ],
            "snapshotIds": ["m1", "m2"],
            "snapshotType": "scheduled",
            "status": "completed",
            "storageSizeBytes": "1024",
            "type": "shardedCluster"
        }))
        .unwrap();

        assert_eq!(snapshot.cluster_type, Some(SnapshotClusterType::ShardedCluster));
        assert_eq!(snapshot.snapshot_type, Some(SnapshotType::Scheduled));
        assert!(snapshot.is_completed());
        assert!(snapshot.created_at.is_some());
        assert!(snapshot.expires_at.is_none());
        assert_eq!(snapshot.storage_size_bytes, Some(1024));
        assert_eq!(snapshot.master_key_uuid.as_deref(), Some("key-1"));
        assert_eq!(snapshot.members[1].replica_set_name.as_deref(), Some("config"));
    }

    #[test]
    fn test_restore_body_omits_unset_targets() {
        let download = SnapshotRestore::new(DeliveryType::Download, "s1");
        assert_eq!(
            serde_json::to_value(&download).unwrap(),
            serde_json::json!({"deliveryType": "download", "snapshotId": "s1"})
        );

        let automated = SnapshotRestore::new(DeliveryType::Automated, "s1")
            .target_cluster("Restored")
            .target_group("g2");
        assert_eq!(
            serde_json::to_value(&automated).unwrap(),
            serde_json::json!({
                "deliveryType": "automated",
                "snapshotId": "s1",
                "targetClusterName": "Restored",
                "targetGroupId": "g2"
            })
        );
    }

    #[test]
    fn test_delivery_targets() {
        assert!(DeliveryType::Automated.needs_target_cluster());
        assert!(DeliveryType::PointInTime.needs_target_cluster());
        assert!(!DeliveryType::Download.needs_target_cluster());
    }

    #[test]
    fn test_restore_job_defaults() {
        let job: RestoreJob = serde_json::from_value(serde_json::json!({
            "id": "r1",
            "deliveryType": "download",
            "deliveryUrl": ["https://restore.example/r1.tar.gz"],
            "timestamp": "2021-07-31T01:44:22Z"
        }))
        .unwrap();
        assert!(!job.cancelled);
        assert!(!job.is_finished());
        assert_eq!(job.delivery_type, Some(DeliveryType::Download));
        assert_eq!(job.delivery_url.len(), 1);
        assert!(job.snapshot_timestamp.is_some());
    }
}
