//! Cluster models for `/groups/{GROUP-ID}/clusters`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::common::Link;
use super::string_enum::atlas_enum;
use crate::error::Result;

atlas_enum! {
    /// Topology of a cluster.
    pub enum ClusterType {
        ReplicaSet => "REPLICASET",
        Sharded => "SHARDED",
        GeoSharded => "GEOSHARDED",
    }
}

atlas_enum! {
    /// Lifecycle state reported in `stateName`. Read-only.
    pub enum ClusterState {
        Idle => "IDLE",
        Creating => "CREATING",
        Updating => "UPDATING",
        Deleting => "DELETING",
        Deleted => "DELETED",
        Repairing => "REPAIRING",
    }
}

atlas_enum! {
    /// Cluster tier, equivalent across cloud providers.
    pub enum InstanceSizeName {
        M0 => "M0",
        M2 => "M2",
        M5 => "M5",
        M10 => "M10",
        M20 => "M20",
        M30 => "M30",
        M40 => "M40",
        R40 => "R40",
        M40Nvme => "M40_NVME",
        M50 => "M50",
        R50 => "R50",
        M50Nvme => "M50_NVME",
        M60 => "M60",
        R60 => "R60",
        M60Nvme => "M60_NVME",
        M80 => "M80",
        R80 => "R80",
        M80Nvme => "M80_NVME",
        M100 => "M100",
        M140 => "M140",
        M200 => "M200",
        M200Nvme => "M200_NVME",
        R200 => "R200",
        M300 => "M300",
        R300 => "R300",
        M400 => "M400",
        R400 => "R400",
        M400Nvme => "M400_NVME",
        R700 => "R700",
    }
}

atlas_enum! {
    pub enum ProviderName {
        Aws => "AWS",
        Gcp => "GCP",
        Azure => "AZURE",
        /// Shared-tier (M0/M2/M5) clusters.
        Tenant => "TENANT",
    }
}

atlas_enum! {
    pub enum MongoDbMajorVersion {
        V3_6 => "3.6",
        V4_0 => "4.0",
        V4_2 => "4.2",
        V4_4 => "4.4",
        V5_0 => "5.0",
        V6_0 => "6.0",
        V7_0 => "7.0",
    }
}

atlas_enum! {
    pub enum VolumeType {
        Standard => "STANDARD",
        Provisioned => "PROVISIONED",
    }
}

atlas_enum! {
    /// Minimum TLS version accepted by the cluster.
    pub enum TlsProtocol {
        Tls1_0 => "TLS1_0",
        Tls1_1 => "TLS1_1",
        Tls1_2 => "TLS1_2",
        /// MongoDB 4.0 and above only.
        Tls1_3 => "TLS1_3",
    }
}

atlas_enum! {
    pub enum DefaultReadConcern {
        Local => "local",
        Available => "available",
        Majority => "majority",
    }
}

/// Per-region node layout inside a replication spec.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionConfig {
    pub electable_nodes: u32,
    pub priority: u32,
    pub read_only_nodes: u32,
    pub analytics_nodes: u32,
}

impl Default for RegionConfig {
    fn default() -> Self {
        Self {
            electable_nodes: 3,
            priority: 7,
            read_only_nodes: 0,
            analytics_nodes: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplicationSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default = "one")]
    pub num_shards: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone_name: Option<String>,
    /// Keyed by region name, e.g. `US_EAST_1`.
    #[serde(default)]
    pub regions_config: BTreeMap<String, RegionConfig>,
}

fn one() -> u32 {
    1
}

impl ReplicationSpec {
    /// Single-zone spec with the default node layout in `region`.
    pub fn single_region(region: impl Into<String>) -> Self {
        Self {
            id: None,
            num_shards: 1,
            zone_name: None,
            regions_config: BTreeMap::from([(region.into(), RegionConfig::default())]),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputeAutoScaling {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale_down_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_instance_size: Option<InstanceSizeName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_instance_size: Option<InstanceSizeName>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoScaling {
    #[serde(rename = "diskGBEnabled", default, skip_serializing_if = "Option::is_none")]
    pub disk_gb_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compute: Option<ComputeAutoScaling>,
}

/// Provisioned server configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderSettings {
    pub instance_size_name: InstanceSizeName,
    pub provider_name: ProviderName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_scaling: Option<ComputeAutoScaling>,
    #[serde(rename = "diskIOPS", default, skip_serializing_if = "Option::is_none")]
    pub disk_iops: Option<u32>,
    #[serde(rename = "encryptEBSVolume", default, skip_serializing_if = "Option::is_none")]
    pub encrypt_ebs_volume: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_type: Option<VolumeType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backing_provider_name: Option<ProviderName>,
}

impl ProviderSettings {
    pub fn new(size: InstanceSizeName, provider: ProviderName, region: impl Into<String>) -> Self {
        Self {
            instance_size_name: size,
            provider_name: provider,
            region_name: Some(region.into()),
            auto_scaling: None,
            disk_iops: None,
            encrypt_ebs_volume: Some(true),
            volume_type: Some(VolumeType::Standard),
            backing_provider_name: None,
        }
    }
}

/// Cluster document as returned by Atlas and accepted for create/modify.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backup_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_backup_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pit_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_type: Option<ClusterType>,
    #[serde(rename = "diskSizeGB", default, skip_serializing_if = "Option::is_none")]
    pub disk_size_gb: Option<f64>,
    #[serde(rename = "mongoDBMajorVersion", default, skip_serializing_if = "Option::is_none")]
    pub mongodb_major_version: Option<MongoDbMajorVersion>,
    #[serde(rename = "mongoDBVersion", default, skip_serializing_if = "Option::is_none")]
    pub mongodb_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_shards: Option<u32>,
    #[serde(rename = "mongoURI", default, skip_serializing_if = "Option::is_none")]
    pub mongo_uri: Option<String>,
    #[serde(rename = "mongoURIUpdated", default, skip_serializing_if = "Option::is_none")]
    pub mongo_uri_updated: Option<DateTime<Utc>>,
    #[serde(rename = "mongoURIWithOptions", default, skip_serializing_if = "Option::is_none")]
    pub mongo_uri_with_options: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paused: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_name: Option<ClusterState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_scaling: Option<AutoScaling>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub replication_specs: Vec<ReplicationSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub srv_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_settings: Option<ProviderSettings>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_date: Option<DateTime<Utc>>,
}

/// Fields Atlas computes itself and rejects in write requests.
const READ_ONLY_FIELDS: &[&str] = &[
    "id",
    "groupId",
    "numShards",
    "mongoURI",
    "mongoDBVersion",
    "mongoURIUpdated",
    "mongoURIWithOptions",
    "paused",
    "srvAddress",
    "links",
    "stateName",
    "createDate",
];

impl ClusterConfig {
    fn write_body(&self) -> Result<serde_json::Value> {
        let mut body = serde_json::to_value(self)?;
        if let Some(map) = body.as_object_mut() {
            for field in READ_ONLY_FIELDS {
                map.remove(*field);
            }
        }
        Ok(body)
    }

    /// Body for `POST /clusters`: read-only fields and replication spec ids removed.
    pub fn as_create_body(&self) -> Result<serde_json::Value> {
        let mut body = self.write_body()?;
        if let Some(specs) = body
            .get_mut("replicationSpecs")
            .and_then(|v| v.as_array_mut())
        {
            for spec in specs {
                if let Some(spec) = spec.as_object_mut() {
                    spec.remove("id");
                }
            }
        }
        Ok(body)
    }

    /// Body for `PATCH /clusters/{name}`: read-only fields removed.
    pub fn as_modify_body(&self) -> Result<serde_json::Value> {
        self.write_body()
    }

    pub fn is_sharded(&self) -> bool {
        matches!(
            self.cluster_type,
            Some(ClusterType::Sharded | ClusterType::GeoSharded)
        )
    }
}

/// Defaults for a single-region replica set; only the name is required.
#[derive(Debug, Clone, PartialEq)]
pub struct BasicReplicaSet {
    pub name: String,
    pub size: InstanceSizeName,
    pub disk_size_gb: f64,
    pub provider: ProviderName,
    pub region: String,
    pub version: MongoDbMajorVersion,
}

impl BasicReplicaSet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size: InstanceSizeName::M10,
            disk_size_gb: 10.0,
            provider: ProviderName::Aws,
            region: "US_WEST_2".to_string(),
            version: MongoDbMajorVersion::V4_0,
        }
    }

    pub fn into_config(self) -> ClusterConfig {
        ClusterConfig {
            name: self.name,
            backup_enabled: Some(false),
            cluster_type: Some(ClusterType::ReplicaSet),
            disk_size_gb: Some(self.disk_size_gb),
            mongodb_major_version: Some(self.version),
            pit_enabled: Some(false),
            replication_specs: vec![ReplicationSpec::single_region(self.region.clone())],
            provider_settings: Some(ProviderSettings::new(
                self.size,
                self.provider,
                self.region,
            )),
            ..ClusterConfig::default()
        }
    }
}

/// Cluster `processArgs`; only fields that are set are sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvancedOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fail_index_key_too_long: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub javascript_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_enabled_tls_protocol: Option<TlsProtocol>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_table_scan: Option<bool>,
    #[serde(rename = "oplogSizeMB", default, skip_serializing_if = "Option::is_none")]
    pub oplog_size_mb: Option<u64>,
    #[serde(rename = "sampleSizeBIConnector", default, skip_serializing_if = "Option::is_none")]
    pub sample_size_bi_connector: Option<u64>,
    #[serde(
        rename = "sampleRefreshIntervalBIConnector",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub sample_refresh_interval_bi_connector: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_read_concern: Option<DefaultReadConcern>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_write_concern: Option<String>,
}
