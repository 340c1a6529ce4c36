//! MongoDB processes (hosts) and their databases and disks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::Link;
use super::string_enum::atlas_enum;
use crate::serde_helpers::{lenient_datetime, serialize_opt_datetime};

atlas_enum! {
    /// Role of a process in its deployment (`typeName`).
    pub enum ReplicaSetType {
        ReplicaPrimary => "REPLICA_PRIMARY",
        ReplicaSecondary => "REPLICA_SECONDARY",
        Recovering => "RECOVERING",
        ShardMongos => "SHARD_MONGOS",
        ShardConfig => "SHARD_CONFIG",
        ShardStandalone => "SHARD_STANDALONE",
        ShardPrimary => "SHARD_PRIMARY",
        ShardSecondary => "SHARD_SECONDARY",
        NoData => "NO_DATA",
    }
}

impl ReplicaSetType {
    pub fn description(&self) -> &str {
        match self {
            Self::ReplicaPrimary => "ReplicaSet primary",
            Self::ReplicaSecondary => "ReplicaSet secondary",
            Self::Recovering => "Recovering",
            Self::ShardMongos => "Mongos router",
            Self::ShardConfig => "Config server",
            Self::ShardStandalone => "Standalone",
            Self::ShardPrimary => "Shard primary",
            Self::ShardSecondary => "Shard secondary",
            Self::NoData => "No data available",
            Self::Unknown(raw) => raw,
        }
    }
}

fn no_data() -> ReplicaSetType {
    ReplicaSetType::NoData
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Host {
    pub id: String,
    pub hostname: String,
    pub port: u16,
    #[serde(default)]
    pub group_id: Option<String>,
    #[serde(default = "no_data")]
    pub type_name: ReplicaSetType,
    #[serde(default)]
    pub replica_set_name: Option<String>,
    #[serde(default)]
    pub user_alias: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default, deserialize_with = "lenient_datetime", serialize_with = "serialize_opt_datetime")]
    pub created: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient_datetime", serialize_with = "serialize_opt_datetime")]
    pub last_ping: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
}

impl Host {
    /// `hostname:port`, the process id used in monitoring paths.
    pub fn process_id(&self) -> String {
        format!("{}:{}", self.hostname, self.port)
    }

    pub fn is_primary(&self) -> bool {
        matches!(
            self.type_name,
            ReplicaSetType::ReplicaPrimary | ReplicaSetType::ShardPrimary
        )
    }

    /// Cluster name derived from the `-shard-` hostname convention.
    pub fn cluster_name(&self) -> Option<&str> {
        self.hostname.split_once("-shard-").map(|(name, _)| name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Database {
    pub database_name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Disk {
    pub partition_name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_deserialization() {
        let host: Host = serde_json::from_str(
            r#"{
                "created": "2019-06-05T18:19:23Z",
                "groupId": "5b1e2b8e0f2912c1a6e1c8a7",
                "hostname": "pyatlastest-shard-00-01.abcde.mongodb.net",
                "id": "pyatlastest-shard-00-01.abcde.mongodb.net:27017",
                "lastPing": "2019-06-11T16:02:39Z",
                "port": 27017,
                "replicaSetName": "pyAtlasTest-shard-0",
                "typeName": "REPLICA_PRIMARY",
                "version": "4.0.9"
            }"#,
        )
        .unwrap();
        assert!(host.is_primary());
        assert_eq!(host.process_id(), "pyatlastest-shard-00-01.abcde.mongodb.net:27017");
        assert_eq!(host.cluster_name(), Some("pyatlastest"));
        assert_eq!(host.type_name.description(), "ReplicaSet primary");
    }

    #[test]
    fn test_missing_type_name_is_no_data() {
        let host: Host =
            serde_json::from_str(r#"{"id": "h:1", "hostname": "h", "port": 1}"#).unwrap();
        assert_eq!(host.type_name, ReplicaSetType::NoData);
        assert!(!host.is_primary());
        assert_eq!(host.cluster_name(), None);
    }
}
