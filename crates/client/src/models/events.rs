//! Project activity feed (`/groups/{GROUP-ID}/events`).

use std::net::IpAddr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::Link;
use crate::serde_helpers::{lenient_datetime, lenient_ip, serialize_opt_datetime};

/// What an event is about, decided by which identifying field it carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Feature,
    Host,
    Cluster,
    DataExplorer,
    Generic,
}

/// One event. Atlas has several hundred `eventTypeName` values, so the
/// type is kept as the raw string; fields not modelled here stay in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtlasEvent {
    pub id: String,
    #[serde(default)]
    pub event_type_name: Option<String>,
    #[serde(default)]
    pub group_id: Option<String>,
    #[serde(default)]
    pub org_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_datetime", serialize_with = "serialize_opt_datetime")]
    pub created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_global_admin: bool,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "lenient_ip")]
    pub remote_address: Option<IpAddr>,
    #[serde(default)]
    pub feature_name: Option<String>,
    #[serde(default)]
    pub hostname: Option<String>,
    #[serde(default)]
    pub port: Option<u16>,
    #[serde(default)]
    pub replica_set_name: Option<String>,
    #[serde(default)]
    pub cluster_name: Option<String>,
    #[serde(default)]
    pub database: Option<String>,
    #[serde(default)]
    pub collection: Option<String>,
    #[serde(default)]
    pub op_type: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

fn present(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|v| !v.is_empty())
}

impl AtlasEvent {
    pub fn kind(&self) -> EventKind {
        if present(&self.feature_name) {
            EventKind::Feature
        } else if present(&self.hostname) {
            EventKind::Host
        } else if present(&self.cluster_name) {
            EventKind::Cluster
        } else if present(&self.database) {
            EventKind::DataExplorer
        } else {
            EventKind::Generic
        }
    }

    /// Human form of the type name: `CLUSTER_MONGOS_IS_MISSING` becomes
    /// `Cluster Mongos Is Missing`.
    pub fn event_type_description(&self) -> String {
        let Some(name) = self.event_type_name.as_deref().filter(|n| !n.is_empty()) else {
            return "Unknown or None".to_string();
        };
        name.split('_')
            .filter(|word| !word.is_empty())
            .map(|word| {
                let lower = word.to_ascii_lowercase();
                let mut chars = lower.chars();
                match chars.next() {
                    Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
