//! Alert models for `/groups/{GROUP-ID}/alerts`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::Link;
use super::string_enum::atlas_enum;
use crate::serde_helpers::{format_datetime, lenient_datetime, serialize_opt_datetime};

atlas_enum! {
    pub enum AlertStatus {
        Tracking => "TRACKING",
        Open => "OPEN",
        Closed => "CLOSED",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: String,
    #[serde(default)]
    pub alert_config_id: Option<String>,
    #[serde(default)]
    pub group_id: Option<String>,
    #[serde(default)]
    pub event_type_name: Option<String>,
    #[serde(default)]
    pub type_name: Option<String>,
    #[serde(default)]
    pub status: Option<AlertStatus>,
    #[serde(default)]
    pub metric_name: Option<String>,
    #[serde(default)]
    pub hostname_and_port: Option<String>,
    #[serde(default)]
    pub replica_set_name: Option<String>,
    #[serde(default)]
    pub cluster_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_value: Option<serde_json::Value>,
    #[serde(default, deserialize_with = "lenient_datetime", serialize_with = "serialize_opt_datetime")]
    pub created: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient_datetime", serialize_with = "serialize_opt_datetime")]
    pub updated: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient_datetime", serialize_with = "serialize_opt_datetime")]
    pub last_notified: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient_datetime", serialize_with = "serialize_opt_datetime")]
    pub resolved: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient_datetime", serialize_with = "serialize_opt_datetime")]
    pub acknowledged_until: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acknowledgement_comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acknowledging_username: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
}

impl Alert {
    pub fn is_acknowledged(&self) -> bool {
        self.acknowledged_until.is_some()
    }
}

/// `PATCH /alerts/{id}` body acknowledging until `until`.
pub fn acknowledge_body(until: &DateTime<Utc>, comment: Option<&str>) -> serde_json::Value {
    let mut body = serde_json::json!({ "acknowledgedUntil": format_datetime(until) });
    if let Some(comment) = comment {
        body["acknowledgementComment"] = comment.into();
    }
    body
}

/// `PATCH /alerts/{id}` body clearing a previous acknowledgement.
pub fn unacknowledge_body() -> serde_json::Value {
    serde_json::json!({})
}
