//! Project (group) models. Atlas uses "group" and "project" interchangeably.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::Link;
use crate::serde_helpers::lenient_datetime;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub org_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_datetime", skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub cluster_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
}

/// Parameters for `POST /groups`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    pub name: String,
    pub org_id: String,
    pub with_default_alerts_settings: bool,
    /// Atlas user granted Project Owner; overrides the oldest org owner.
    pub project_owner_id: Option<String>,
}

impl NewProject {
    pub fn new(name: impl Into<String>, org_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            org_id: org_id.into(),
            with_default_alerts_settings: true,
            project_owner_id: None,
        }
    }

    pub fn with_owner(mut self, owner_id: impl Into<String>) -> Self {
        self.project_owner_id = Some(owner_id.into());
        self
    }

    pub fn without_default_alerts(mut self) -> Self {
        self.with_default_alerts_settings = false;
        self
    }

    pub fn as_body(&self) -> serde_json::Value {
        serde_json::json!({
            "name": self.name,
            "orgId": self.org_id,
            "withDefaultAlertsSettings": self.with_default_alerts_settings,
        })
    }
}

/// An Atlas (cloud console) user with access to a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtlasUser {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email_address: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile_number: Option<String>,
    #[serde(default)]
    pub roles: Vec<UserRole>,
    #[serde(default)]
    pub team_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
}

/// Role assignment scoped to either a project or an organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRole {
    pub role_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org_id: Option<String>,
}

/// A team and the Atlas access roles it holds in a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRoles {
    pub team_id: String,
    #[serde(default, rename = "roleNames")]
    pub roles: Vec<String>,
}
