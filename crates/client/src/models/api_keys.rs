//! Programmatic API keys of an organization (`/orgs/{ORG-ID}/apiKeys`).

use secrecy::SecretString;
use serde::{Deserialize, Deserializer, Serialize};

use super::common::Link;
use super::string_enum::atlas_enum;

atlas_enum! {
    /// Roles that can be granted to a programmatic API key.
    pub enum ApiKeyRoleName {
        OrgOwner => "ORG_OWNER",
        OrgMember => "ORG_MEMBER",
        OrgGroupCreator => "ORG_GROUP_CREATOR",
        OrgBillingAdmin => "ORG_BILLING_ADMIN",
        OrgReadOnly => "ORG_READ_ONLY",
        GroupChartsAdmin => "GROUP_CHARTS_ADMIN",
        GroupClusterManager => "GROUP_CLUSTER_MANAGER",
        GroupDataAccessAdmin => "GROUP_DATA_ACCESS_ADMIN",
        GroupDataAccessReadOnly => "GROUP_DATA_ACCESS_READ_ONLY",
        GroupDataAccessReadWrite => "GROUP_DATA_ACCESS_READ_WRITE",
        GroupOwner => "GROUP_OWNER",
        GroupReadOnly => "GROUP_READ_ONLY",
    }
}

impl ApiKeyRoleName {
    /// Organization-level role, as opposed to a project (group) role.
    pub fn is_org_role(&self) -> bool {
        self.as_str().starts_with("ORG_")
    }
}

/// One role grant: either for the organization or for one project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKeyRole {
    pub role_name: ApiKeyRoleName,
    #[serde(default)]
    pub org_id: Option<String>,
    #[serde(default)]
    pub group_id: Option<String>,
}

/// A programmatic API key. Atlas returns the private key masked.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKey {
    pub id: String,
    #[serde(default)]
    pub desc: Option<String>,
    pub public_key: String,
    #[serde(default, skip_serializing, deserialize_with = "secret_opt")]
    pub private_key: Option<SecretString>,
    #[serde(default)]
    pub roles: Vec<ApiKeyRole>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
}

fn secret_opt<'de, D>(deserializer: D) -> Result<Option<SecretString>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.map(|s| SecretString::new(s.into())))
}

impl ApiKey {
    /// Roles this key holds in `group_id`.
    pub fn group_roles<'a>(&'a self, group_id: &'a str) -> impl Iterator<Item = &'a ApiKeyRoleName> {
        self.roles
            .iter()
            .filter(move |role| role.group_id.as_deref() == Some(group_id))
            .map(|role| &role.role_name)
    }

    pub fn org_roles(&self) -> impl Iterator<Item = &ApiKeyRoleName> {
        self.roles
            .iter()
            .filter(|role| role.role_name.is_org_role())
            .map(|role| &role.role_name)
    }
}
