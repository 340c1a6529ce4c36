//! Database user models for `/groups/{GROUP-ID}/databaseUsers`.

use atlas_config::constants::DEFAULT_AUTH_DATABASE;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use super::common::Link;
use super::string_enum::atlas_enum;
use crate::error::{ClientError, Result};

atlas_enum! {
    /// Built-in roles Atlas lets you grant to database users.
    pub enum RoleName {
        AtlasAdmin => "atlasAdmin",
        ReadWriteAnyDatabase => "readWriteAnyDatabase",
        ReadAnyDatabase => "readAnyDatabase",
        Backup => "backup",
        ClusterMonitor => "clusterMonitor",
        DbAdmin => "dbAdmin",
        DbAdminAnyDatabase => "dbAdminAnyDatabase",
        EnableSharding => "enableSharding",
        Read => "read",
        ReadWrite => "readWrite",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub database_name: String,
    pub role_name: RoleName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection_name: Option<String>,
}

impl Role {
    /// Build a role, checking the grants Atlas accepts.
    ///
    /// A collection-scoped role must be `read` or `readWrite`. Without a
    /// collection, anything other than `read`, `readWrite` or `dbAdmin` is
    /// only valid on the `admin` database.
    pub fn new(database: &str, role: RoleName, collection: Option<&str>) -> Result<Self> {
        let collection = collection.filter(|c| !c.is_empty());
        let plain = matches!(role, RoleName::Read | RoleName::ReadWrite);
        match collection {
            Some(_) if !plain => {
                return Err(ClientError::InvalidRole(format!(
                    "Permissions [{role}] not available for a collection"
                )));
            }
            None if !plain && role != RoleName::DbAdmin && database != DEFAULT_AUTH_DATABASE => {
                return Err(ClientError::InvalidRole(format!(
                    "Permissions [{role}] is only available for admin database"
                )));
            }
            _ => {}
        }
        Ok(Self {
            database_name: database.to_string(),
            role_name: role,
            collection_name: collection.map(str::to_string),
        })
    }
}

/// Roles held by a user, without duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleSet(Vec<Role>);

impl RoleSet {
    pub fn add(&mut self, database: &str, role: RoleName, collection: Option<&str>) -> Result<()> {
        let role = Role::new(database, role, collection)?;
        if !self.0.contains(&role) {
            self.0.push(role);
        }
        Ok(())
    }

    pub fn remove(&mut self, database: &str, role: &RoleName, collection: Option<&str>) {
        let collection = collection.filter(|c| !c.is_empty());
        self.0.retain(|r| {
            !(r.database_name == database
                && &r.role_name == role
                && r.collection_name.as_deref() == collection)
        });
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[Role] {
        &self.0
    }
}

/// A user to create, with its password and roles.
#[derive(Debug, Clone)]
pub struct DatabaseUserPermissions {
    pub username: String,
    pub password: SecretString,
    pub database_name: String,
    roles: RoleSet,
}

impl DatabaseUserPermissions {
    /// New user authenticating against the `admin` database.
    pub fn new(username: impl Into<String>, password: SecretString) -> Self {
        Self {
            username: username.into(),
            password,
            database_name: DEFAULT_AUTH_DATABASE.to_string(),
            roles: RoleSet::default(),
        }
    }

    pub fn with_database_name(mut self, database_name: impl Into<String>) -> Self {
        self.database_name = database_name.into();
        self
    }

    pub fn add_role(&mut self, database: &str, role: RoleName, collection: Option<&str>) -> Result<()> {
        self.roles.add(database, role, collection)
    }

    pub fn add_roles(&mut self, database: &str, roles: &[RoleName], collection: Option<&str>) -> Result<()> {
        for role in roles {
            self.add_role(database, role.clone(), collection)?;
        }
        Ok(())
    }

    pub fn remove_role(&mut self, database: &str, role: &RoleName, collection: Option<&str>) {
        self.roles.remove(database, role, collection);
    }

    pub fn remove_roles(&mut self, database: &str, roles: &[RoleName], collection: Option<&str>) {
        for role in roles {
            self.remove_role(database, role, collection);
        }
    }

    pub fn clear_roles(&mut self) {
        self.roles.clear();
    }

    pub fn roles(&self) -> &[Role] {
        self.roles.as_slice()
    }

    /// Request body for `POST /databaseUsers`.
    pub fn as_body(&self) -> serde_json::Value {
        serde_json::json!({
            "databaseName": self.database_name,
            "roles": self.roles.as_slice(),
            "username": self.username,
            "password": self.password.expose_secret(),
        })
    }
}

/// Partial update of an existing user. Only non-empty parts are sent.
#[derive(Debug, Clone, Default)]
pub struct DatabaseUserUpdate {
    pub password: Option<SecretString>,
    roles: RoleSet,
}

impl DatabaseUserUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_password(mut self, password: SecretString) -> Self {
        self.password = Some(password);
        self
    }

    pub fn add_role(&mut self, database: &str, role: RoleName, collection: Option<&str>) -> Result<()> {
        self.roles.add(database, role, collection)
    }

    pub fn remove_role(&mut self, database: &str, role: &RoleName, collection: Option<&str>) {
        self.roles.remove(database, role, collection);
    }

    pub fn clear_roles(&mut self) {
        self.roles.clear();
    }

    /// Request body for `PATCH /databaseUsers/admin/{username}`.
    pub fn as_body(&self) -> Result<serde_json::Value> {
        let mut body = serde_json::Map::new();
        if !self.roles.is_empty() {
            body.insert("roles".to_string(), serde_json::to_value(self.roles.as_slice())?);
        }
        if let Some(password) = self.password.as_ref().map(ExposeSecret::expose_secret)
            && !password.is_empty()
        {
            body.insert("password".to_string(), password.into());
        }
        Ok(serde_json::Value::Object(body))
    }
}

/// A database user as Atlas returns it. Passwords are never returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseUser {
    pub username: String,
    #[serde(default)]
    pub database_name: String,
    #[serde(default)]
    pub group_id: Option<String>,
    #[serde(default)]
    pub roles: Vec<Role>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ldap_auth_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x509_type: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
}
