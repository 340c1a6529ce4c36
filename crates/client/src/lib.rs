//! MongoDB Atlas Admin API client.
//!
//! This crate provides a typed, async client for the Atlas Admin API v1.0:
//! clusters, database users, projects and organizations, alerts,
//! monitoring and logs, the IP whitelist, the maintenance window, the
//! project event feed, cloud backup snapshots and restores, and an
//! organization's programmatic API keys. Requests authenticate with HTTP Digest using a
//! programmatic API key pair.

mod auth;
pub mod client;
pub mod error;
pub mod models;
pub mod pagination;
mod serde_helpers;

pub mod endpoints;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use auth::{DigestAuth, DigestChallenge};
pub use client::AtlasClient;
pub use client::builder::AtlasClientBuilder;
pub use error::{ApiErrorBody, ClientError, PaginationLimit, Result};
pub use models::{
    AdvancedOptions, Alert, AlertStatus, ApiKey, ApiKeyRole, ApiKeyRoleName, AtlasEvent,
    AtlasUser, BasicReplicaSet, CloudBackupSnapshot, ClusterConfig, ClusterState, ClusterType,
    Database, DatabaseUser, DatabaseUserPermissions, DatabaseUserUpdate, DeliveryType, Disk,
    EventKind, Granularity, Host, HostLogFile, InstanceSizeName, LogLine, LogName,
    MaintenanceWindow, Measurement, MeasurementSeries, Measurements, MongoDbMajorVersion,
    NewProject, NewSnapshot, NewWhitelistEntry, Organization, Page, Period, Project,
    ProviderName, ProviderSettings, ReplicaSetType, RestoreJob, Role, RoleName, SnapshotRestore,
    TeamRoles, Weekday, WhitelistEntry,
};
pub use pagination::{PageRequest, paginate};
