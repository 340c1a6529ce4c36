//! Data models for Atlas Admin API documents.
//!
//! Types are organized by resource in submodules and re-exported here.
//! String-valued enums keep values this crate does not know in an
//! `Unknown` variant so new Atlas values never break decoding.

mod string_enum;

pub mod alerts;
pub mod api_keys;
pub mod cloud_backup;
pub mod clusters;
pub mod common;
pub mod database_users;
pub mod events;
pub mod hosts;
pub mod logs;
pub mod maintenance;
pub mod measurements;
pub mod organizations;
pub mod projects;
pub mod whitelist;

pub use alerts::{Alert, AlertStatus};
pub use api_keys::{ApiKey, ApiKeyRole, ApiKeyRoleName};
pub use cloud_backup::{
    CloudBackupSnapshot, DeliveryType, NewSnapshot, RestoreJob, SnapshotClusterType,
    SnapshotMember, SnapshotRestore, SnapshotStatus, SnapshotType,
};
pub use clusters::{
    AdvancedOptions, AutoScaling, BasicReplicaSet, ClusterConfig, ClusterState, ClusterType,
    ComputeAutoScaling, DefaultReadConcern, InstanceSizeName, MongoDbMajorVersion,
    ProviderName, ProviderSettings, RegionConfig, ReplicationSpec, TlsProtocol, VolumeType,
};
pub use common::{Link, Page};
pub use database_users::{
    DatabaseUser, DatabaseUserPermissions, DatabaseUserUpdate, Role, RoleName,
};
pub use events::{AtlasEvent, EventKind};
pub use hosts::{Database, Disk, Host, ReplicaSetType};
pub use logs::{HostLogFile, LogLine, LogName, parse_log_lines};
pub use maintenance::{MaintenanceWindow, Weekday};
pub use measurements::{
    DataPoint, Granularity, Measurement, MeasurementSeries, Measurements, Period, Units,
};
pub use organizations::Organization;
pub use projects::{AtlasUser, NewProject, Project, TeamRoles, UserRole};
pub use whitelist::{NewWhitelistEntry, WhitelistEntry};
