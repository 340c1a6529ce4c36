//! REST API endpoint implementations.
//!
//! Each function issues exactly one HTTP request against the API root
//! (`{base}/api/atlas/v1.0`). Pagination and group-id defaulting live in
//! [`crate::client`].

mod alerts;
mod api_keys;
mod cloud_backup;
mod clusters;
mod database_users;
mod hosts;
mod project_settings;
mod projects;
mod request;
mod url_encoding;

pub use alerts::{acknowledge_alert, get_alert, list_alerts, unacknowledge_alert};
pub use api_keys::{get_api_key, list_api_key_whitelist, list_api_keys};
pub use cloud_backup::{
    cancel_restore_job, create_restore_job, create_snapshot, get_restore_job, get_snapshot,
    list_restore_jobs, list_snapshots,
};
pub use clusters::{
    create_cluster, delete_cluster, get_advanced_options, get_cluster, list_clusters,
    modify_advanced_options, modify_cluster, modify_instance_size, patch_cluster, pause_cluster,
    test_failover,
};
pub use database_users::{
    create_database_user, delete_database_user, get_database_user, list_database_users,
    update_database_user,
};
pub use hosts::{
    database_measurements, disk_measurements, download_log, host_measurements, list_databases,
    list_disks, list_processes,
};
pub use project_settings::{
    create_whitelist_entries, defer_maintenance_window, delete_whitelist_entry,
    get_maintenance_window, get_whitelist_entry, list_events, list_whitelist,
    reset_maintenance_window, update_maintenance_window,
};
pub use projects::{
    create_project, delete_project, get_organization, get_project, get_project_by_name,
    list_organizations, list_projects, organization_projects, project_teams, project_users,
};
pub use request::{check_status, read_json, send_json, send_no_content, send_request};
pub use url_encoding::encode_path_segment;
