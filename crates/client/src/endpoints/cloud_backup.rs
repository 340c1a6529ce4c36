//! Cloud backup endpoints under `/groups/{GROUP-ID}/clusters/{CLUSTER}/backup`.

use reqwest::Client;

use super::clusters::cluster_url;
use crate::auth::DigestAuth;
use crate::endpoints::{encode_path_segment, send_json, send_no_content};
use crate::error::Result;
use crate::models::{CloudBackupSnapshot, NewSnapshot, Page, RestoreJob, SnapshotRestore};
use crate::pagination::PageRequest;

fn backup_url(base_url: &str, group_id: &str, cluster: &str, resource: &str) -> String {
    format!("{}/backup/{}", cluster_url(base_url, group_id, cluster), resource)
}

fn backup_item_url(base_url: &str, group_id: &str, cluster: &str, resource: &str, id: &str) -> String {
    format!(
        "{}/{}",
        backup_url(base_url, group_id, cluster, resource),
        encode_path_segment(id)
    )
}

pub async fn list_snapshots(
    client: &Client,
    base_url: &str,
    auth: &DigestAuth,
    group_id: &str,
    cluster: &str,
    page: PageRequest,
) -> Result<Page<CloudBackupSnapshot>> {
    let builder = client
        .get(backup_url(base_url, group_id, cluster, "snapshots"))
        .query(&page.query());
    send_json(client, auth, builder).await
}

pub async fn get_snapshot(
    client: &Client,
    base_url: &str,
    auth: &DigestAuth,
    group_id: &str,
    cluster: &str,
    snapshot_id: &str,
) -> Result<CloudBackupSnapshot> {
    let url = backup_item_url(base_url, group_id, cluster, "snapshots", snapshot_id);
    send_json(client, auth, client.get(url)).await
}

/// Take an on-demand snapshot.
pub async fn create_snapshot(
    client: &Client,
    base_url: &str,
    auth: &DigestAuth,
    group_id: &str,
    cluster: &str,
    snapshot: &NewSnapshot,
) -> Result<CloudBackupSnapshot> {
    let builder = client
        .post(backup_url(base_url, group_id, cluster, "snapshots"))
        .json(snapshot);
    send_json(client, auth, builder).await
}

pub async fn list_restore_jobs(
    client: &Client,
    base_url: &str,
    auth: &DigestAuth,
    group_id: &str,
    cluster: &str,
    page: PageRequest,
) -> Result<Page<RestoreJob>> {
    let builder = client
        .get(backup_url(base_url, group_id, cluster, "restoreJobs"))
        .query(&page.query());
    send_json(client, auth, builder).await
}

pub async fn get_restore_job(
    client: &Client,
    base_url: &str,
    auth: &DigestAuth,
    group_id: &str,
    cluster: &str,
    restore_id: &str,
) -> Result<RestoreJob> {
    let url = backup_item_url(base_url, group_id, cluster, "restoreJobs", restore_id);
    send_json(client, auth, client.get(url)).await
}

/// Start a restore of a snapshot taken from `cluster`.
pub async fn create_restore_job(
    client: &Client,
    base_url: &str,
    auth: &DigestAuth,
    group_id: &str,
    cluster: &str,
    restore: &SnapshotRestore,
) -> Result<RestoreJob> {
    let builder = client
        .post(backup_url(base_url, group_id, cluster, "restoreJobs"))
        .json(restore);
    send_json(client, auth, builder).await
}

pub async fn cancel_restore_job(
    client: &Client,
    base_url: &str,
    auth: &DigestAuth,
    group_id: &str,
    cluster: &str,
    restore_id: &str,
) -> Result<()> {
    let url = backup_item_url(base_url, group_id, cluster, "restoreJobs", restore_id);
    send_no_content(client, auth, client.delete(url)).await
}
