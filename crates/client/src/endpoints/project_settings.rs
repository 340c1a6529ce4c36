//! Project-scoped settings: IP whitelist, maintenance window and events.

use chrono::{DateTime, Utc};
use reqwest::Client;

use crate::auth::DigestAuth;
use crate::endpoints::{encode_path_segment, send_json, send_no_content};
use crate::error::Result;
use crate::models::{
    AtlasEvent, MaintenanceWindow, NewWhitelistEntry, Page, WhitelistEntry,
};
use crate::pagination::PageRequest;
use crate::serde_helpers::format_datetime;

fn group_url(base_url: &str, group_id: &str, resource: &str) -> String {
    format!(
        "{}/groups/{}/{}",
        base_url,
        encode_path_segment(group_id),
        resource
    )
}

pub async fn list_whitelist(
    client: &Client,
    base_url: &str,
    auth: &DigestAuth,
    group_id: &str,
    page: PageRequest,
) -> Result<Page<WhitelistEntry>> {
    let builder = client
        .get(group_url(base_url, group_id, "whitelist"))
        .query(&page.query());
    send_json(client, auth, builder).await
}

/// `entry` is an IP address or CIDR block; the `/` of a block is encoded.
pub async fn get_whitelist_entry(
    client: &Client,
    base_url: &str,
    auth: &DigestAuth,
    group_id: &str,
    entry: &str,
) -> Result<WhitelistEntry> {
    let url = format!(
        "{}/{}",
        group_url(base_url, group_id, "whitelist"),
        encode_path_segment(entry)
    );
    send_json(client, auth, client.get(url)).await
}

/// Add entries; Atlas answers with the whole list.
pub async fn create_whitelist_entries(
    client: &Client,
    base_url: &str,
    auth: &DigestAuth,
    group_id: &str,
    entries: &[NewWhitelistEntry],
) -> Result<Page<WhitelistEntry>> {
    let builder = client
        .post(group_url(base_url, group_id, "whitelist"))
        .json(entries);
    send_json(client, auth, builder).await
}

pub async fn delete_whitelist_entry(
    client: &Client,
    base_url: &str,
    auth: &DigestAuth,
    group_id: &str,
    entry: &str,
) -> Result<()> {
    let url = format!(
        "{}/{}",
        group_url(base_url, group_id, "whitelist"),
        encode_path_segment(entry)
    );
    send_no_content(client, auth, client.delete(url)).await
}

pub async fn get_maintenance_window(
    client: &Client,
    base_url: &str,
    auth: &DigestAuth,
    group_id: &str,
) -> Result<MaintenanceWindow> {
    let url = group_url(base_url, group_id, "maintenanceWindow");
    send_json(client, auth, client.get(url)).await
}

pub async fn update_maintenance_window(
    client: &Client,
    base_url: &str,
    auth: &DigestAuth,
    group_id: &str,
    window: &MaintenanceWindow,
) -> Result<()> {
    let builder = client
        .patch(group_url(base_url, group_id, "maintenanceWindow"))
        .json(&window.as_update_body()?);
    send_no_content(client, auth, builder).await
}

pub async fn defer_maintenance_window(
    client: &Client,
    base_url: &str,
    auth: &DigestAuth,
    group_id: &str,
) -> Result<()> {
    let url = group_url(base_url, group_id, "maintenanceWindow/defer");
    send_no_content(client, auth, client.post(url).json(&serde_json::json!({}))).await
}

pub async fn reset_maintenance_window(
    client: &Client,
    base_url: &str,
    auth: &DigestAuth,
    group_id: &str,
) -> Result<()> {
    let url = group_url(base_url, group_id, "maintenanceWindow");
    send_no_content(client, auth, client.delete(url)).await
}

pub async fn list_events(
    client: &Client,
    base_url: &str,
    auth: &DigestAuth,
    group_id: &str,
    min_date: Option<&DateTime<Utc>>,
    page: PageRequest,
) -> Result<Page<AtlasEvent>> {
    let mut builder = client
        .get(group_url(base_url, group_id, "events"))
        .query(&page.query());
    if let Some(min_date) = min_date {
        builder = builder.query(&[("minDate", format_datetime(min_date))]);
    }
    send_json(client, auth, builder).await
}
