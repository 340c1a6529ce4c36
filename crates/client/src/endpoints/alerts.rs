//! Alert endpoints under `/groups/{GROUP-ID}/alerts`.

use chrono::{DateTime, Utc};
use reqwest::Client;

use crate::auth::DigestAuth;
use crate::endpoints::{encode_path_segment, send_json};
use crate::error::Result;
use crate::models::alerts::{acknowledge_body, unacknowledge_body};
use crate::models::{Alert, AlertStatus, Page};
use crate::pagination::PageRequest;

fn alerts_url(base_url: &str, group_id: &str) -> String {
    format!("{}/groups/{}/alerts", base_url, encode_path_segment(group_id))
}

fn alert_url(base_url: &str, group_id: &str, alert_id: &str) -> String {
    format!(
        "{}/{}",
        alerts_url(base_url, group_id),
        encode_path_segment(alert_id)
    )
}

/// One page of alerts, optionally filtered by status.
pub async fn list_alerts(
    client: &Client,
    base_url: &str,
    auth: &DigestAuth,
    group_id: &str,
    status: Option<&AlertStatus>,
    page: PageRequest,
) -> Result<Page<Alert>> {
    let mut builder = client
        .get(alerts_url(base_url, group_id))
        .query(&page.query());
    if let Some(status) = status {
        builder = builder.query(&[("status", status.as_str())]);
    }
    send_json(client, auth, builder).await
}

pub async fn get_alert(
    client: &Client,
    base_url: &str,
    auth: &DigestAuth,
    group_id: &str,
    alert_id: &str,
) -> Result<Alert> {
    send_json(client, auth, client.get(alert_url(base_url, group_id, alert_id))).await
}

pub async fn acknowledge_alert(
    client: &Client,
    base_url: &str,
    auth: &DigestAuth,
    group_id: &str,
    alert_id: &str,
    until: &DateTime<Utc>,
    comment: Option<&str>,
) -> Result<Alert> {
    let builder = client
        .patch(alert_url(base_url, group_id, alert_id))
        .json(&acknowledge_body(until, comment));
    send_json(client, auth, builder).await
}

pub async fn unacknowledge_alert(
    client: &Client,
    base_url: &str,
    auth: &DigestAuth,
    group_id: &str,
    alert_id: &str,
) -> Result<Alert> {
    let builder = client
        .patch(alert_url(base_url, group_id, alert_id))
        .json(&unacknowledge_body());
    send_json(client, auth, builder).await
}
