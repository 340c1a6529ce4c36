//! Monitoring endpoints: processes, their databases and disks, and logs.

use std::time::Duration;

use reqwest::Client;

use crate::auth::DigestAuth;
use crate::endpoints::{encode_path_segment, send_json, send_request};
use crate::error::Result;
use crate::models::{
    Database, Disk, Granularity, Host, HostLogFile, Measurement, Measurements, Page, Period,
};
use crate::pagination::PageRequest;

fn process_url(base_url: &str, group_id: &str, hostname: &str, port: u16) -> String {
    format!(
        "{}/groups/{}/processes/{}:{}",
        base_url,
        encode_path_segment(group_id),
        encode_path_segment(hostname),
        port
    )
}

/// `granularity`, `period` and one `m` per measurement.
fn measurement_query(
    granularity: &Granularity,
    period: &Period,
    measurements: &[Measurement],
) -> Vec<(&'static str, String)> {
    let mut query = vec![
        ("granularity", granularity.as_str().to_string()),
        ("period", period.as_str().to_string()),
    ];
    query.extend(measurements.iter().map(|m| ("m", m.as_str().to_string())));
    query
}

pub async fn list_processes(
    client: &Client,
    base_url: &str,
    auth: &DigestAuth,
    group_id: &str,
    page: PageRequest,
) -> Result<Page<Host>> {
    let url = format!(
        "{}/groups/{}/processes",
        base_url,
        encode_path_segment(group_id)
    );
    send_json(client, auth, client.get(url).query(&page.query())).await
}

#[allow(clippy::too_many_arguments)]
pub async fn host_measurements(
    client: &Client,
    base_url: &str,
    auth: &DigestAuth,
    group_id: &str,
    hostname: &str,
    port: u16,
    granularity: &Granularity,
    period: &Period,
    measurements: &[Measurement],
) -> Result<Measurements> {
    let url = format!("{}/measurements", process_url(base_url, group_id, hostname, port));
    let builder = client
        .get(url)
        .query(&measurement_query(granularity, period, measurements));
    let response: Measurements = send_json(client, auth, builder).await?;
    Ok(response.with_request(granularity, period))
}

#[allow(clippy::too_many_arguments)]
pub async fn list_databases(
    client: &Client,
    base_url: &str,
    auth: &DigestAuth,
    group_id: &str,
    hostname: &str,
    port: u16,
    page: PageRequest,
) -> Result<Page<Database>> {
    let url = format!("{}/databases", process_url(base_url, group_id, hostname, port));
    send_json(client, auth, client.get(url).query(&page.query())).await
}

#[allow(clippy::too_many_arguments)]
pub async fn database_measurements(
    client: &Client,
    base_url: &str,
    auth: &DigestAuth,
    group_id: &str,
    hostname: &str,
    port: u16,
    database: &str,
    granularity: &Granularity,
    period: &Period,
    measurements: &[Measurement],
) -> Result<Measurements> {
    let url = format!(
        "{}/databases/{}/measurements",
        process_url(base_url, group_id, hostname, port),
        encode_path_segment(database)
    );
    let builder = client
        .get(url)
        .query(&measurement_query(granularity, period, measurements));
    let response: Measurements = send_json(client, auth, builder).await?;
    Ok(response.with_request(granularity, period))
}

#[allow(clippy::too_many_arguments)]
pub async fn list_disks(
    client: &Client,
    base_url: &str,
    auth: &DigestAuth,
    group_id: &str,
    hostname: &str,
    port: u16,
    page: PageRequest,
) -> Result<Page<Disk>> {
    let url = format!("{}/disks", process_url(base_url, group_id, hostname, port));
    send_json(client, auth, client.get(url).query(&page.query())).await
}

#[allow(clippy::too_many_arguments)]
pub async fn disk_measurements(
    client: &Client,
    base_url: &str,
    auth: &DigestAuth,
    group_id: &str,
    hostname: &str,
    port: u16,
    partition: &str,
    granularity: &Granularity,
    period: &Period,
    measurements: &[Measurement],
) -> Result<Measurements> {
    let url = format!(
        "{}/disks/{}/measurements",
        process_url(base_url, group_id, hostname, port),
        encode_path_segment(partition)
    );
    let builder = client
        .get(url)
        .query(&measurement_query(granularity, period, measurements));
    let response: Measurements = send_json(client, auth, builder).await?;
    Ok(response.with_request(granularity, period))
}

/// Download a gzipped log file. Uses `timeout` instead of the client default.
pub async fn download_log(
    client: &Client,
    base_url: &str,
    auth: &DigestAuth,
    group_id: &str,
    file: &HostLogFile,
    timeout: Duration,
) -> Result<Vec<u8>> {
    let url = format!(
        "{}/groups/{}/clusters/{}/logs/{}",
        base_url,
        encode_path_segment(group_id),
        encode_path_segment(&file.hostname),
        file.log_name.as_str()
    );
    let builder = client
        .get(url)
        .header(reqwest::header::ACCEPT, "application/gzip")
        .query(&file.query())
        .timeout(timeout);
    let response = send_request(client, auth, builder).await?;
    Ok(response.bytes().await?.to_vec())
}
