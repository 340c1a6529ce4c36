//! Cluster endpoints under `/groups/{GROUP-ID}/clusters`.

use reqwest::Client;

use crate::auth::DigestAuth;
use crate::endpoints::{encode_path_segment, send_json, send_no_content};
use crate::error::Result;
use crate::models::{AdvancedOptions, ClusterConfig, InstanceSizeName, Page, ProviderName};
use crate::pagination::PageRequest;

fn clusters_url(base_url: &str, group_id: &str) -> String {
    format!("{}/groups/{}/clusters", base_url, encode_path_segment(group_id))
}

pub(super) fn cluster_url(base_url: &str, group_id: &str, name: &str) -> String {
    format!(
        "{}/{}",
        clusters_url(base_url, group_id),
        encode_path_segment(name)
    )
}

/// One page of the project's clusters.
pub async fn list_clusters(
    client: &Client,
    base_url: &str,
    auth: &DigestAuth,
    group_id: &str,
    page: PageRequest,
) -> Result<Page<ClusterConfig>> {
    let builder = client
        .get(clusters_url(base_url, group_id))
        .query(&page.query());
    send_json(client, auth, builder).await
}

pub async fn get_cluster(
    client: &Client,
    base_url: &str,
    auth: &DigestAuth,
    group_id: &str,
    name: &str,
) -> Result<ClusterConfig> {
    let builder = client.get(cluster_url(base_url, group_id, name));
    send_json(client, auth, builder).await
}

/// Create a cluster; read-only fields are stripped from `cluster`.
pub async fn create_cluster(
    client: &Client,
    base_url: &str,
    auth: &DigestAuth,
    group_id: &str,
    cluster: &ClusterConfig,
) -> Result<ClusterConfig> {
    let builder = client
        .post(clusters_url(base_url, group_id))
        .json(&cluster.as_create_body()?);
    send_json(client, auth, builder).await
}

/// PATCH a cluster with an arbitrary JSON document.
pub async fn patch_cluster(
    client: &Client,
    base_url: &str,
    auth: &DigestAuth,
    group_id: &str,
    name: &str,
    body: &serde_json::Value,
) -> Result<ClusterConfig> {
    let builder = client
        .patch(cluster_url(base_url, group_id, name))
        .json(body);
    send_json(client, auth, builder).await
}

pub async fn modify_cluster(
    client: &Client,
    base_url: &str,
    auth: &DigestAuth,
    group_id: &str,
    name: &str,
    cluster: &ClusterConfig,
) -> Result<ClusterConfig> {
    patch_cluster(client, base_url, auth, group_id, name, &cluster.as_modify_body()?).await
}

#[allow(clippy::too_many_arguments)]
pub async fn modify_instance_size(
    client: &Client,
    base_url: &str,
    auth: &DigestAuth,
    group_id: &str,
    name: &str,
    provider: &ProviderName,
    size: &InstanceSizeName,
) -> Result<ClusterConfig> {
    let body = serde_json::json!({
        "providerSettings": {
            "providerName": provider,
            "instanceSizeName": size,
        }
    });
    patch_cluster(client, base_url, auth, group_id, name, &body).await
}

pub async fn pause_cluster(
    client: &Client,
    base_url: &str,
    auth: &DigestAuth,
    group_id: &str,
    name: &str,
    pause: bool,
) -> Result<ClusterConfig> {
    let body = serde_json::json!({ "paused": pause });
    patch_cluster(client, base_url, auth, group_id, name, &body).await
}

pub async fn delete_cluster(
    client: &Client,
    base_url: &str,
    auth: &DigestAuth,
    group_id: &str,
    name: &str,
) -> Result<()> {
    let builder = client.delete(cluster_url(base_url, group_id, name));
    send_no_content(client, auth, builder).await
}

/// Restart the primaries of every replica set in the cluster.
pub async fn test_failover(
    client: &Client,
    base_url: &str,
    auth: &DigestAuth,
    group_id: &str,
    name: &str,
) -> Result<()> {
    let url = format!("{}/restartPrimaries", cluster_url(base_url, group_id, name));
    let builder = client.post(url).json(&serde_json::json!({}));
    send_no_content(client, auth, builder).await
}

pub async fn get_advanced_options(
    client: &Client,
    base_url: &str,
    auth: &DigestAuth,
    group_id: &str,
    name: &str,
) -> Result<AdvancedOptions> {
    let url = format!("{}/processArgs", cluster_url(base_url, group_id, name));
    send_json(client, auth, client.get(url)).await
}

pub async fn modify_advanced_options(
    client: &Client,
    base_url: &str,
    auth: &DigestAuth,
    group_id: &str,
    name: &str,
    options: &AdvancedOptions,
) -> Result<AdvancedOptions> {
    let url = format!("{}/processArgs", cluster_url(base_url, group_id, name));
    let builder = client.patch(url).json(options);
    send_json(client, auth, builder).await
}
