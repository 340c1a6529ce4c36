//! Organization API key endpoints under `/orgs/{ORG-ID}/apiKeys`.

use reqwest::Client;

use crate::auth::DigestAuth;
use crate::endpoints::{encode_path_segment, send_json};
use crate::error::Result;
use crate::models::{ApiKey, Page, WhitelistEntry};
use crate::pagination::PageRequest;

fn api_keys_url(base_url: &str, org_id: &str) -> String {
    format!("{}/orgs/{}/apiKeys", base_url, encode_path_segment(org_id))
}

fn api_key_url(base_url: &str, org_id: &str, key_id: &str) -> String {
    format!(
        "{}/{}",
        api_keys_url(base_url, org_id),
        encode_path_segment(key_id)
    )
}

pub async fn list_api_keys(
    client: &Client,
    base_url: &str,
    auth: &DigestAuth,
    org_id: &str,
    page: PageRequest,
) -> Result<Page<ApiKey>> {
    let builder = client
        .get(api_keys_url(base_url, org_id))
        .query(&page.query());
    send_json(client, auth, builder).await
}

pub async fn get_api_key(
    client: &Client,
    base_url: &str,
    auth: &DigestAuth,
    org_id: &str,
    key_id: &str,
) -> Result<ApiKey> {
    send_json(client, auth, client.get(api_key_url(base_url, org_id, key_id))).await
}

/// Addresses allowed to use one API key.
pub async fn list_api_key_whitelist(
    client: &Client,
    base_url: &str,
    auth: &DigestAuth,
    org_id: &str,
    key_id: &str,
    page: PageRequest,
) -> Result<Page<WhitelistEntry>> {
    let builder = client
        .get(format!("{}/whitelist", api_key_url(base_url, org_id, key_id)))
        .query(&page.query());
    send_json(client, auth, builder).await
}
