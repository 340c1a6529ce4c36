//! Database user endpoints under `/groups/{GROUP-ID}/databaseUsers`.

use atlas_config::constants::DEFAULT_AUTH_DATABASE;
use reqwest::Client;

use crate::auth::DigestAuth;
use crate::endpoints::{encode_path_segment, send_json, send_no_content};
use crate::error::Result;
use crate::models::{DatabaseUser, DatabaseUserPermissions, DatabaseUserUpdate, Page};
use crate::pagination::PageRequest;

fn users_url(base_url: &str, group_id: &str) -> String {
    format!(
        "{}/groups/{}/databaseUsers",
        base_url,
        encode_path_segment(group_id)
    )
}

/// Users always authenticate against `admin` in Atlas.
fn user_url(base_url: &str, group_id: &str, username: &str) -> String {
    format!(
        "{}/{}/{}",
        users_url(base_url, group_id),
        DEFAULT_AUTH_DATABASE,
        encode_path_segment(username)
    )
}

pub async fn list_database_users(
    client: &Client,
    base_url: &str,
    auth: &DigestAuth,
    group_id: &str,
    page: PageRequest,
) -> Result<Page<DatabaseUser>> {
    let builder = client
        .get(users_url(base_url, group_id))
        .query(&page.query());
    send_json(client, auth, builder).await
}

pub async fn get_database_user(
    client: &Client,
    base_url: &str,
    auth: &DigestAuth,
    group_id: &str,
    username: &str,
) -> Result<DatabaseUser> {
    let builder = client.get(user_url(base_url, group_id, username));
    send_json(client, auth, builder).await
}

pub async fn create_database_user(
    client: &Client,
    base_url: &str,
    auth: &DigestAuth,
    group_id: &str,
    user: &DatabaseUserPermissions,
) -> Result<DatabaseUser> {
    let builder = client
        .post(users_url(base_url, group_id))
        .json(&user.as_body());
    send_json(client, auth, builder).await
}

pub async fn update_database_user(
    client: &Client,
    base_url: &str,
    auth: &DigestAuth,
    group_id: &str,
    username: &str,
    update: &DatabaseUserUpdate,
) -> Result<DatabaseUser> {
    let builder = client
        .patch(user_url(base_url, group_id, username))
        .json(&update.as_body()?);
    send_json(client, auth, builder).await
}

pub async fn delete_database_user(
    client: &Client,
    base_url: &str,
    auth: &DigestAuth,
    group_id: &str,
    username: &str,
) -> Result<()> {
    let builder = client.delete(user_url(base_url, group_id, username));
    send_no_content(client, auth, builder).await
}
