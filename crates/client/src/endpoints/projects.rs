//! Project (`/groups`) and organization (`/orgs`) endpoints.

use reqwest::Client;

use crate::auth::DigestAuth;
use crate::endpoints::{encode_path_segment, send_json, send_no_content};
use crate::error::Result;
use crate::models::{AtlasUser, NewProject, Organization, Page, Project, TeamRoles};
use crate::pagination::PageRequest;

fn project_url(base_url: &str, group_id: &str) -> String {
    format!("{}/groups/{}", base_url, encode_path_segment(group_id))
}

pub async fn list_projects(
    client: &Client,
    base_url: &str,
    auth: &DigestAuth,
    page: PageRequest,
) -> Result<Page<Project>> {
    let builder = client
        .get(format!("{}/groups", base_url))
        .query(&page.query());
    send_json(client, auth, builder).await
}

pub async fn get_project(
    client: &Client,
    base_url: &str,
    auth: &DigestAuth,
    group_id: &str,
) -> Result<Project> {
    send_json(client, auth, client.get(project_url(base_url, group_id))).await
}

pub async fn get_project_by_name(
    client: &Client,
    base_url: &str,
    auth: &DigestAuth,
    name: &str,
) -> Result<Project> {
    let url = format!("{}/groups/byName/{}", base_url, encode_path_segment(name));
    send_json(client, auth, client.get(url)).await
}

pub async fn create_project(
    client: &Client,
    base_url: &str,
    auth: &DigestAuth,
    project: &NewProject,
) -> Result<Project> {
    let mut builder = client
        .post(format!("{}/groups", base_url))
        .json(&project.as_body());
    if let Some(owner) = &project.project_owner_id {
        builder = builder.query(&[("projectOwnerId", owner)]);
    }
    send_json(client, auth, builder).await
}

pub async fn delete_project(
    client: &Client,
    base_url: &str,
    auth: &DigestAuth,
    group_id: &str,
) -> Result<()> {
    send_no_content(client, auth, client.delete(project_url(base_url, group_id))).await
}

pub async fn project_users(
    client: &Client,
    base_url: &str,
    auth: &DigestAuth,
    group_id: &str,
    page: PageRequest,
) -> Result<Page<AtlasUser>> {
    let builder = client
        .get(format!("{}/users", project_url(base_url, group_id)))
        .query(&page.query());
    send_json(client, auth, builder).await
}

pub async fn project_teams(
    client: &Client,
    base_url: &str,
    auth: &DigestAuth,
    group_id: &str,
    page: PageRequest,
) -> Result<Page<TeamRoles>> {
    let builder = client
        .get(format!("{}/teams", project_url(base_url, group_id)))
        .query(&page.query());
    send_json(client, auth, builder).await
}

pub async fn list_organizations(
    client: &Client,
    base_url: &str,
    auth: &DigestAuth,
    page: PageRequest,
) -> Result<Page<Organization>> {
    let builder = client
        .get(format!("{}/orgs", base_url))
        .query(&page.query());
    send_json(client, auth, builder).await
}

pub async fn get_organization(
    client: &Client,
    base_url: &str,
    auth: &DigestAuth,
    org_id: &str,
) -> Result<Organization> {
    let url = format!("{}/orgs/{}", base_url, encode_path_segment(org_id));
    send_json(client, auth, client.get(url)).await
}

pub async fn organization_projects(
    client: &Client,
    base_url: &str,
    auth: &DigestAuth,
    org_id: &str,
    page: PageRequest,
) -> Result<Page<Project>> {
    let url = format!("{}/orgs/{}/groups", base_url, encode_path_segment(org_id));
    let builder = client.get(url).query(&page.query());
    send_json(client, auth, builder).await
}
