//! List command implementation.
//!
//! Responsibilities:
//! - Fetch one resource (`--id`) or every resource of the selected type
//! - Format output via shared formatters
//!
//! Does NOT handle:
//! - Direct REST API calls (handled by client crate)
//! - Output formatting details (see formatters module)
//!
//! Invariants:
//! - A full listing ends with an `N <resource>(s)` count line; a single
//!   resource does not
//! - A process `--id` matches either its Atlas id or `hostname:port`

use anyhow::{Context, Result};
use atlas_client::{ApiErrorBody, AtlasClient, ClientError};
use tracing::{info, warn};

use crate::args::Resource;
use crate::formatters::{Formatter, Rendered, get_formatter, render_all};
use crate::formatters::{OutputFormat, ResourceDisplay};

/// What a list invocation fetched.
#[derive(Debug)]
pub enum Listing {
    One(Rendered),
    All(Vec<Rendered>),
}

pub async fn run(
    client: &AtlasClient,
    resource: Resource,
    id: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    let listing = fetch(client, resource, id).await?;
    let output = format_listing(get_formatter(format).as_ref(), resource, &listing)?;
    print!("{output}");
    Ok(())
}

/// Render a listing, appending the count line for full listings.
pub fn format_listing(
    formatter: &dyn Formatter,
    resource: Resource,
    listing: &Listing,
) -> Result<String> {
    match listing {
        Listing::One(item) => formatter.format_resource(item),
        Listing::All(items) => {
            let mut out = formatter.format_resources(items)?;
            out.push_str(&format!("{} {resource}(s)\n", items.len()));
            Ok(out)
        }
    }
}

fn one<T: ResourceDisplay>(resource: T) -> Result<Listing> {
    Ok(Listing::One(Rendered::from_resource(&resource)?))
}

fn all<T: ResourceDisplay>(resources: Vec<T>) -> Result<Listing> {
    Ok(Listing::All(render_all(&resources)?))
}

async fn fetch(client: &AtlasClient, resource: Resource, id: Option<&str>) -> Result<Listing> {
    info!(%resource, id, "Listing");

    match (resource, id) {
        (Resource::Organization, Some(id)) => one(
            client
                .get_organization(id)
                .await
                .with_context(|| format!("Failed to get organization '{id}'"))?,
        ),
        (Resource::Organization, None) => all(
            client
                .list_organizations()
                .await
                .context("Failed to list organizations")?,
        ),
        (Resource::Project, Some(id)) => one(
            client
                .get_project(id)
                .await
                .with_context(|| format!("Failed to get project '{id}'"))?,
        ),
        (Resource::Project, None) => all(
            client
                .list_projects()
                .await
                .context("Failed to list projects")?,
        ),
        (Resource::Cluster, Some(name)) => one(
            client
                .get_cluster(name)
                .await
                .with_context(|| format!("Failed to get cluster '{name}'"))?,
        ),
        (Resource::Cluster, None) => all(
            client
                .list_clusters()
                .await
                .context("Failed to list clusters")?,
        ),
        (Resource::DatabaseUser, Some(username)) => one(
            client
                .get_database_user(username)
                .await
                .with_context(|| format!("Failed to get database user '{username}'"))?,
        ),
        (Resource::DatabaseUser, None) => all(
            client
                .list_database_users()
                .await
                .context("Failed to list database users")?,
        ),
        (Resource::Alert, Some(id)) => one(
            client
                .get_alert(id)
                .await
                .with_context(|| format!("Failed to get alert '{id}'"))?,
        ),
        (Resource::Alert, None) => all(
            client
                .list_alerts(None)
                .await
                .context("Failed to list alerts")?,
        ),
        (Resource::Process, Some(id)) => {
            let processes = client
                .list_processes()
                .await
                .context("Failed to list processes")?;
            let process = processes
                .into_iter()
                .find(|p| p.id == id || p.process_id() == id)
                .ok_or_else(|| process_not_found(id))?;
            one(process)
        }
        (Resource::Process, None) => all(
            client
                .list_processes()
                .await
                .context("Failed to list processes")?,
        ),
        (Resource::Whitelist, Some(entry)) => one(
            client
                .get_whitelist_entry(entry)
                .await
                .with_context(|| format!("Failed to get whitelist entry '{entry}'"))?,
        ),
        (Resource::Whitelist, None) => all(
            client
                .list_whitelist()
                .await
                .context("Failed to list whitelist entries")?,
        ),
        (Resource::MaintenanceWindow, id) => {
            if id.is_some() {
                warn!("--id is ignored for maintenance-window; a project has exactly one");
            }
            let window = client
                .maintenance_window()
                .await
                .context("Failed to get maintenance window")?;
            all(vec![window])
        }
    }
}

/// Atlas has no single-process endpoint; report a miss the way a 404 would.
fn process_not_found(id: &str) -> ClientError {
    ClientError::NotFound(ApiErrorBody {
        status: 404,
        detail: Some(format!("No process with id or host:port '{id}'")),
        ..ApiErrorBody::default()
    })
}
