//! Project and organization API methods for [`AtlasClient`].
//!
//! Unlike most resources these are not scoped to the configured project:
//! project ids are passed explicitly.

use futures::stream::BoxStream;
use futures::{StreamExt, TryStreamExt};

use crate::client::{AtlasClient, confirm};
use crate::endpoints;
use crate::error::Result;
use crate::models::{AtlasUser, NewProject, Organization, Page, Project, TeamRoles};
use crate::pagination::{PageRequest, paginate};

impl AtlasClient {
    /// Every project the API key can see.
    pub fn projects_stream(&self, page: PageRequest) -> BoxStream<'_, Result<Project>> {
        paginate(page, move |p| {
            endpoints::list_projects(&self.http, &self.api_url, &self.auth, p)
        })
    }

    pub async fn list_projects(&self) -> Result<Vec<Project>> {
        self.projects_stream(PageRequest::default())
            .try_collect()
            .await
    }

    pub async fn projects_page(&self, page: PageRequest) -> Result<Page<Project>> {
        endpoints::list_projects(&self.http, &self.api_url, &self.auth, page).await
    }

    pub async fn get_project(&self, group_id: &str) -> Result<Project> {
        endpoints::get_project(&self.http, &self.api_url, &self.auth, group_id).await
    }

    pub async fn get_project_by_name(&self, name: &str) -> Result<Project> {
        endpoints::get_project_by_name(&self.http, &self.api_url, &self.auth, name).await
    }

    pub async fn create_project(&self, project: &NewProject) -> Result<Project> {
        tracing::info!(name = %project.name, org_id = %project.org_id, "Creating project");
        endpoints::create_project(&self.http, &self.api_url, &self.auth, project).await
    }

    /// Delete a project. Nothing is sent unless `are_you_sure` is true.
    pub async fn delete_project(&self, group_id: &str, are_you_sure: bool) -> Result<()> {
        confirm(are_you_sure, &format!("Deleting project {group_id}"))?;
        tracing::warn!(%group_id, "Deleting project");
        endpoints::delete_project(&self.http, &self.api_url, &self.auth, group_id).await
    }

    /// Atlas users with access to a project.
    pub async fn project_users(&self, group_id: &str) -> Result<Vec<AtlasUser>> {
        paginate(PageRequest::default(), move |p| {
            endpoints::project_users(&self.http, &self.api_url, &self.auth, group_id, p)
        })
        .try_collect()
        .await
    }

    /// Teams assigned to a project and their roles.
    pub async fn project_teams(&self, group_id: &str) -> Result<Vec<TeamRoles>> {
        paginate(PageRequest::default(), move |p| {
            endpoints::project_teams(&self.http, &self.api_url, &self.auth, group_id, p)
        })
        .try_collect()
        .await
    }

    pub fn organizations_stream(&self, page: PageRequest) -> BoxStream<'_, Result<Organization>> {
        paginate(page, move |p| {
            endpoints::list_organizations(&self.http, &self.api_url, &self.auth, p)
        })
    }

    pub async fn list_organizations(&self) -> Result<Vec<Organization>> {
        self.organizations_stream(PageRequest::default())
            .try_collect()
            .await
    }

    pub async fn get_organization(&self, org_id: &str) -> Result<Organization> {
        endpoints::get_organization(&self.http, &self.api_url, &self.auth, org_id).await
    }

    /// First organization named `name`, if any.
    pub async fn organization_by_name(&self, name: &str) -> Result<Option<Organization>> {
        let mut orgs = self
            .organizations_stream(PageRequest::default())
            .try_filter(|org| futures::future::ready(org.name == name))
            .boxed();
        orgs.try_next().await
    }

    /// Projects belonging to an organization.
    pub async fn organization_projects(&self, org_id: &str) -> Result<Vec<Project>> {
        paginate(PageRequest::default(), move |p| {
            endpoints::organization_projects(&self.http, &self.api_url, &self.auth, org_id, p)
        })
        .try_collect()
        .await
    }
}
