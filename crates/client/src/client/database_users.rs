//! Database user API methods for [`AtlasClient`].

use futures::TryStreamExt;
use futures::stream::BoxStream;

use crate::client::AtlasClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{DatabaseUser, DatabaseUserPermissions, DatabaseUserUpdate, Page};
use crate::pagination::{PageRequest, paginate};

impl AtlasClient {
    pub fn database_users_stream(&self, page: PageRequest) -> BoxStream<'_, Result<DatabaseUser>> {
        paginate(page, move |p| async move {
            let group = self.require_group()?;
            endpoints::list_database_users(&self.http, &self.api_url, &self.auth, group, p).await
        })
    }

    pub async fn list_database_users(&self) -> Result<Vec<DatabaseUser>> {
        self.database_users_stream(PageRequest::default())
            .try_collect()
            .await
    }

    pub async fn database_users_page(&self, page: PageRequest) -> Result<Page<DatabaseUser>> {
        let group = self.require_group()?;
        endpoints::list_database_users(&self.http, &self.api_url, &self.auth, group, page).await
    }

    pub async fn get_database_user(&self, username: &str) -> Result<DatabaseUser> {
        let group = self.require_group()?;
        endpoints::get_database_user(&self.http, &self.api_url, &self.auth, group, username).await
    }

    pub async fn create_database_user(&self, user: &DatabaseUserPermissions) -> Result<DatabaseUser> {
        let group = self.require_group()?;
        tracing::info!(username = %user.username, "Creating database user");
        endpoints::create_database_user(&self.http, &self.api_url, &self.auth, group, user).await
    }

    /// Change a user's roles and/or password.
    pub async fn update_database_user(
        &self,
        username: &str,
        update: &DatabaseUserUpdate,
    ) -> Result<DatabaseUser> {
        let group = self.require_group()?;
        endpoints::update_database_user(
            &self.http,
            &self.api_url,
            &self.auth,
            group,
            username,
            update,
        )
        .await
    }

    pub async fn delete_database_user(&self, username: &str) -> Result<()> {
        let group = self.require_group()?;
        tracing::info!(%username, "Deleting database user");
        endpoints::delete_database_user(&self.http, &self.api_url, &self.auth, group, username)
            .await
    }
}
