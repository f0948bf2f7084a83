//! App operations

use super::OneLogin;
use crate::api::IdentityApi;
use crate::error::Result;
use crate::models::{App, AppDetails, AppQuery, User};
use crate::pagination::paginate;
use tracing::debug;

impl<A: IdentityApi> OneLogin<A> {
    /// All apps matching the query
    pub async fn get_apps(&self, query: &AppQuery) -> Result<Vec<App>> {
        paginate(self.page_size, |page| {
            self.api.get_apps(query, page, self.page_size)
        })
        .await
    }

    /// All users assigned to an app
    pub async fn get_app_users(&self, app_id: i64) -> Result<Vec<User>> {
        paginate(self.page_size, |page| {
            self.api.get_app_users(app_id, page, self.page_size)
        })
        .await
    }

    /// Apps matching the query, each with its assigned users.
    ///
    /// Apps without an id are returned with an empty user list. A failure
    /// fetching any app's users fails the whole call.
    pub async fn get_apps_details(&self, query: &AppQuery) -> Result<Vec<AppDetails>> {
        let apps = self.get_apps(query).await?;
        let mut details = Vec::with_capacity(apps.len());

        for app in apps {
            let users = match app.id {
                Some(id) => self.get_app_users(id).await?,
                None => Vec::new(),
            };
            debug!(app_id = ?app.id, users = users.len(), "Fetched app users");
            details.push(AppDetails { app, users });
        }

        Ok(details)
    }
}
