//! User operations

use super::OneLogin;
use crate::api::IdentityApi;
use crate::error::{Error, Result, ResultExt};
use crate::models::{NewUser, User, UserQuery, UserUpdate};
use crate::pagination::paginate;
use chrono::Utc;
use tracing::{debug, info};

/// Status value of an active user
const STATUS_ACTIVE: i32 = 1;

impl<A: IdentityApi> OneLogin<A> {
    /// All users matching the query
    pub async fn get_users(&self, query: &UserQuery) -> Result<Vec<User>> {
        let users = paginate(self.page_size, |page| {
            self.api.get_users(query, page, self.page_size)
        })
        .await?;
        debug!(count = users.len(), "Fetched users");
        Ok(users)
    }

    /// The one user matching a non-empty query
    pub async fn find_single_user(&self, query: &UserQuery) -> Result<User> {
        if query.is_empty() {
            return Err(Error::EmptyFilter);
        }

        let mut users = self.get_users(query).await?;
        match users.len() {
            0 => Err(Error::NoMatch),
            1 => Ok(users.remove(0)),
            count => Err(Error::AmbiguousMatch { count }),
        }
    }

    /// Change the email address of the single user matching the query
    pub async fn update_user_email(&self, query: &UserQuery, email: &str) -> Result<User> {
        let user = self.find_single_user(query).await?;
        info!(user_id = user.id, "Updating user email");
        self.api.update_user(user.id, &UserUpdate::email(email)).await
    }

    /// Create a user and mark it active
    pub async fn create_user(&self, user: &NewUser) -> Result<User> {
        let created = self.api.create_user(user).await?;
        info!(user_id = created.id, "Created user");

        let activate = UserUpdate {
            status: Some(STATUS_ACTIVE),
            last_login: Some(Utc::now()),
            ..UserUpdate::default()
        };
        self.api
            .update_user(created.id, &activate)
            .await
            .with_context(|| format!("Failed to activate user {}", created.id))
    }
}
