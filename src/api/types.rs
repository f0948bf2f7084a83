//! API trait and wire envelopes

use crate::error::{Error, Result};
use crate::models::{
    App, AppQuery, Event, EventType, EventsQuery, NewUser, User, UserQuery, UserUpdate,
};
use crate::pagination::CursorPage;
use async_trait::async_trait;
use serde::Deserialize;

// ============================================================================
// IdentityApi Trait
// ============================================================================

/// Operations the service layer needs from the identity provider.
///
/// Each call maps to exactly one request. Pagination is driven by the
/// caller.
#[async_trait]
pub trait IdentityApi: Send + Sync {
    /// One page of users matching the query
    async fn get_users(&self, query: &UserQuery, page: u32, limit: usize) -> Result<Vec<User>>;

    /// Apply a partial update to a user
    async fn update_user(&self, id: i64, update: &UserUpdate) -> Result<User>;

    /// Create a user
    async fn create_user(&self, user: &NewUser) -> Result<User>;

    /// One page of apps matching the query
    async fn get_apps(&self, query: &AppQuery, page: u32, limit: usize) -> Result<Vec<App>>;

    /// One page of users assigned to an app
    async fn get_app_users(&self, app_id: i64, page: u32, limit: usize) -> Result<Vec<User>>;

    /// One page of events, continuing from `cursor` when given
    async fn list_events(
        &self,
        query: &EventsQuery,
        cursor: Option<&str>,
        limit: usize,
    ) -> Result<CursorPage<Event>>;

    /// Every known event type
    async fn list_event_types(&self) -> Result<Vec<EventType>>;
}

// ============================================================================
// V1 Envelopes
// ============================================================================

/// Status block of a v1 response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct V1Status {
    #[serde(default)]
    pub error: bool,
    #[serde(default)]
    pub code: i64,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Pagination block of the v1 events response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventsPagination {
    #[serde(default)]
    pub before_cursor: Option<String>,
    #[serde(default)]
    pub after_cursor: Option<String>,
    #[serde(default)]
    pub previous_link: Option<String>,
    #[serde(default)]
    pub next_link: Option<String>,
}

/// Wrapper around every v1 payload
#[derive(Debug, Clone, Deserialize)]
pub struct V1Envelope<T> {
    #[serde(default)]
    pub status: V1Status,
    #[serde(default)]
    pub pagination: EventsPagination,
    pub data: Option<T>,
}

impl<T> V1Envelope<T> {
    /// Unwrap the payload, turning an error status into [`Error::Api`]
    pub fn into_data(self) -> Result<T> {
        if self.status.error {
            return Err(Error::Api {
                code: self.status.code,
                message: self
                    .status
                    .message
                    .or(self.status.kind)
                    .unwrap_or_else(|| "unknown error".to_string()),
            });
        }
        self.data.ok_or_else(|| Error::Api {
            code: self.status.code,
            message: "response has no data".to_string(),
        })
    }
}
