//! REST implementation of [`IdentityApi`]

use super::types::{IdentityApi, V1Envelope};
use crate::auth::AuthConfig;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::{HttpClient, HttpClientConfig, RequestConfig};
use crate::models::{
    App, AppQuery, Event, EventType, EventsQuery, NewUser, User, UserQuery, UserUpdate,
};
use crate::pagination::CursorPage;
use async_trait::async_trait;
use reqwest::Method;
use tracing::debug;

const TOKEN_PATH: &str = "/auth/oauth2/v2/token";
const USERS_PATH: &str = "/api/2/users";
const APPS_PATH: &str = "/api/2/apps";
const EVENTS_PATH: &str = "/api/1/events";
const EVENT_TYPES_PATH: &str = "/api/1/events/types";

/// Client for the OneLogin REST API
#[derive(Debug)]
pub struct OneLoginClient {
    http: HttpClient,
}

impl OneLoginClient {
    /// Build a client that authenticates with the configured credentials
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let base_url = config.base_url.trim_end_matches('/');

        let http_config = HttpClientConfig::builder()
            .base_url(base_url)
            .timeout(config.timeout)
            .log_requests(config.debug)
            .build();

        let auth = AuthConfig::client_credentials(
            format!("{base_url}{TOKEN_PATH}"),
            &config.client_id,
            &config.client_secret,
        );

        debug!(base_url, "Creating OneLogin client");
        Ok(Self {
            http: HttpClient::with_auth(http_config, auth)?,
        })
    }

    fn page_params(page: u32, limit: usize) -> RequestConfig {
        RequestConfig::new()
            .query("limit", limit.to_string())
            .query("page", page.to_string())
    }
}

#[async_trait]
impl IdentityApi for OneLoginClient {
    async fn get_users(&self, query: &UserQuery, page: u32, limit: usize) -> Result<Vec<User>> {
        let request = Self::page_params(page, limit)
            .query_opt("email", query.email.as_deref())
            .query_opt("username", query.username.as_deref())
            .query_opt("firstname", query.firstname.as_deref())
            .query_opt("lastname", query.lastname.as_deref())
            .query_opt("user_ids", query.id.as_deref());

        self.http.get_json(USERS_PATH, request).await
    }

    async fn update_user(&self, id: i64, update: &UserUpdate) -> Result<User> {
        let body = serde_json::to_value(update)?;
        self.http
            .request_json(
                Method::PUT,
                &format!("{USERS_PATH}/{id}"),
                RequestConfig::new().json(body),
            )
            .await
    }

    async fn create_user(&self, user: &NewUser) -> Result<User> {
        let body = serde_json::to_value(user)?;
        self.http
            .request_json(Method::POST, USERS_PATH, RequestConfig::new().json(body))
            .await
    }

    async fn get_apps(&self, query: &AppQuery, page: u32, limit: usize) -> Result<Vec<App>> {
        let request = Self::page_params(page, limit).query_opt("name", query.name.as_deref());
        self.http.get_json(APPS_PATH, request).await
    }

    async fn get_app_users(&self, app_id: i64, page: u32, limit: usize) -> Result<Vec<User>> {
        self.http
            .get_json(
                &format!("{APPS_PATH}/{app_id}/users"),
                Self::page_params(page, limit),
            )
            .await
    }

    async fn list_events(
        &self,
        query: &EventsQuery,
        cursor: Option<&str>,
        limit: usize,
    ) -> Result<CursorPage<Event>> {
        let mut request = RequestConfig::new()
            .query("limit", limit.to_string())
            .query_opt("after_cursor", cursor);
        for (key, value) in query.params() {
            request = request.query(key, value);
        }

        let envelope: V1Envelope<Vec<Event>> = self.http.get_json(EVENTS_PATH, request).await?;
        let next_cursor = envelope.pagination.after_cursor.clone();
        Ok(CursorPage::new(envelope.into_data()?, next_cursor))
    }

    async fn list_event_types(&self) -> Result<Vec<EventType>> {
        let envelope: V1Envelope<Vec<EventType>> = self
            .http
            .get_json(EVENT_TYPES_PATH, RequestConfig::new())
            .await?;
        envelope.into_data()
    }
}
