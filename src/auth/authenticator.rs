//! Authenticator implementation
//!
//! Handles applying authentication to requests and fetching the access token.

use super::types::{AccessToken, AuthConfig};
use crate::error::{Error, Result};
use crate::http::REQUEST_LOG_TARGET;
use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use serde_json::json;
use tokio::sync::OnceCell;
use tracing::debug;

/// Authenticator handles applying authentication to HTTP requests
pub struct Authenticator {
    /// Auth configuration
    config: AuthConfig,
    /// Token fetched at most once
    token: OnceCell<AccessToken>,
    /// HTTP client for token requests
    http_client: Client,
    /// Log the token request like any other outbound request
    log_requests: bool,
}

impl Authenticator {
    /// Create an authenticator that fetches its token with `http_client`
    pub fn with_client(config: AuthConfig, http_client: Client) -> Self {
        Self {
            config,
            token: OnceCell::new(),
            http_client,
            log_requests: false,
        }
    }

    /// Enable or disable logging of the token request
    #[must_use]
    pub fn log_requests(mut self, enabled: bool) -> Self {
        self.log_requests = enabled;
        self
    }

    /// Attach the bearer token to a request builder
    pub async fn apply(&self, req: RequestBuilder) -> Result<RequestBuilder> {
        let token = self.access_token().await?;
        Ok(req.bearer_auth(&token.token))
    }

    /// Get the access token, fetching it on first use
    pub async fn access_token(&self) -> Result<&AccessToken> {
        self.token.get_or_try_init(|| self.fetch_token()).await
    }

    /// Fetch a token using the client credentials flow
    async fn fetch_token(&self) -> Result<AccessToken> {
        let AuthConfig {
            token_url,
            client_id,
            client_secret,
        } = &self.config;

        let req = self
            .http_client
            .post(token_url)
            .basic_auth(client_id, Some(client_secret))
            .json(&json!({ "grant_type": "client_credentials" }))
            .build()?;
        if self.log_requests {
            debug!(target: REQUEST_LOG_TARGET, method = %req.method(), url = %req.url(), "Request");
        }

        let response = self.http_client.execute(req).await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::OAuth2 {
                message: format!("Token request failed with status {status}: {body}"),
            });
        }

        let token_response: TokenResponse = response.json().await?;
        let token = token_response.into_access_token();
        debug!(expires_at = ?token.expires_at, "Access token acquired");
        Ok(token)
    }
}

impl std::fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Authenticator")
            .field("token_url", &self.config.token_url)
            .field("has_token", &self.token.initialized())
            .finish_non_exhaustive()
    }
}

/// OAuth2 token response
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<i64>,
}

impl TokenResponse {
    fn into_access_token(self) -> AccessToken {
        match self.expires_in {
            Some(secs) => AccessToken::expires_in(self.access_token, secs),
            None => AccessToken::new(self.access_token, None),
        }
    }
}
