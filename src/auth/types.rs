//! Auth configuration types

use chrono::{DateTime, TimeDelta, Utc};

/// OAuth2 client credentials
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Token endpoint URL
    pub token_url: String,
    /// Client ID
    pub client_id: String,
    /// Client secret
    pub client_secret: String,
}

impl AuthConfig {
    /// Create a client credentials config
    pub fn client_credentials(
        token_url: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        Self {
            token_url: token_url.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }
}

/// Access token obtained from the token endpoint
#[derive(Debug, Clone)]
pub struct AccessToken {
    /// The access token
    pub token: String,
    /// When the token expires, if the server said so and it is representable
    pub expires_at: Option<DateTime<Utc>>,
}

impl AccessToken {
    /// Create a new token
    pub fn new(token: String, expires_at: Option<DateTime<Utc>>) -> Self {
        Self { token, expires_at }
    }

    /// Create a token that expires in N seconds from now.
    ///
    /// A lifetime too large for the clock leaves `expires_at` unset.
    pub fn expires_in(token: String, seconds: i64) -> Self {
        let expires_at =
            TimeDelta::try_seconds(seconds).and_then(|d| Utc::now().checked_add_signed(d));
        Self { token, expires_at }
    }
}
