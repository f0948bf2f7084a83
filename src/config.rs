//! Client configuration
//!
//! The client is configured entirely from the environment. Values are read
//! through a lookup function so that tests never have to mutate the process
//! environment.

use crate::error::{Error, Result};
use std::time::Duration;
use url::Url;

/// Environment variable holding the API client id
pub const ENV_CLIENT_ID: &str = "ONELOGIN_CLIENT_ID";
/// Environment variable holding the API client secret
pub const ENV_CLIENT_SECRET: &str = "ONELOGIN_CLIENT_SECRET";
/// Environment variable holding the account subdomain
pub const ENV_SUBDOMAIN: &str = "ONELOGIN_SUBDOMAIN";
/// Environment variable overriding the API base URL
pub const ENV_BASE_URL: &str = "ONELOGIN_BASE_URL";
/// Environment variable holding the request timeout in seconds
pub const ENV_TIMEOUT: &str = "ONELOGIN_TIMEOUT";
/// Environment variable enabling request logging
pub const ENV_DEBUG: &str = "ONECLI_DEBUG";

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for the identity provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API base URL, e.g. `https://acme.onelogin.com`
    pub base_url: String,
    /// OAuth2 client id
    pub client_id: String,
    /// OAuth2 client secret
    pub client_secret: String,
    /// Request timeout
    pub timeout: Duration,
    /// Log every outbound request (method + URL)
    pub debug: bool,
}

impl ClientConfig {
    /// Create a config for an explicit base URL
    pub fn new(
        base_url: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            timeout: DEFAULT_TIMEOUT,
            debug: false,
        }
    }

    /// Set the request timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Enable or disable request logging
    #[must_use]
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let client_id = get(ENV_CLIENT_ID).ok_or_else(|| Error::missing_field(ENV_CLIENT_ID))?;
        let client_secret =
            get(ENV_CLIENT_SECRET).ok_or_else(|| Error::missing_field(ENV_CLIENT_SECRET))?;

        let base_url = match (get(ENV_BASE_URL), get(ENV_SUBDOMAIN)) {
            (Some(url), _) => url,
            (None, Some(subdomain)) => subdomain_url(&subdomain)?,
            (None, None) => return Err(Error::missing_field(ENV_SUBDOMAIN)),
        };
        Url::parse(&base_url)?;

        let timeout = match get(ENV_TIMEOUT) {
            Some(raw) => {
                let secs = raw.trim().parse::<u64>().map_err(|e| {
                    Error::invalid_config(ENV_TIMEOUT, format!("'{raw}' is not a number: {e}"))
                })?;
                if secs == 0 {
                    return Err(Error::invalid_config(ENV_TIMEOUT, "must be at least 1 second"));
                }
                Duration::from_secs(secs)
            }
            None => DEFAULT_TIMEOUT,
        };

        Ok(Self {
            base_url,
            client_id,
            client_secret,
            timeout,
            debug: get(ENV_DEBUG).is_some(),
        })
    }
}

/// Build the API base URL for an account subdomain
fn subdomain_url(subdomain: &str) -> Result<String> {
    let subdomain = subdomain.trim();
    if subdomain.contains(['/', ':', '.']) {
        return Err(Error::invalid_config(
            ENV_SUBDOMAIN,
            format!("'{subdomain}' must be a bare subdomain"),
        ));
    }
    Ok(format!("https://{subdomain}.onelogin.com"))
}
