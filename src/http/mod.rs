//! HTTP client module
//!
//! Provides the HTTP client used to talk to the identity provider.
//!
//! # Features
//!
//! - **Authentication**: Integration with auth module
//! - **Request logging**: Method and URL of every request at debug level,
//!   enabled with `ONECLI_DEBUG`

mod client;

pub use client::{
    HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig, REQUEST_LOG_TARGET,
};

#[cfg(test)]
pub(crate) mod log_capture;
