//! Authentication module
//!
//! Supports: OAuth2 client credentials
//!
//! The `Authenticator` obtains an access token the first time a request
//! needs one and keeps it for the lifetime of the client. Tokens are never
//! refreshed; a process run is expected to finish well within the token
//! lifetime.

mod authenticator;
mod types;

pub use authenticator::Authenticator;
pub use types::{AccessToken, AuthConfig};
