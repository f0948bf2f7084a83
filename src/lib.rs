// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # onecli
//!
//! A command-line client for the OneLogin identity API: users, apps, events
//! and event types.
//!
//! ## Features
//!
//! - **Users**: search, single-target email change, create and activate
//! - **Apps**: list apps, optionally with their assigned users
//! - **Events**: cursor-paginated search with event type names resolved to ids
//! - **Output**: YAML, JSON or CSV on stdout
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use onecli::{ClientConfig, OneLogin, OneLoginClient, Result};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<()> {
//!     let config = ClientConfig::from_env()?;
//!     let service = OneLogin::new(OneLoginClient::new(&config)?);
//!
//!     let users = service.get_users(&Default::default()).await?;
//!     println!("{} users", users.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  cli: clap commands → Runner → output (yaml/json/csv)    │
//! └──────────────────────────────────────────────────────────┘
//!                              │
//! ┌──────────────────────────────────────────────────────────┐
//! │  service: OneLogin<A: IdentityApi>                       │
//! │  guards · pagination · event type cache                  │
//! └──────────────────────────────────────────────────────────┘
//!                              │
//! ┌──────────────┬─────────────┴────────┬────────────────────┐
//! │ api          │ http                 │ auth               │
//! │ REST routes  │ reqwest, no retries  │ client credentials │
//! └──────────────┴──────────────────────┴────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Environment configuration
pub mod config;

/// Authentication
pub mod auth;

/// HTTP client
pub mod http;

/// Provider resources
pub mod models;

/// Identity provider API
pub mod api;

/// Page and cursor pagination
pub mod pagination;

/// YAML, JSON and CSV rendering
pub mod output;

/// User, app and event operations
pub mod service;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use api::{IdentityApi, OneLoginClient};
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use output::OutputFormat;
pub use service::OneLogin;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
