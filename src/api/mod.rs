//! Identity provider API
//!
//! [`IdentityApi`] is the seam between the service layer and the provider.
//! [`OneLoginClient`] implements it over REST; tests substitute an in-memory
//! double.

mod client;
mod types;

pub use client::OneLoginClient;
pub use types::{EventsPagination, IdentityApi, V1Envelope, V1Status};

#[cfg(test)]
pub(crate) mod mock;

#[cfg(test)]
mod tests;
