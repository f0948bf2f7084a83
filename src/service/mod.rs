//! Service layer
//!
//! [`OneLogin`] turns user-level requests into paginated [`IdentityApi`]
//! calls and enforces the guard rules: exactly-one-match for mutations and
//! mutually exclusive event type filters.

mod apps;
mod events;
mod users;

pub use events::{EventFilter, EventTypeIndex};

use crate::api::IdentityApi;
use crate::pagination::DEFAULT_PAGE_SIZE;
use tokio::sync::OnceCell;

/// High level client over an [`IdentityApi`]
pub struct OneLogin<A> {
    api: A,
    page_size: usize,
    event_types: OnceCell<EventTypeIndex>,
}

impl<A: IdentityApi> OneLogin<A> {
    /// Create a service using the default page size
    pub fn new(api: A) -> Self {
        Self {
            api,
            page_size: DEFAULT_PAGE_SIZE,
            event_types: OnceCell::new(),
        }
    }

    /// Override the number of records requested per page
    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Records requested per page
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// The underlying API
    pub fn api(&self) -> &A {
        &self.api
    }
}

impl<A> std::fmt::Debug for OneLogin<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OneLogin")
            .field("page_size", &self.page_size)
            .field("event_types_cached", &self.event_types.initialized())
            .finish_non_exhaustive()
    }
}
