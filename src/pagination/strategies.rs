//! Pagination strategy implementations

use super::types::{CursorPage, PaginationState, FIRST_PAGE};
use crate::error::{Error, Result};
use std::future::Future;
use tracing::debug;

// ============================================================================
// Page Number Pagination
// ============================================================================

/// Fetch numbered pages until one comes back short.
///
/// `fetch` receives the page number, starting at [`FIRST_PAGE`]. Stops after
/// a page holding zero records or fewer than `limit`.
pub async fn paginate<T, F, Fut>(limit: usize, mut fetch: F) -> Result<Vec<T>>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<Vec<T>>>,
{
    if limit == 0 {
        return Err(Error::invalid_argument("page size must be at least 1"));
    }

    let mut state = PaginationState::with_page(FIRST_PAGE);
    let mut records = Vec::new();

    while !state.done {
        let page = fetch(state.page).await?;
        let count = page.len();
        state.add_fetched(count as u64);
        debug!(page = state.page, count, total = state.total_fetched, "Fetched page");

        records.extend(page);

        if count == 0 || count < limit {
            state.mark_done();
        } else {
            state.next_page();
        }
    }

    Ok(records)
}

// ============================================================================
// Cursor Pagination
// ============================================================================

/// Follow continuation cursors until the source stops returning one.
///
/// The first call receives `None`; each later call receives the previous
/// page's cursor. An absent or empty cursor ends the listing.
pub async fn paginate_cursor<T, F, Fut>(mut fetch: F) -> Result<Vec<T>>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<CursorPage<T>>>,
{
    let mut state = PaginationState::new();
    let mut records = Vec::new();

    while !state.done {
        let page = fetch(state.cursor.take()).await?;
        state.add_fetched(page.records.len() as u64);
        debug!(
            request = state.requests,
            count = page.records.len(),
            total = state.total_fetched,
            "Fetched cursor page"
        );

        match page.continuation() {
            Some(cursor) => state.set_cursor(cursor.to_string()),
            None => state.mark_done(),
        }
        records.extend(page.records);
    }

    Ok(records)
}
