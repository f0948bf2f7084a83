//! Pagination types

/// Records requested per page when the caller does not choose
pub const DEFAULT_PAGE_SIZE: usize = 1000;

/// Page numbers start here
pub const FIRST_PAGE: u32 = 1;

/// One page of a cursor-paginated listing
#[derive(Debug, Clone, PartialEq)]
pub struct CursorPage<T> {
    /// Records on this page
    pub records: Vec<T>,
    /// Continuation token for the following page
    pub next_cursor: Option<String>,
}

impl<T> CursorPage<T> {
    /// Create a page
    pub fn new(records: Vec<T>, next_cursor: Option<String>) -> Self {
        Self {
            records,
            next_cursor,
        }
    }

    /// A page with no continuation
    pub fn last(records: Vec<T>) -> Self {
        Self::new(records, None)
    }

    /// Cursor to request next, `None` once the listing is exhausted
    pub fn continuation(&self) -> Option<&str> {
        self.next_cursor.as_deref().filter(|c| !c.is_empty())
    }
}

/// State tracked while paginating
#[derive(Debug, Clone, Default)]
pub struct PaginationState {
    /// Page number of the next request
    pub page: u32,
    /// Cursor for the next request
    pub cursor: Option<String>,
    /// Total records fetched so far
    pub total_fetched: u64,
    /// Number of fetch calls made
    pub requests: u32,
    /// Is pagination complete?
    pub done: bool,
}

impl PaginationState {
    /// Create a new pagination state
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state with a starting page
    pub fn with_page(page: u32) -> Self {
        Self {
            page,
            ..Default::default()
        }
    }

    /// Mark pagination as complete
    pub fn mark_done(&mut self) {
        self.done = true;
    }

    /// Increment page number
    pub fn next_page(&mut self) {
        self.page += 1;
    }

    /// Set cursor
    pub fn set_cursor(&mut self, cursor: String) {
        self.cursor = Some(cursor);
    }

    /// Record a completed fetch
    pub fn add_fetched(&mut self, count: u64) {
        self.requests += 1;
        self.total_fetched += count;
    }
}
