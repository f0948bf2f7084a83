//! Pagination module
//!
//! Supports: Page Number, Cursor
//!
//! # Overview
//!
//! Both strategies drive a caller-supplied fetch function until the data
//! source signals the end, concatenating every page in fetch order. The
//! first fetch error aborts the whole call and no partial results escape.

mod strategies;
mod types;

pub use strategies::{paginate, paginate_cursor};
pub use types::{CursorPage, PaginationState, DEFAULT_PAGE_SIZE, FIRST_PAGE};

#[cfg(test)]
mod tests;
