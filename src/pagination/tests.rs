//! Tests for pagination module

use super::*;
use crate::error::{Error, Result};
use std::future::ready;
use test_case::test_case;

/// Pages of `limit` sequential numbers, `full` times, then a page of `tail`
fn numbered_pages(limit: usize, full: usize, tail: usize) -> Vec<Vec<usize>> {
    let mut next = 0;
    let mut pages = Vec::new();
    for size in std::iter::repeat(limit).take(full).chain([tail]) {
        pages.push((next..next + size).collect());
        next += size;
    }
    pages
}

// ============================================================================
// CursorPage Tests
// ============================================================================

#[test]
fn test_cursor_page_continuation() {
    assert_eq!(
        CursorPage::new(vec![1], Some("abc".to_string())).continuation(),
        Some("abc")
    );
    assert_eq!(CursorPage::new(vec![1], Some(String::new())).continuation(), None);
    assert_eq!(CursorPage::<i32>::last(vec![]).continuation(), None);
}

// ============================================================================
// PaginationState Tests
// ============================================================================

#[test]
fn test_pagination_state_mutations() {
    let mut state = PaginationState::with_page(FIRST_PAGE);
    assert_eq!(state.page, 1);
    assert!(!state.done);

    state.next_page();
    assert_eq!(state.page, 2);

    state.add_fetched(10);
    state.add_fetched(5);
    assert_eq!(state.total_fetched, 15);
    assert_eq!(state.requests, 2);

    state.set_cursor("c1".to_string());
    assert_eq!(state.cursor.as_deref(), Some("c1"));

    state.mark_done();
    assert!(state.done);
}

// ============================================================================
// Page Number Pagination Tests
// ============================================================================

#[test_case(3, 0, 2 ; "single short page")]
#[test_case(3, 0, 0 ; "single empty page")]
#[test_case(3, 2, 1 ; "two full pages then short")]
#[test_case(3, 4, 0 ; "full pages then empty")]
#[test_case(1, 5, 0 ; "page size one")]
#[tokio::test]
async fn test_paginate_collects_all_pages(limit: usize, full: usize, tail: usize) {
    let pages = numbered_pages(limit, full, tail);
    let mut requested = Vec::new();

    let records = paginate(limit, |page| {
        requested.push(page);
        ready(Ok(pages[(page - FIRST_PAGE) as usize].clone()))
    })
    .await
    .unwrap();

    let expected: Vec<usize> = (0..full * limit + tail).collect();
    assert_eq!(records, expected);
    assert_eq!(requested.len(), full + 1);
    assert_eq!(requested, (1..=(full as u32 + 1)).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_paginate_error_discards_pages() {
    let mut calls = 0;

    let result: Result<Vec<u32>> = paginate(2, |page| {
        calls += 1;
        if page == 3 {
            ready(Err(Error::HttpStatus {
                status: 500,
                body: "boom".to_string(),
            }))
        } else {
            ready(Ok(vec![page, page]))
        }
    })
    .await;

    assert!(matches!(result, Err(Error::HttpStatus { status: 500, .. })));
    assert_eq!(calls, 3);
}

#[tokio::test]
async fn test_paginate_rejects_zero_limit() {
    let mut calls = 0;
    let result: Result<Vec<u32>> = paginate(0, |_| {
        calls += 1;
        ready(Ok(vec![]))
    })
    .await;

    assert!(matches!(result, Err(Error::InvalidArgument { .. })));
    assert_eq!(calls, 0);
}

// ============================================================================
// Cursor Pagination Tests
// ============================================================================

#[tokio::test]
async fn test_paginate_cursor_follows_cursors() {
    let mut seen = Vec::new();

    let records = paginate_cursor(|cursor: Option<String>| {
        seen.push(cursor.clone());
        let page = match cursor.as_deref() {
            None => CursorPage::new(vec![1, 2], Some("c2".to_string())),
            Some("c2") => CursorPage::new(vec![3], Some("c3".to_string())),
            Some(_) => CursorPage::last(vec![4, 5]),
        };
        ready(Ok(page))
    })
    .await
    .unwrap();

    assert_eq!(records, vec![1, 2, 3, 4, 5]);
    assert_eq!(
        seen,
        vec![None, Some("c2".to_string()), Some("c3".to_string())]
    );
}

#[tokio::test]
async fn test_paginate_cursor_empty_cursor_ends() {
    let mut calls = 0;
    let records = paginate_cursor(|_| {
        calls += 1;
        ready(Ok(CursorPage::new(vec!["a"], Some(String::new()))))
    })
    .await
    .unwrap();

    assert_eq!(records, vec!["a"]);
    assert_eq!(calls, 1);
}

#[tokio::test]
async fn test_paginate_cursor_error_discards_pages() {
    let mut calls = 0;
    let result: Result<Vec<i32>> = paginate_cursor(|cursor| {
        calls += 1;
        match cursor {
            None => ready(Ok(CursorPage::new(vec![1], Some("next".to_string())))),
            Some(_) => ready(Err(Error::Api {
                code: 401,
                message: "Unauthorized".to_string(),
            })),
        }
    })
    .await;

    assert!(matches!(result, Err(Error::Api { code: 401, .. })));
    assert_eq!(calls, 2);
}
