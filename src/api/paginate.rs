//! # Pagination
//!
//! The API exposes three continuation styles. Each fetcher here walks one of
//! them page by page until the backend runs out or `limit` items have been
//! collected (`limit == 0` means no limit).
//!
//! ```text
//! fetch_all                 page=1,2,3…      stop when !has_next
//! fetch_all_string_cursor   cursor="",c1,c2… stop when next_cursor empty or page empty
//! fetch_all_cursor          after=0,a1,a2…   stop when next_after == 0 or page empty
//! ```
//!
//! Pages are requested strictly one after another. An error from any page
//! aborts the walk and is returned as-is; nothing collected so far is kept.

use std::future::Future;

/// Page size used when the limit does not force a smaller one.
pub const DEFAULT_PER_PAGE: usize = 25;

/// One page of a page-number listing.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub has_next: bool,
}

/// One page of a string-cursor listing. An empty `next_cursor` ends the walk.
#[derive(Debug, Clone, PartialEq)]
pub struct CursorPage<T> {
    pub items: Vec<T>,
    pub next_cursor: String,
}

/// One page of an integer-offset listing. `next_after == 0` ends the walk.
#[derive(Debug, Clone, PartialEq)]
pub struct OffsetPage<T> {
    pub items: Vec<T>,
    pub next_after: u64,
}

fn per_page(limit: usize) -> usize {
    if limit > 0 && limit < DEFAULT_PER_PAGE {
        limit
    } else {
        DEFAULT_PER_PAGE
    }
}

/// Appends `items` and reports whether the limit has been reached, truncating
/// to exactly `limit` if so.
fn accumulate<T>(all: &mut Vec<T>, items: Vec<T>, limit: usize) -> bool {
    all.extend(items);
    if limit > 0 && all.len() >= limit {
        all.truncate(limit);
        return true;
    }
    false
}

/// Walks a page-number listing starting at page 1.
pub async fn fetch_all<T, E, F, Fut>(mut fetch: F, limit: usize) -> Result<Vec<T>, E>
where
    F: FnMut(u32, usize) -> Fut,
    Fut: Future<Output = Result<Page<T>, E>>,
{
    let per_page = per_page(limit);
    let mut all = Vec::new();
    let mut page = 1;

    loop {
        let Page { items, has_next } = fetch(page, per_page).await?;
        if accumulate(&mut all, items, limit) || !has_next {
            break;
        }
        page += 1;
    }

    Ok(all)
}

/// Walks a string-cursor listing starting from the empty cursor.
///
/// Also stops on an empty page, so a backend that keeps handing out cursors
/// with no data cannot spin forever.
pub async fn fetch_all_string_cursor<T, E, F, Fut>(mut fetch: F, limit: usize) -> Result<Vec<T>, E>
where
    F: FnMut(String, usize) -> Fut,
    Fut: Future<Output = Result<CursorPage<T>, E>>,
{
    let per_page = per_page(limit);
    let mut all = Vec::new();
    let mut cursor = String::new();

    loop {
        let CursorPage { items, next_cursor } = fetch(cursor, per_page).await?;
        let page_empty = items.is_empty();
        if accumulate(&mut all, items, limit) || next_cursor.is_empty() || page_empty {
            break;
        }
        cursor = next_cursor;
    }

    Ok(all)
}

/// Walks an integer-offset listing starting from `after = 0`.
pub async fn fetch_all_cursor<T, E, F, Fut>(mut fetch: F, limit: usize) -> Result<Vec<T>, E>
where
    F: FnMut(u64, usize) -> Fut,
    Fut: Future<Output = Result<OffsetPage<T>, E>>,
{
    let per_page = per_page(limit);
    let mut all = Vec::new();
    let mut after = 0;

    loop {
        let OffsetPage { items, next_after } = fetch(after, per_page).await?;
        let page_empty = items.is_empty();
        if accumulate(&mut all, items, limit) || next_after == 0 || page_empty {
            break;
        }
        after = next_after;
    }

    Ok(all)
}
