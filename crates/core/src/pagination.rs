//! Pagination arithmetic shared by every list endpoint.
//!
//! Pages are 1-based. The page size defaults to [`DEFAULT_PAGE_SIZE`] and is
//! clamped to [`MAX_PAGE_SIZE`] so a client cannot request an unbounded scan.

use serde::Serialize;

/// Rows per page when the client does not ask for a specific size.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Upper bound on a client-requested page size.
pub const MAX_PAGE_SIZE: i64 = 100;

/// Clamp a requested page number to a valid 1-based page.
pub fn clamp_page(page: Option<i64>) -> i64 {
    page.unwrap_or(1).max(1)
}

/// Clamp a requested page size into `1..=MAX_PAGE_SIZE`.
pub fn clamp_page_size(page_size: Option<i64>) -> i64 {
    page_size
        .unwrap_or(DEFAULT_PAGE_SIZE)
        .clamp(1, MAX_PAGE_SIZE)
}

/// Row offset for a 1-based page: `(page - 1) * page_size`.
///
/// Saturates instead of overflowing so an absurd page number yields a
/// far-past-the-end offset (an empty page) rather than a panic or a
/// negative `OFFSET`.
pub fn offset(page: i64, page_size: i64) -> i64 {
    page.saturating_sub(1).saturating_mul(page_size)
}

/// Total page count: `ceil(total / page_size)`. Zero rows means zero pages.
pub fn total_pages(total: i64, page_size: i64) -> i64 {
    if total <= 0 {
        0
    } else {
        (total + page_size - 1) / page_size
    }
}

/// One page of results plus the metadata a paginated view needs to render
/// its navigation controls (current page, total matching count, page count).
#[derive(Debug, Serialize)]
pub struct Page<T: Serialize> {
    pub data: Vec<T>,
    pub total: i64,
    pub page: i64,
    pub page_size: i64,
    pub total_pages: i64,
}

impl<T: Serialize> Page<T> {
    /// Assemble a page envelope from a result slice and its matching count.
    pub fn new(data: Vec<T>, total: i64, page: i64, page_size: i64) -> Self {
        Self {
            data,
            total,
            page,
            page_size,
            total_pages: total_pages(total, page_size),
        }
    }
}
