//! Shared query parameter types for list endpoints.

use serde::Deserialize;

/// Pagination and search parameters (`?page=&page_size=&search=`).
///
/// Pages are 1-based and clamped in `registrar_core::pagination`; the page
/// size defaults to 10. The search term is a free-text substring matched
/// case-insensitively across each entity's named text fields.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    pub search: Option<String>,
}

impl ListParams {
    /// The effective search term: trimmed, with blank input meaning no filter.
    pub fn search_term(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}
