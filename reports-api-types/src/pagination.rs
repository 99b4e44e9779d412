use serde::{Deserialize, Serialize};

/// Response header carrying [`PaginationMeta::total`]
pub const TOTAL_COUNT_HEADER: &str = "x-total-count";
/// Response header carrying [`PaginationMeta::total_pages`]
pub const TOTAL_PAGES_HEADER: &str = "x-total-pages";

/// Pagination metadata attached to every list response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub page: u32,
    pub page_size: u32,
    /// Matching records before windowing.
    pub total: u64,
    pub total_pages: u64,
}

impl PaginationMeta {
    pub fn new(page: u32, page_size: u32, total: u64) -> Self {
        let total_pages = if page_size == 0 {
            0
        } else {
            total.div_ceil(u64::from(page_size))
        };
        Self {
            page,
            page_size,
            total,
            total_pages,
        }
    }

    /// Header pairs for clients that read totals from headers.
    pub fn to_headers(&self) -> Vec<(String, String)> {
        vec![
            (TOTAL_COUNT_HEADER.to_string(), self.total.to_string()),
            (TOTAL_PAGES_HEADER.to_string(), self.total_pages.to_string()),
        ]
    }
}

/// A page of items plus its pagination metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

impl<T> ListResponse<T> {
    pub fn new(data: Vec<T>, pagination: PaginationMeta) -> Self {
        Self { data, pagination }
    }
}
