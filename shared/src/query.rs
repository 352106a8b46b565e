//! Paginated response type

use serde::{Deserialize, Serialize};

/// One page of a larger result set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    /// Rows on this page
    pub data: Vec<T>,
    /// Total rows across all pages
    pub total: u64,
    /// Current page (1-indexed)
    pub page: u32,
    /// Rows per page
    pub limit: u32,
    /// `ceil(total / limit)`; 0 when there are no rows
    pub total_pages: u32,
}

impl<T> PaginatedResponse<T> {
    pub fn new(data: Vec<T>, total: u64, page: u32, limit: u32) -> Self {
        let total_pages = if limit > 0 {
            total.div_ceil(u64::from(limit)) as u32
        } else {
            1
        };

        Self {
            data,
            total,
            page,
            limit,
            total_pages,
        }
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paginated_response() {
        let items = vec!["a", "b", "c"];
        let resp = PaginatedResponse::new(items, 95, 2, 10);

        assert_eq!(resp.total, 95);
        assert_eq!(resp.page, 2);
        assert_eq!(resp.total_pages, 10);
        assert!(resp.has_next());
        assert!(resp.has_previous());
    }

    #[test]
    fn test_empty_result_has_no_pages() {
        let resp = PaginatedResponse::<u8>::new(vec![], 0, 1, 10);
        assert_eq!(resp.total_pages, 0);
        assert!(!resp.has_next());
        assert!(!resp.has_previous());
    }
}
