//! Pagination utilities for list endpoints

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Pagination query parameters
#[derive(Debug, Clone, Deserialize, Default)]
pub struct PaginationParams {
    /// Page number (1-indexed)
    pub page: Option<u32>,

    /// Items per page
    pub per_page: Option<u32>,
}

impl PaginationParams {
    /// Maximum allowed items per page
    pub const MAX_PER_PAGE: u32 = 100;

    /// Returns the clamped per_page value
    pub fn per_page(&self) -> u32 {
        self.per_page.unwrap_or(20).clamp(1, Self::MAX_PER_PAGE)
    }

    /// Returns the page (1-indexed, minimum 1)
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(1).max(1)
    }

    fn offset(&self) -> usize {
        // Widen before multiplying: page and per_page are caller-controlled
        // and their u32 product can overflow.
        let offset = (u64::from(self.page()) - 1) * u64::from(self.per_page());
        usize::try_from(offset).unwrap_or(usize::MAX)
    }
}

/// Pagination metadata
#[derive(Debug, Clone, Serialize)]
pub struct PaginationMeta {
    pub page: u32,
    pub per_page: u32,
    pub total_items: u64,
    pub total_pages: u32,
    pub has_next: bool,
    pub has_prev: bool,
}

impl PaginationMeta {
    pub fn new(params: &PaginationParams, total_items: u64) -> Self {
        let per_page = params.per_page();
        let page = params.page();
        let total_pages = total_items.div_ceil(u64::from(per_page)) as u32;

        Self {
            page,
            per_page,
            total_items,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }
}

/// Paginated response wrapper
#[derive(Debug, Serialize)]
pub struct Paginated<T: Serialize> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

impl<T: Serialize + Clone> Paginated<T> {
    /// Slice one page out of an in-memory result set.
    pub fn slice(items: &[T], params: &PaginationParams) -> Self {
        let total_items = items.len() as u64;
        let data = items
            .iter()
            .skip(params.offset())
            .take(params.per_page() as usize)
            .cloned()
            .collect();

        Self {
            data,
            pagination: PaginationMeta::new(params, total_items),
        }
    }
}

impl<T: Serialize> IntoResponse for Paginated<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn per_page_is_clamped() {
        let params = PaginationParams {
            page: None,
            per_page: Some(10_000),
        };
        assert_eq!(params.per_page(), PaginationParams::MAX_PER_PAGE);

        let params = PaginationParams {
            page: Some(0),
            per_page: Some(0),
        };
        assert_eq!(params.per_page(), 1);
        assert_eq!(params.page(), 1);
    }

    #[test]
    fn slice_pages_through_a_result_set() {
        let items: Vec<u32> = (0..7).collect();
        let params = PaginationParams {
            page: Some(2),
            per_page: Some(3),
        };
        let page = Paginated::slice(&items, &params);
        assert_eq!(page.data, vec![3, 4, 5]);
        assert_eq!(page.pagination.total_items, 7);
        assert_eq!(page.pagination.total_pages, 3);
        assert!(page.pagination.has_next);
        assert!(page.pagination.has_prev);
    }

    #[test]
    fn slice_with_huge_page_number_is_empty_not_a_panic() {
        let items: Vec<u32> = (0..6).collect();
        let params = PaginationParams {
            page: Some(u32::MAX),
            per_page: Some(100),
        };
        let page = Paginated::slice(&items, &params);
        assert!(page.data.is_empty());
        assert_eq!(page.pagination.total_items, 6);
        assert!(!page.pagination.has_next);
    }

    #[test]
    fn slice_past_the_end_is_empty() {
        let items: Vec<u32> = (0..3).collect();
        let params = PaginationParams {
            page: Some(5),
            per_page: Some(2),
        };
        let page = Paginated::slice(&items, &params);
        assert!(page.data.is_empty());
        assert!(!page.pagination.has_next);
    }
}
