//! Page-window math for board listings.
//!
//! Pure data component: knows how to slice a collection into 1-based pages
//! and describe the result, nothing about where the rows come from.

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_LIMIT: usize = 10;

/// A 1-based page request. Zero values fall back to the defaults, matching
/// the lenient query-string parsing of the wire layer this core serves.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: usize,
    pub limit: usize,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PageRequest {
    pub fn new(page: usize, limit: usize) -> Self {
        Self { page, limit }
    }

    fn normalized(&self) -> (usize, usize) {
        let page = if self.page == 0 { DEFAULT_PAGE } else { self.page };
        let limit = if self.limit == 0 { DEFAULT_LIMIT } else { self.limit };
        (page, limit)
    }

    /// Slice the full row set into this request's window: `[(page-1)*limit, page*limit)`.
    pub fn paginate<T: Clone>(&self, rows: &[T]) -> Paginated<T> {
        let (page, limit) = self.normalized();
        let total = rows.len();
        let skip = (page - 1).saturating_mul(limit);
        let data = rows.iter().skip(skip).take(limit).cloned().collect();

        Paginated {
            data,
            total,
            page,
            limit,
            total_pages: total.div_ceil(limit),
        }
    }
}

/// One page of results plus the metadata a paging client needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    pub total_pages: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page_defaults() {
        let rows: Vec<u32> = (0..25).collect();
        let page = PageRequest::default().paginate(&rows);

        assert_eq!(page.data, (0..10).collect::<Vec<_>>());
        assert_eq!(page.total, 25);
        assert_eq!(page.page, 1);
        assert_eq!(page.limit, 10);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn test_last_partial_page() {
        let rows: Vec<u32> = (0..25).collect();
        let page = PageRequest::new(3, 10).paginate(&rows);

        assert_eq!(page.data, vec![20, 21, 22, 23, 24]);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn test_page_past_the_end_is_empty() {
        let rows: Vec<u32> = (0..5).collect();
        let page = PageRequest::new(4, 10).paginate(&rows);

        assert!(page.data.is_empty());
        assert_eq!(page.total, 5);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_zero_page_and_limit_fall_back() {
        let rows: Vec<u32> = (0..12).collect();
        let page = PageRequest::new(0, 0).paginate(&rows);

        assert_eq!(page.page, 1);
        assert_eq!(page.limit, 10);
        assert_eq!(page.data.len(), 10);
    }

    #[test]
    fn test_empty_rows() {
        let rows: Vec<u32> = vec![];
        let page = PageRequest::default().paginate(&rows);

        assert!(page.data.is_empty());
        assert_eq!(page.total, 0);
        assert_eq!(page.total_pages, 0);
    }
}
