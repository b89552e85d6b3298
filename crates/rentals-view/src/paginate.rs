//! Fixed-size page windows over an ordered collection.

use rentals_core::config::pagination::PaginationConfig;
use rentals_core::types::{EmptyPages, Page, PageRequest};
use rentals_core::AppResult;

/// Slice `items` to the window `[(page-1)*size, page*size)`.
///
/// Pages past the end yield an empty window, never an error.
pub fn paginate<T: Clone>(items: &[T], request: PageRequest, empty: EmptyPages) -> Page<T> {
    let total = items.len();
    let start = usize::try_from(request.offset()).unwrap_or(usize::MAX).min(total);
    let size = usize::try_from(request.page_size).unwrap_or(usize::MAX);
    let end = start.saturating_add(size).min(total);
    Page::new(items[start..end].to_vec(), request, total as u64, empty)
}

/// Page requests and windows bound to the configured limits.
#[derive(Debug, Clone)]
pub struct Paginator {
    default_page_size: u64,
    max_page_size: u64,
    empty: EmptyPages,
}

impl Paginator {
    /// Build from pagination settings.
    pub fn new(config: &PaginationConfig) -> Self {
        Self {
            default_page_size: config.default_page_size,
            max_page_size: config.max_page_size,
            empty: config.empty_pages,
        }
    }

    /// Validate a page position; `None` picks the defaults.
    pub fn request(&self, page: Option<u64>, page_size: Option<u64>) -> AppResult<PageRequest> {
        PageRequest::with_max(
            page.unwrap_or(1),
            page_size.unwrap_or(self.default_page_size),
            self.max_page_size,
        )
    }

    /// Cut one page.
    pub fn page<T: Clone>(&self, items: &[T], request: PageRequest) -> Page<T> {
        paginate(items, request, self.empty)
    }

    /// How empty results report their page count.
    pub fn empty_pages(&self) -> EmptyPages {
        self.empty
    }
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(&PaginationConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_partial_page() {
        let items: Vec<u32> = (0..45).collect();
        let request = PageRequest::new(4, 12).unwrap();
        let page = paginate(&items, request, EmptyPages::One);
        assert_eq!(page.total_pages, 4);
        assert_eq!(page.items.len(), 9);
        assert_eq!(page.items.first(), Some(&36));
        assert!(!page.has_next);
    }

    #[test]
    fn test_out_of_range_page_is_empty() {
        let items: Vec<u32> = (0..5).collect();
        let page = paginate(&items, PageRequest::new(3, 5).unwrap(), EmptyPages::One);
        assert!(page.is_empty());
        assert_eq!(page.total_items, 5);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_empty_collection_policies() {
        let items: Vec<u32> = Vec::new();
        let request = PageRequest::default();
        assert_eq!(paginate(&items, request, EmptyPages::One).total_pages, 1);
        assert_eq!(paginate(&items, request, EmptyPages::Zero).total_pages, 0);
        assert!(!paginate(&items, request, EmptyPages::Zero).has_next);
    }

    #[test]
    fn test_paginator_defaults_and_caps() {
        let paginator = Paginator::default();
        let request = paginator.request(None, None).unwrap();
        assert_eq!((request.page, request.page_size), (1, 12));
        let capped = paginator.request(Some(2), Some(1000)).unwrap();
        assert_eq!(capped.page_size, 100);
        assert!(paginator.request(Some(0), None).is_err());
    }
}
