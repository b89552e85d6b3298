//! Pagination types for list views.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Default page size (the grid layouts show 12 cards).
pub const DEFAULT_PAGE_SIZE: u64 = 12;
/// Maximum page size.
pub const MAX_PAGE_SIZE: u64 = 100;

/// How many pages an empty result reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptyPages {
    /// An empty result is a single, empty page ("page 1 of 1").
    #[default]
    One,
    /// An empty result has no pages at all ("page 1 of 0").
    Zero,
}

/// Requested page position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (1-based).
    #[serde(default = "default_page")]
    pub page: u64,
    /// Number of items per page.
    #[serde(default = "default_page_size")]
    pub page_size: u64,
}

impl PageRequest {
    /// Create a page request, rejecting a zero page or zero page size.
    ///
    /// Page sizes above [`MAX_PAGE_SIZE`] are capped.
    pub fn new(page: u64, page_size: u64) -> Result<Self, AppError> {
        Self::with_max(page, page_size, MAX_PAGE_SIZE)
    }

    /// Create a page request capped at a configured maximum page size.
    pub fn with_max(page: u64, page_size: u64, max_page_size: u64) -> Result<Self, AppError> {
        if page == 0 {
            return Err(AppError::validation("Page numbers start at 1"));
        }
        if page_size == 0 {
            return Err(AppError::validation("Page size must be a positive integer"));
        }
        Ok(Self {
            page,
            page_size: page_size.min(max_page_size.max(1)),
        })
    }

    /// The first page at the given size.
    pub fn first(page_size: u64) -> Result<Self, AppError> {
        Self::new(1, page_size)
    }

    /// Index of the first item on this page.
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.page_size)
    }

    /// Return the same page size positioned at page 1.
    pub fn reset(&self) -> Self {
        Self {
            page: 1,
            page_size: self.page_size,
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Number of pages needed for `total_items` at `page_size`.
///
/// A zero page size yields zero pages; [`PageRequest`] never carries one.
pub fn total_pages(total_items: u64, page_size: u64, empty: EmptyPages) -> u64 {
    if total_items == 0 {
        return match empty {
            EmptyPages::One => 1,
            EmptyPages::Zero => 0,
        };
    }
    if page_size == 0 {
        return 0;
    }
    total_items.div_ceil(page_size)
}

/// One page of an ordered collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// The items on this page.
    pub items: Vec<T>,
    /// Current page number (1-based).
    pub page: u64,
    /// Number of items per page.
    pub page_size: u64,
    /// Total number of items across all pages.
    pub total_items: u64,
    /// Total number of pages.
    pub total_pages: u64,
    /// Whether there is a next page.
    pub has_next: bool,
    /// Whether there is a previous page.
    pub has_previous: bool,
}

impl<T> Page<T> {
    /// Assemble a page from its items and position.
    pub fn new(items: Vec<T>, request: PageRequest, total_items: u64, empty: EmptyPages) -> Self {
        let total_pages = total_pages(total_items, request.page_size, empty);
        Self {
            items,
            page: request.page,
            page_size: request.page_size,
            total_items,
            total_pages,
            has_next: request.page < total_pages,
            has_previous: request.page > 1,
        }
    }

    /// Whether this page holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Map the items of this page, keeping its position.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            page_size: self.page_size,
            total_items: self.total_items,
            total_pages: self.total_pages,
            has_next: self.has_next,
            has_previous: self.has_previous,
        }
    }
}

fn default_page() -> u64 {
    1
}

fn default_page_size() -> u64 {
    DEFAULT_PAGE_SIZE
}
