//! Search results and pagination.

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Pagination info.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    /// Current page (1-indexed), clamped into the valid range.
    pub page: usize,
    /// Items per page.
    pub per_page: usize,
    /// Total number of items.
    pub total: usize,
    /// Total number of pages; 0 when there are no items.
    pub total_pages: usize,
    /// Whether there's a next page.
    pub has_next: bool,
    /// Whether there's a previous page.
    pub has_prev: bool,
}

impl Pagination {
    /// Create pagination info. A page size of 0 is treated as 1; page 0 and
    /// pages past the end are clamped to the first and last page.
    pub fn new(page: usize, per_page: usize, total: usize) -> Self {
        let per_page = per_page.max(1);
        let total_pages = total.div_ceil(per_page);
        let page = page.clamp(1, total_pages.max(1));

        Self {
            page,
            per_page,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }

    /// Index of the first item on this page.
    pub fn offset(&self) -> usize {
        ((self.page - 1) * self.per_page).min(self.total)
    }

    /// Index range of the items on this page.
    pub fn range(&self) -> Range<usize> {
        let start = self.offset();
        start..(start + self.per_page).min(self.total)
    }

    /// Get page numbers for display (e.g., [3, 4, 5, 6, 7]).
    pub fn page_numbers(&self, max_visible: usize) -> Vec<usize> {
        if self.total_pages <= max_visible {
            return (1..=self.total_pages).collect();
        }

        let half = max_visible / 2;
        let start = self.page.saturating_sub(half).max(1);
        let end = (start + max_visible - 1).min(self.total_pages);
        let start = (end + 1).saturating_sub(max_visible).max(1);

        (start..=end).collect()
    }

    /// Check if on first page.
    pub fn is_first(&self) -> bool {
        self.page == 1
    }

    /// Check if on last page.
    pub fn is_last(&self) -> bool {
        self.page >= self.total_pages
    }

    /// Get start item number (1-indexed).
    pub fn start_item(&self) -> usize {
        if self.total == 0 {
            0
        } else {
            self.offset() + 1
        }
    }

    /// Get end item number.
    pub fn end_item(&self) -> usize {
        self.range().end
    }
}

/// The slice of `items` shown on a 1-based `page` of `per_page` items.
pub fn page_window<T>(items: &[T], per_page: usize, page: usize) -> &[T] {
    &items[Pagination::new(page, per_page, items.len()).range()]
}

/// Search results container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResults<T> {
    /// The result items.
    pub items: Vec<T>,
    /// Pagination info.
    pub pagination: Pagination,
}

impl<T> SearchResults<T> {
    /// Create new search results.
    pub fn new(items: Vec<T>, pagination: Pagination) -> Self {
        Self { items, pagination }
    }

    /// Create empty results.
    pub fn empty(per_page: usize) -> Self {
        Self {
            items: Vec::new(),
            pagination: Pagination::new(1, per_page, 0),
        }
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get number of items in this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Message to show instead of a product grid.
    pub fn empty_message(&self) -> Option<&'static str> {
        self.is_empty().then_some("No products found.")
    }
}
