//! Home page category shelves.

use serde::Serialize;

use crate::catalog::{CatalogProvider, Category, Product};

/// Products taken from each category for its shelf.
pub const DEFAULT_SHELF_SIZE: usize = 30;
/// Products visible at once on a shelf.
pub const DEFAULT_SHELF_WINDOW: usize = 6;

/// A horizontally paged row of products from one category.
///
/// The page index is 0-based and stays within `[0, len / window - 1]`;
/// requests to move outside that range are ignored.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryShelf<'a> {
    pub category: Category,
    products: Vec<&'a Product>,
    page: usize,
    window: usize,
}

impl<'a> CategoryShelf<'a> {
    pub fn new(category: Category, products: Vec<&'a Product>, window: usize) -> Self {
        Self {
            category,
            products,
            page: 0,
            window: window.max(1),
        }
    }

    /// Number of full windows on this shelf.
    pub fn page_count(&self) -> usize {
        self.products.len() / self.window
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn products(&self) -> &[&'a Product] {
        &self.products
    }

    /// Products in the current window.
    pub fn visible(&self) -> &[&'a Product] {
        let start = (self.page * self.window).min(self.products.len());
        let end = (start + self.window).min(self.products.len());
        &self.products[start..end]
    }

    /// Move one window forward. Returns whether the page changed.
    pub fn next(&mut self) -> bool {
        if self.page + 1 < self.page_count() {
            self.page += 1;
            true
        } else {
            false
        }
    }

    /// Move one window back. Returns whether the page changed.
    pub fn prev(&mut self) -> bool {
        if self.page > 0 {
            self.page -= 1;
            true
        } else {
            false
        }
    }
}

/// One shelf per catalog category holding its first `shelf_size` products.
pub fn home_shelves<P: CatalogProvider + ?Sized>(
    provider: &P,
    shelf_size: usize,
    window: usize,
) -> Vec<CategoryShelf<'_>> {
    provider
        .dictionary()
        .categories()
        .map(|category| {
            let products = provider
                .products()
                .iter()
                .filter(|p| p.category == category)
                .take(shelf_size)
                .collect();
            CategoryShelf::new(category, products, window)
        })
        .collect()
}
