//! Search module.
//!
//! Derived product views: filters, sorting, pagination and home shelves.
//! Everything here borrows the catalog and never mutates it.

mod filter;
mod query;
mod results;
mod shelf;

pub use filter::{filter_by_category, filter_by_text, Filter};
pub use query::{SearchQuery, SortOption, DEFAULT_PAGE_SIZE};
pub use results::{page_window, Pagination, SearchResults};
pub use shelf::{home_shelves, CategoryShelf, DEFAULT_SHELF_SIZE, DEFAULT_SHELF_WINDOW};
