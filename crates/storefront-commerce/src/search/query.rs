//! Search query builder.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::search::{Filter, Pagination, SearchResults};

/// Default number of products per list page.
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Sort options for product lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortOption {
    /// Catalog order.
    #[default]
    Default,
    /// Sort by list price, low to high.
    PriceAsc,
    /// Sort by list price, high to low.
    PriceDesc,
    /// Offered in the UI but not yet ordered; keeps catalog order.
    Newest,
    /// Offered in the UI but not yet ordered; keeps catalog order.
    Popular,
}

impl SortOption {
    /// The value used in list page selectors.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Default => "default",
            SortOption::PriceAsc => "price_asc",
            SortOption::PriceDesc => "price_desc",
            SortOption::Newest => "newest",
            SortOption::Popular => "popular",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::Default => "Recommended",
            SortOption::PriceAsc => "Price: Low to High",
            SortOption::PriceDesc => "Price: High to Low",
            SortOption::Newest => "Newest",
            SortOption::Popular => "Most Popular",
        }
    }

    /// Stable sort; ties keep their relative order.
    pub fn sort(&self, products: &mut [&Product]) {
        match self {
            SortOption::PriceAsc => products.sort_by_key(|p| p.price.amount),
            SortOption::PriceDesc => products.sort_by(|a, b| b.price.amount.cmp(&a.price.amount)),
            SortOption::Default | SortOption::Newest | SortOption::Popular => {}
        }
    }
}

impl From<&str> for SortOption {
    /// Unknown selector values fall back to [`SortOption::Default`].
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "price_asc" => SortOption::PriceAsc,
            "price_desc" => SortOption::PriceDesc,
            "newest" => SortOption::Newest,
            "popular" => SortOption::Popular,
            _ => SortOption::Default,
        }
    }
}

/// A product list query: filters, then sort, then page window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Text query (matched against product names).
    pub query: Option<String>,
    /// Filters to apply.
    pub filters: Vec<Filter>,
    /// Sort option.
    pub sort: SortOption,
    /// Current page (1-indexed).
    pub page: usize,
    /// Items per page.
    pub per_page: usize,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchQuery {
    /// Create a new search query.
    pub fn new() -> Self {
        Self {
            query: None,
            filters: Vec::new(),
            sort: SortOption::Default,
            page: 1,
            per_page: DEFAULT_PAGE_SIZE,
        }
    }

    /// Set the text query. An empty query is ignored; anything else is
    /// matched as given by [`Filter::Text`].
    pub fn with_query(mut self, q: impl Into<String>) -> Self {
        let q = q.into();
        if !q.is_empty() {
            self.filters.push(Filter::Text(q.clone()));
            self.query = Some(q);
        }
        self
    }

    /// Add a filter.
    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Set sort option.
    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort = sort;
        self
    }

    /// Set pagination. Page and page size are at least 1.
    pub fn with_pagination(mut self, page: usize, per_page: usize) -> Self {
        self.page = page.max(1);
        self.per_page = per_page.max(1);
        self
    }

    /// Run the query against a product sequence.
    pub fn execute<'a>(&self, products: &'a [Product]) -> SearchResults<&'a Product> {
        let mut matched: Vec<&Product> = products
            .iter()
            .filter(|p| self.filters.iter().all(|f| f.matches(p)))
            .collect();
        self.sort.sort(&mut matched);

        let pagination = Pagination::new(self.page, self.per_page, matched.len());
        let items = matched[pagination.range()].to_vec();

        tracing::debug!(
            query = self.query.as_deref().unwrap_or(""),
            sort = self.sort.as_str(),
            total = pagination.total,
            page = pagination.page,
            "executed product query"
        );
        SearchResults::new(items, pagination)
    }
}
