//! Search filter types.

use serde::{Deserialize, Serialize};

use crate::catalog::{Category, Product, Rating};

/// A search filter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Filter {
    /// Case-insensitive substring match on the product name. The query is
    /// used as given, whitespace included; an empty query matches everything.
    Text(String),
    /// Category, optionally narrowed to one product type (case-insensitive).
    Category {
        category: Category,
        product_type: Option<String>,
    },
    /// Only show in-stock items.
    InStock,
    /// Filter by minimum rating.
    MinRating(Rating),
}

impl Filter {
    /// Create a text search filter.
    pub fn text(query: impl Into<String>) -> Self {
        Filter::Text(query.into())
    }

    /// Create a category filter.
    pub fn category(category: Category) -> Self {
        Filter::Category {
            category,
            product_type: None,
        }
    }

    /// Create a category filter narrowed to a product type.
    pub fn product_type(category: Category, product_type: impl Into<String>) -> Self {
        Filter::Category {
            category,
            product_type: Some(product_type.into()),
        }
    }

    /// Create an in-stock filter.
    pub fn in_stock() -> Self {
        Filter::InStock
    }

    /// Check a single product against this filter.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Filter::Text(query) => name_contains(product, &query.to_lowercase()),
            Filter::Category {
                category,
                product_type,
            } => {
                product.category == *category
                    && product_type
                        .as_deref()
                        .map_or(true, |t| product.product_type.eq_ignore_ascii_case(t))
            }
            Filter::InStock => product.is_in_stock(),
            Filter::MinRating(min) => product.rating >= *min,
        }
    }

    /// Keep the products matching this filter, in their original order.
    pub fn apply<'a>(&self, products: impl IntoIterator<Item = &'a Product>) -> Vec<&'a Product> {
        products.into_iter().filter(|p| self.matches(p)).collect()
    }
}

fn name_contains(product: &Product, lowered_query: &str) -> bool {
    lowered_query.is_empty() || product.name.to_lowercase().contains(lowered_query)
}

/// Products whose name contains `query`, ignoring case. Same rule as
/// [`Filter::Text`].
pub fn filter_by_text<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    Filter::text(query).apply(products)
}

/// Products in `category`, optionally narrowed to `product_type`.
pub fn filter_by_category<'a>(
    products: &'a [Product],
    category: Category,
    product_type: Option<&str>,
) -> Vec<&'a Product> {
    let filter = Filter::Category {
        category,
        product_type: product_type.map(str::to_string),
    };
    filter.apply(products)
}
