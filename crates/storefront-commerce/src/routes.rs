//! Storefront routes and path parsing.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::Category;
use crate::ids::ProductId;

/// A page of the storefront.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    Home,
    Login,
    Register,
    ProductList,
    ProductDetail(ProductId),
    Cart,
    /// The "my page" account overview.
    Account,
    Checkout,
    Category {
        category: Category,
        product_type: Option<String>,
    },
    CustomerService,
}

impl Route {
    /// Parse a request path. Query strings and trailing slashes are ignored.
    ///
    /// Returns `None` for unknown paths, unknown categories and non-numeric
    /// product ids.
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        let route = match segments.as_slice() {
            [] => Route::Home,
            ["login"] => Route::Login,
            ["register"] => Route::Register,
            ["products"] => Route::ProductList,
            ["products" | "product", id] => Route::ProductDetail(id.parse().ok()?),
            ["cart"] => Route::Cart,
            ["mypage"] => Route::Account,
            ["checkout"] => Route::Checkout,
            ["customer-service"] => Route::CustomerService,
            ["category", category] => Route::Category {
                category: category.parse().ok()?,
                product_type: None,
            },
            ["category", category, product_type] => Route::Category {
                category: category.parse().ok()?,
                product_type: Some(decode_segment(product_type)),
            },
            _ => return None,
        };
        Some(route)
    }

    /// The canonical path for this route.
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Login => "/login".to_string(),
            Route::Register => "/register".to_string(),
            Route::ProductList => "/products".to_string(),
            Route::ProductDetail(id) => format!("/products/{}", id),
            Route::Cart => "/cart".to_string(),
            Route::Account => "/mypage".to_string(),
            Route::Checkout => "/checkout".to_string(),
            Route::CustomerService => "/customer-service".to_string(),
            Route::Category {
                category,
                product_type: None,
            } => format!("/category/{}", category.slug()),
            Route::Category {
                category,
                product_type: Some(product_type),
            } => format!(
                "/category/{}/{}",
                category.slug(),
                product_type.replace(' ', "%20")
            ),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Product types may contain spaces, which arrive percent-encoded.
fn decode_segment(segment: &str) -> String {
    segment.replace("%20", " ").replace('+', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_static_routes() {
        assert_eq!(Route::parse("/"), Some(Route::Home));
        assert_eq!(Route::parse(""), Some(Route::Home));
        assert_eq!(Route::parse("/cart/"), Some(Route::Cart));
        assert_eq!(Route::parse("/mypage"), Some(Route::Account));
        assert_eq!(Route::parse("/customer-service"), Some(Route::CustomerService));
        assert_eq!(Route::parse("/products?sort=price_asc"), Some(Route::ProductList));
    }

    #[test]
    fn test_both_product_detail_forms() {
        let expected = Some(Route::ProductDetail(ProductId::new(42)));
        assert_eq!(Route::parse("/products/42"), expected);
        assert_eq!(Route::parse("/product/42"), expected);
        assert_eq!(Route::parse("/products/abc"), None);
    }

    #[test]
    fn test_category_routes() {
        assert_eq!(
            Route::parse("/category/electronics/Bluetooth%20Speaker"),
            Some(Route::Category {
                category: Category::Electronics,
                product_type: Some("Bluetooth Speaker".to_string()),
            })
        );
        assert_eq!(Route::parse("/category/garden"), None);
        assert_eq!(Route::parse("/unknown"), None);
    }

    #[test]
    fn test_parse_and_path_agree() {
        let routes = [
            Route::Home,
            Route::Login,
            Route::Register,
            Route::ProductList,
            Route::ProductDetail(ProductId::new(7)),
            Route::Cart,
            Route::Account,
            Route::Checkout,
            Route::CustomerService,
            Route::Category {
                category: Category::Beauty,
                product_type: None,
            },
            Route::Category {
                category: Category::Home,
                product_type: Some("Dining Table".to_string()),
            },
        ];
        for route in routes {
            assert_eq!(Route::parse(&route.path()), Some(route.clone()), "{}", route);
        }
    }
}
