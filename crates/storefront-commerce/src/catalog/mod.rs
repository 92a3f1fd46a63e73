//! Product catalog module.
//!
//! Contains the category dictionaries, product records, the mock catalog
//! generator and the read-only catalog provider.

mod category;
mod generator;
pub(crate) mod product;
mod provider;

pub use category::{CatalogDictionary, Category, CategoryDictionary, PriceRange};
pub use generator::{
    CatalogGenerator, CREATED_WITHIN_DAYS, DISCOUNT_PERCENT_RANGE, DISCOUNT_PROBABILITY,
    NEW_PRODUCT_PROBABILITY, STOCK_RANGE,
};
pub use product::{Product, Rating};
pub use provider::{Catalog, CatalogProvider};
