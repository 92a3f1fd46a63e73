//! Catalog summary command.

use anyhow::Result;
use serde::Serialize;
use storefront_commerce::catalog::{CatalogProvider, Category};
use storefront_commerce::Money;

use super::CatalogArgs;
use crate::context::Context;

#[derive(Serialize)]
struct CategorySummary {
    category: Category,
    products: usize,
    brands: usize,
    product_types: Vec<String>,
    min_price: String,
    max_price: String,
    discounted: usize,
}

/// Run the catalog command.
pub fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let currency = ctx.currency()?;

    let summaries: Vec<CategorySummary> = catalog
        .dictionary()
        .entries()
        .iter()
        .map(|entry| {
            let products = catalog.in_category(entry.category);
            CategorySummary {
                category: entry.category,
                products: products.len(),
                brands: entry.brands.len(),
                product_types: entry.product_types.clone(),
                min_price: Money::new(entry.price_range.min, currency).display(),
                max_price: Money::new(entry.price_range.max, currency).display(),
                discounted: products.iter().filter(|p| p.has_discount()).count(),
            }
        })
        .collect();

    if ctx.output.is_json() {
        ctx.output.json(&summaries);
        return Ok(());
    }

    ctx.output.header(&format!("Catalog ({} products)", catalog.len()));
    let widths = [12, 9, 7, 26, 10];
    ctx.output
        .table_row(&["CATEGORY", "PRODUCTS", "BRANDS", "PRICE RANGE", "ON SALE"], &widths);
    for s in &summaries {
        let products = s.products.to_string();
        let brands = s.brands.to_string();
        let range = format!("{} - {}", s.min_price, s.max_price);
        let discounted = s.discounted.to_string();
        ctx.output.table_row(
            &[
                s.category.as_str(),
                products.as_str(),
                brands.as_str(),
                range.as_str(),
                discounted.as_str(),
            ],
            &widths,
        );
    }

    if args.types {
        for s in &summaries {
            ctx.output.header(s.category.as_str());
            for t in &s.product_types {
                ctx.output.list_item(t);
            }
        }
    }

    Ok(())
}
