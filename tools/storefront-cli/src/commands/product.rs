//! Product detail command.

use anyhow::{bail, Result};
use serde_json::json;
use storefront_commerce::catalog::CatalogProvider;
use storefront_commerce::routes::Route;
use storefront_commerce::{CommerceError, ProductId};

use super::ProductArgs;
use crate::context::Context;
use crate::output::{badges, price_label};

const RELATED_COUNT: usize = 4;

/// Run the product command.
pub fn run(args: ProductArgs, ctx: &Context) -> Result<()> {
    let Some(id) = parse_product_ref(&args.id) else {
        bail!("Not a product id or product path: {}", args.id);
    };

    let catalog = ctx.catalog()?;
    let product = match catalog.find(id) {
        Ok(product) => product,
        Err(CommerceError::ProductNotFound(_)) => {
            // Missing products render an inline notice rather than failing.
            if ctx.output.is_json() {
                ctx.output.json(&json!({ "id": id, "found": false }));
            } else {
                ctx.output.warn("Product not found.");
            }
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let related: Vec<_> = catalog
        .in_category(product.category)
        .into_iter()
        .filter(|p| p.product_type == product.product_type && p.id != product.id)
        .take(RELATED_COUNT)
        .collect();

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "product": product,
            "effective_price": product.effective_price(),
            "path": Route::ProductDetail(product.id).path(),
            "related": related,
        }));
        return Ok(());
    }

    ctx.output.header(&product.name);
    ctx.output.kv("Path", &Route::ProductDetail(product.id).path());
    ctx.output.kv(
        "Category",
        &format!("{} / {}", product.category, product.product_type),
    );
    ctx.output.kv("Brand", &product.brand);
    ctx.output.kv("Price", &price_label(product));
    if product.has_discount() {
        ctx.output.kv("You save", &product.savings().display());
    }
    ctx.output.kv("Rating", &product.rating.to_string());
    ctx.output.kv("Stock", &product.stock.to_string());
    ctx.output.kv("Listed", &product.created_at.format("%Y-%m-%d").to_string());
    let tags = badges(product);
    if !tags.is_empty() {
        ctx.output.kv("Badges", &tags);
    }
    println!();
    println!("  {}", product.description);
    ctx.output.debug(&format!("Image: {}", product.image_url));

    if !related.is_empty() {
        ctx.output.header(&format!("More {}", product.product_type));
        ctx.output.product_header();
        for p in related {
            ctx.output.product_row(p);
        }
    }

    Ok(())
}

/// Accept a bare id (`42`) or a product page path (`/products/42`).
fn parse_product_ref(raw: &str) -> Option<ProductId> {
    if let Ok(id) = raw.parse::<ProductId>() {
        return Some(id);
    }
    match Route::parse(raw)? {
        Route::ProductDetail(id) => Some(id),
        _ => None,
    }
}
