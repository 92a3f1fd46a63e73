//! Home page command: one product shelf per category.

use anyhow::Result;
use serde_json::json;
use storefront_commerce::search::home_shelves;

use super::HomeArgs;
use crate::context::Context;

/// Run the home command.
pub fn run(args: HomeArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let display = &ctx.config.display;
    let mut shelves = home_shelves(&catalog, display.shelf_size, display.shelf_window);

    for shelf in &mut shelves {
        for _ in 0..args.shelf_page {
            if !shelf.next() {
                break;
            }
        }
    }

    if ctx.output.is_json() {
        let out: Vec<_> = shelves
            .iter()
            .map(|shelf| {
                json!({
                    "category": shelf.category,
                    "page": shelf.page(),
                    "page_count": shelf.page_count(),
                    "products": shelf.visible(),
                })
            })
            .collect();
        ctx.output.json(&out);
        return Ok(());
    }

    for shelf in &shelves {
        ctx.output.header(&format!(
            "{} ({}/{})",
            shelf.category,
            shelf.page() + 1,
            shelf.page_count().max(1)
        ));
        if shelf.visible().is_empty() {
            ctx.output.info("No products found.");
            continue;
        }
        ctx.output.product_header();
        for product in shelf.visible() {
            ctx.output.product_row(product);
        }
    }

    Ok(())
}
