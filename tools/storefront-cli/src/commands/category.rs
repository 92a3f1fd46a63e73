//! Category page command.

use anyhow::{bail, Context as _, Result};
use storefront_commerce::catalog::{CatalogProvider, Category};
use storefront_commerce::search::{Filter, SearchQuery, SortOption};

use super::browse::print_results;
use super::CategoryArgs;
use crate::context::Context;

/// Run the category command.
pub fn run(args: CategoryArgs, ctx: &Context) -> Result<()> {
    let category: Category = args
        .category
        .parse()
        .with_context(|| format!("Valid categories: {}", category_names()))?;

    let catalog = ctx.catalog()?;
    let product_type = args.product_type.as_deref().map(str::trim);

    let filter = match product_type {
        Some(t) => {
            let known = catalog
                .dictionary()
                .get(category)
                .is_some_and(|entry| entry.has_product_type(t));
            if !known {
                bail!(
                    "{} has no product type \"{}\". Try: {}",
                    category,
                    t,
                    catalog.dictionary().product_types(category).join(", ")
                );
            }
            Filter::product_type(category, t)
        }
        None => Filter::category(category),
    };

    let results = SearchQuery::new()
        .with_filter(filter)
        .with_sort(SortOption::from(args.sort.as_str()))
        .with_pagination(args.page, ctx.config.display.page_size)
        .execute(catalog.products());

    let title = match product_type {
        Some(t) => format!("{} / {}", category, t),
        None => category.to_string(),
    };
    print_results(&title, &results, ctx);
    Ok(())
}

fn category_names() -> String {
    Category::ALL
        .iter()
        .map(|c| c.slug())
        .collect::<Vec<_>>()
        .join(", ")
}
