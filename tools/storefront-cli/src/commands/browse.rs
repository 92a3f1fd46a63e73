//! Product list command.

use anyhow::Result;
use storefront_commerce::catalog::{CatalogProvider, Product};
use storefront_commerce::search::{SearchQuery, SearchResults, SortOption};

use super::BrowseArgs;
use crate::context::Context;

/// Run the browse command.
pub fn run(args: BrowseArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let per_page = args.per_page.unwrap_or(ctx.config.display.page_size);

    let results = SearchQuery::new()
        .with_query(args.query.as_str())
        .with_sort(SortOption::from(args.sort.as_str()))
        .with_pagination(args.page, per_page)
        .execute(catalog.products());

    let title = if args.query.is_empty() {
        "All products".to_string()
    } else {
        format!("Results for \"{}\"", args.query)
    };
    print_results(&title, &results, ctx);
    Ok(())
}

/// Print a page of products with its paging footer.
pub fn print_results(title: &str, results: &SearchResults<&Product>, ctx: &Context) {
    if ctx.output.is_json() {
        ctx.output.json(results);
        return;
    }

    ctx.output.header(title);
    if let Some(message) = results.empty_message() {
        ctx.output.info(message);
        return;
    }

    ctx.output.product_header();
    for product in &results.items {
        ctx.output.product_row(product);
    }

    let p = &results.pagination;
    let pages: Vec<String> = p
        .page_numbers(5)
        .iter()
        .map(|n| {
            if *n == p.page {
                format!("[{}]", n)
            } else {
                n.to_string()
            }
        })
        .collect();
    ctx.output.info(&format!(
        "Showing {}-{} of {} | page {} of {} | {}",
        p.start_item(),
        p.end_item(),
        p.total,
        p.page,
        p.total_pages,
        pages.join(" ")
    ));
}
