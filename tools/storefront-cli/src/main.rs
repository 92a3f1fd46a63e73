//! Storefront CLI - Browse the mock catalog and place orders from the terminal.
//!
//! Commands:
//! - `storefront catalog` - Summarize the generated catalog
//! - `storefront home` - Show the home page category shelves
//! - `storefront browse` - Search and page through all products
//! - `storefront category` - Show a category page
//! - `storefront product` - Show a product detail page
//! - `storefront order` - Run the cart and checkout flow
//! - `storefront account` - Show the account page
//! - `storefront support` - Customer center notices, FAQ and inquiries
//! - `storefront config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{
    AccountArgs, BrowseArgs, CatalogArgs, CategoryArgs, ConfigArgs, HomeArgs, OrderArgs,
    ProductArgs, SupportArgs,
};

/// Storefront CLI - Browse a generated catalog and walk through checkout
#[derive(Parser)]
#[command(name = "storefront")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Seed for a reproducible catalog
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize the generated catalog
    Catalog(CatalogArgs),

    /// Show the home page shelves
    Home(HomeArgs),

    /// Search and page through all products
    Browse(BrowseArgs),

    /// Show a category page
    Category(CategoryArgs),

    /// Show a product detail page
    Product(ProductArgs),

    /// Add items to a cart and check out
    Order(OrderArgs),

    /// Show the account page
    Account(AccountArgs),

    /// Customer center notices, FAQ and inquiries
    Support(SupportArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so JSON output stays clean
    let default_filter = if cli.verbose {
        "storefront_commerce=debug,storefront=debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, cli.seed, output)?;

    // Execute command
    let result = match cli.command {
        Commands::Catalog(args) => commands::catalog::run(args, &ctx),
        Commands::Home(args) => commands::home::run(args, &ctx),
        Commands::Browse(args) => commands::browse::run(args, &ctx),
        Commands::Category(args) => commands::category::run(args, &ctx),
        Commands::Product(args) => commands::product::run(args, &ctx),
        Commands::Order(args) => commands::order::run(args, &ctx),
        Commands::Account(args) => commands::account::run(args, &ctx),
        Commands::Support(args) => commands::support::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
