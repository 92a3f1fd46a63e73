//! CLI command implementations.

pub mod account;
pub mod browse;
pub mod catalog;
pub mod category;
pub mod config;
pub mod home;
pub mod order;
pub mod product;
pub mod support;

use clap::{Args, Subcommand};

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    /// Also list each category's product types.
    #[arg(short, long)]
    pub types: bool,
}

/// Arguments for the browse command.
#[derive(Args)]
pub struct BrowseArgs {
    /// Text to search for in product names.
    #[arg(default_value = "")]
    pub query: String,

    /// Sort order: price_asc, price_desc, newest, popular.
    #[arg(short, long, default_value = "default")]
    pub sort: String,

    /// Page number (1-indexed).
    #[arg(short, long, default_value = "1")]
    pub page: usize,

    /// Products per page (default from config).
    #[arg(long)]
    pub per_page: Option<usize>,
}

/// Arguments for the category command.
#[derive(Args)]
pub struct CategoryArgs {
    /// Category name (e.g. electronics).
    pub category: String,

    /// Product type within the category (e.g. "Bluetooth Speaker").
    pub product_type: Option<String>,

    /// Sort order: price_asc, price_desc, newest, popular.
    #[arg(short, long, default_value = "default")]
    pub sort: String,

    /// Page number (1-indexed).
    #[arg(short, long, default_value = "1")]
    pub page: usize,
}

/// Arguments for the product command.
#[derive(Args)]
pub struct ProductArgs {
    /// Product id or path (e.g. 42 or /products/42).
    pub id: String,
}

/// Arguments for the home command.
#[derive(Args)]
pub struct HomeArgs {
    /// Shelf page to show for every category (0-indexed).
    #[arg(long, default_value = "0")]
    pub shelf_page: usize,
}

/// Arguments for the order command.
#[derive(Args)]
pub struct OrderArgs {
    /// Item to buy as `<id>` or `<id>:<quantity>`. Repeatable.
    #[arg(short, long = "item", required = true)]
    pub items: Vec<String>,

    /// Recipient name.
    #[arg(long)]
    pub name: Option<String>,

    /// Recipient phone.
    #[arg(long)]
    pub phone: Option<String>,

    /// Delivery address.
    #[arg(long)]
    pub address: Option<String>,

    /// Prefill blank shipping fields from the default saved address.
    #[arg(long)]
    pub saved_address: bool,

    /// Note for the courier.
    #[arg(long)]
    pub message: Option<String>,

    /// Payment method: card, transfer, phone, kakao.
    #[arg(long, default_value = "card")]
    pub payment: String,

    /// Skip confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the account command.
#[derive(Args)]
pub struct AccountArgs {
    /// New display name to apply to the profile.
    #[arg(long)]
    pub name: Option<String>,

    /// New phone number to apply to the profile.
    #[arg(long)]
    pub phone: Option<String>,
}

/// Arguments for the support command.
#[derive(Args)]
pub struct SupportArgs {
    #[command(subcommand)]
    pub command: SupportCommand,
}

#[derive(Subcommand)]
pub enum SupportCommand {
    /// List customer center notices.
    Notices,
    /// Show frequently asked questions.
    Faq,
    /// Submit a 1:1 inquiry.
    Inquiry {
        /// Inquiry title.
        #[arg(long)]
        title: String,

        /// Inquiry body.
        #[arg(long)]
        content: String,
    },
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,

        /// File to create; a `.json` name writes JSON instead of TOML.
        #[arg(short, long, default_value = "storefront.toml")]
        output: String,
    },
    /// Validate the config file.
    Validate,
}
