//! CLI configuration.

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use storefront_commerce::cart::DEFAULT_SHIPPING_FEE;
use storefront_commerce::search::{DEFAULT_PAGE_SIZE, DEFAULT_SHELF_SIZE, DEFAULT_SHELF_WINDOW};
use storefront_commerce::{Currency, Money};

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CliConfig {
    /// Catalog generation.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// List and shelf layout.
    #[serde(default)]
    pub display: DisplayConfig,

    /// Checkout pricing.
    #[serde(default)]
    pub checkout: CheckoutConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = if path.ends_with(".json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))
    }
}

/// Catalog generation settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CatalogConfig {
    /// Seed for reproducible catalogs. Random when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

/// Layout settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Products per list page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Products per home shelf.
    #[serde(default = "default_shelf_size")]
    pub shelf_size: usize,

    /// Products visible at once on a shelf.
    #[serde(default = "default_shelf_window")]
    pub shelf_window: usize,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_shelf_size() -> usize {
    DEFAULT_SHELF_SIZE
}

fn default_shelf_window() -> usize {
    DEFAULT_SHELF_WINDOW
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            shelf_size: default_shelf_size(),
            shelf_window: default_shelf_window(),
        }
    }
}

/// Checkout settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckoutConfig {
    /// Flat shipping fee in the currency's smallest unit.
    #[serde(default = "default_shipping_fee")]
    pub shipping_fee: i64,

    /// ISO currency code for prices.
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_shipping_fee() -> i64 {
    DEFAULT_SHIPPING_FEE
}

fn default_currency() -> String {
    Currency::default().code().to_string()
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            shipping_fee: default_shipping_fee(),
            currency: default_currency(),
        }
    }
}

impl CheckoutConfig {
    pub fn currency(&self) -> Result<Currency> {
        Currency::from_code(&self.currency)
            .ok_or_else(|| anyhow!("Unsupported currency in config: {}", self.currency))
    }

    pub fn shipping_fee(&self) -> Result<Money> {
        if self.shipping_fee < 0 {
            return Err(anyhow!("Shipping fee must not be negative: {}", self.shipping_fee));
        }
        Ok(Money::new(self.shipping_fee, self.currency()?))
    }
}

/// Generate a default storefront.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# Storefront configuration

[catalog]
# Fix the seed to get the same catalog on every run.
# seed = 42

[display]
page_size = {page_size}
shelf_size = {shelf_size}
shelf_window = {shelf_window}

[checkout]
shipping_fee = {shipping_fee}
currency = "{currency}"
"#,
        page_size = DEFAULT_PAGE_SIZE,
        shelf_size = DEFAULT_SHELF_SIZE,
        shelf_window = DEFAULT_SHELF_WINDOW,
        shipping_fee = DEFAULT_SHIPPING_FEE,
        currency = default_currency(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config: CliConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: CliConfig = toml::from_str("[catalog]\nseed = 7\n[display]\npage_size = 24\n").unwrap();
        assert_eq!(config.catalog.seed, Some(7));
        assert_eq!(config.display.page_size, 24);
        assert_eq!(config.display.shelf_window, 6);
        assert_eq!(config.checkout.shipping_fee().unwrap().amount, 3000);
    }

    #[test]
    fn test_invalid_checkout_values() {
        let config = CheckoutConfig {
            shipping_fee: -1,
            currency: "KRW".to_string(),
        };
        assert!(config.shipping_fee().is_err());

        let config = CheckoutConfig {
            shipping_fee: 0,
            currency: "XYZ".to_string(),
        };
        assert!(config.currency().is_err());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["storefront.toml", "storefront.json"] {
            let path = dir.path().join(name);
            let path = path.to_str().unwrap();
            let mut config = CliConfig::default();
            config.catalog.seed = Some(11);
            config.save(path).unwrap();
            assert_eq!(CliConfig::load(path).unwrap(), config);
        }
    }
}
