//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use storefront_commerce::catalog::{Catalog, CatalogDictionary};
use storefront_commerce::{Currency, Money};

use crate::config::CliConfig;
use crate::output::Output;

/// Config file names searched for, in order, in each directory.
pub const CONFIG_NAMES: [&str; 3] = ["storefront.toml", ".storefront.toml", "storefront.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// Seed from the command line, overriding the config.
    pub seed: Option<u64>,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, seed: Option<u64>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config = if let Some(path) = config_path {
            CliConfig::load(path)?
        } else {
            // Try to find config in current directory or parent directories
            find_config(&cwd).unwrap_or_default()
        };

        Ok(Self {
            config,
            output,
            cwd,
            seed,
        })
    }

    /// The seed in effect, if any.
    pub fn effective_seed(&self) -> Option<u64> {
        self.seed.or(self.config.catalog.seed)
    }

    pub fn currency(&self) -> Result<Currency> {
        self.config.checkout.currency()
    }

    pub fn shipping_fee(&self) -> Result<Money> {
        self.config.checkout.shipping_fee()
    }

    /// Generate the catalog for this run.
    pub fn catalog(&self) -> Result<Catalog> {
        let currency = self.currency()?;
        let spinner = self.output.spinner("Generating catalog...");

        let catalog = match self.effective_seed() {
            Some(seed) => {
                tracing::debug!(seed, "generating seeded catalog");
                Catalog::generate(
                    CatalogDictionary::standard(),
                    currency,
                    &mut StdRng::seed_from_u64(seed),
                )
            }
            None => Catalog::generate(
                CatalogDictionary::standard(),
                currency,
                &mut rand::thread_rng(),
            ),
        };

        spinner.finish_and_clear();
        self.output
            .debug(&format!("Generated {} products", catalog.len()));
        Ok(catalog)
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if Path::new(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }
}

/// Find the nearest config file walking up from `start`.
pub fn find_config_path(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        for name in &CONFIG_NAMES {
            let config_path = current.join(name);
            if config_path.exists() {
                return Some(config_path);
            }
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Find and load config from the directory tree.
fn find_config(start: &Path) -> Option<CliConfig> {
    let path = find_config_path(start)?;
    match CliConfig::load(path.to_str()?) {
        Ok(config) => Some(config),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable config");
            None
        }
    }
}
