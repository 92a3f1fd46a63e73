//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CliConfig};
use crate::context::{find_config_path, Context, CONFIG_NAMES};

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force, output } => init_config(&output, force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match find_config_path(&ctx.cwd) {
        Some(path) => ctx.output.debug(&format!("Loaded from {}", path.display())),
        None => ctx.output.debug("No config file found, using defaults"),
    }

    ctx.output.info("[catalog]");
    let seed = ctx
        .effective_seed()
        .map(|s| s.to_string())
        .unwrap_or_else(|| "random".to_string());
    ctx.output.kv("seed", &seed);

    ctx.output.info("[display]");
    ctx.output.kv("page_size", &ctx.config.display.page_size.to_string());
    ctx.output.kv("shelf_size", &ctx.config.display.shelf_size.to_string());
    ctx.output.kv("shelf_window", &ctx.config.display.shelf_window.to_string());

    ctx.output.info("[checkout]");
    ctx.output.kv("shipping_fee", &ctx.config.checkout.shipping_fee.to_string());
    ctx.output.kv("currency", &ctx.config.checkout.currency);

    Ok(())
}

fn init_config(output: &str, force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.resolve_path(output);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    if output.ends_with(".json") {
        CliConfig::default().save(&config_path.to_string_lossy())?;
    } else {
        fs::write(&config_path, generate_default_config())?;
    }
    if !CONFIG_NAMES.iter().any(|name| config_path.ends_with(name)) {
        ctx.output
            .warn("This file name is not discovered automatically; pass it with --config");
    }
    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let (errors, warnings) = check_config(&ctx.config);

    if errors.is_empty() && warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}

/// Collect configuration errors and warnings.
fn check_config(config: &CliConfig) -> (Vec<String>, Vec<String>) {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if let Err(e) = config.checkout.currency() {
        errors.push(e.to_string());
    }
    if config.checkout.shipping_fee < 0 {
        errors.push("checkout.shipping_fee must not be negative".to_string());
    }
    if config.display.page_size == 0 {
        errors.push("display.page_size must be at least 1".to_string());
    }
    if config.display.shelf_window == 0 {
        errors.push("display.shelf_window must be at least 1".to_string());
    }
    if config.display.shelf_window > config.display.shelf_size {
        warnings.push(format!(
            "display.shelf_window ({}) exceeds display.shelf_size ({}); shelves will not page",
            config.display.shelf_window, config.display.shelf_size
        ));
    }

    (errors, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_clean() {
        let (errors, warnings) = check_config(&CliConfig::default());
        assert!(errors.is_empty());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_check_config_reports_problems() {
        let mut config = CliConfig::default();
        config.checkout.currency = "ABC".to_string();
        config.display.page_size = 0;
        config.display.shelf_window = 40;

        let (errors, warnings) = check_config(&config);
        assert_eq!(errors.len(), 2);
        assert_eq!(warnings.len(), 1);
    }
}
