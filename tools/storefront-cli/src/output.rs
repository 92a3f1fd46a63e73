//! Output formatting for the CLI.

use console::{pad_str, style, Alignment};
use indicatif::{ProgressBar, ProgressStyle};
use storefront_commerce::catalog::Product;

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print a step in a process.
    pub fn step(&self, num: usize, total: usize, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style(format!("[{}/{}]", num, total)).dim(), msg);
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        match serde_json::to_string_pretty(value) {
            Ok(json) => println!("{}", json),
            Err(e) => tracing::error!(error = %e, "failed to serialize output"),
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a list item.
    pub fn list_item(&self, item: &str) {
        if self.json {
            return;
        }
        println!("  {} {}", style("•").dim(), item);
    }

    /// Print a table row.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        println!("  {}", pad_columns(cols, widths));
    }

    /// Print one product as a table row.
    pub fn product_row(&self, product: &Product) {
        let id = product.id.to_string();
        let price = price_label(product);
        let rating = product.rating.to_string();
        let tags = badges(product);
        self.table_row(
            &[
                id.as_str(),
                product.name.as_str(),
                price.as_str(),
                rating.as_str(),
                tags.as_str(),
            ],
            &PRODUCT_COLUMNS,
        );
    }

    /// Print the product table header.
    pub fn product_header(&self) {
        self.table_row(&["ID", "NAME", "PRICE", "RATING", ""], &PRODUCT_COLUMNS);
    }

    /// Create a spinner for indeterminate progress.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        if self.json {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(template) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            pb.set_style(template);
        }
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

const PRODUCT_COLUMNS: [usize; 5] = [5, 32, 24, 6, 10];

/// Effective price, followed by the list price when discounted.
pub fn price_label(product: &Product) -> String {
    let effective = product.effective_price().display();
    match product.discount_badge() {
        Some(_) => format!("{} ({})", effective, style(product.price.display()).dim()),
        None => effective,
    }
}

/// Discount and "new" badges.
pub fn badges(product: &Product) -> String {
    let mut out = Vec::new();
    if let Some(badge) = product.discount_badge() {
        out.push(style(badge).red().to_string());
    }
    if product.is_new {
        out.push(style("NEW").cyan().to_string());
    }
    out.join(" ")
}

/// Join columns padded to their display width. Styling escapes do not count
/// toward the width.
fn pad_columns(cols: &[&str], widths: &[usize]) -> String {
    cols.iter()
        .zip(widths.iter())
        .map(|(col, width)| pad_str(col, *width, Alignment::Left, None))
        .collect::<Vec<_>>()
        .join("  ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use console::{measure_text_width, Style};

    #[test]
    fn test_styled_columns_align_with_plain() {
        let red = Style::new().red().force_styling(true);
        let styled = red.apply_to("10%").to_string();
        assert!(styled.len() > 3);

        let plain = pad_columns(&["10%", "x"], &[6, 1]);
        let colored = pad_columns(&[styled.as_str(), "x"], &[6, 1]);
        assert_eq!(measure_text_width(&plain), 9);
        assert_eq!(measure_text_width(&colored), measure_text_width(&plain));
        assert_eq!(console::strip_ansi_codes(&colored), plain);
    }
}
