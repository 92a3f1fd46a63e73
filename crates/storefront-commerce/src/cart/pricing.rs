//! Cart pricing calculations.

use serde::{Deserialize, Serialize};

use crate::money::{Currency, Money};

/// Flat shipping fee in won.
pub const DEFAULT_SHIPPING_FEE: i64 = 3000;

/// The default flat shipping fee in the given currency's smallest unit.
pub fn default_shipping_fee(currency: Currency) -> Money {
    Money::new(DEFAULT_SHIPPING_FEE, currency)
}

/// Pricing breakdown for the selected part of a cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartPricing {
    /// Sum of line totals over selected items.
    pub selected_subtotal: Money,
    /// Flat shipping fee.
    pub shipping_fee: Money,
    /// Final total (subtotal + shipping).
    pub grand_total: Money,
    /// Number of selected lines.
    pub selected_count: usize,
    /// Sum of quantities over all lines.
    pub item_count: u64,
}

impl CartPricing {
    /// Check whether anything is selected for purchase.
    pub fn has_selection(&self) -> bool {
        self.selected_count > 0
    }
}
