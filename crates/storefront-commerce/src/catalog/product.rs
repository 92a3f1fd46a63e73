//! Product records.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::Category;
use crate::ids::ProductId;
use crate::money::Money;

/// A customer rating with one decimal place, stored as tenths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rating(u8);

impl Rating {
    /// Lowest rating the generator produces.
    pub const MIN: Rating = Rating(30);
    /// Highest possible rating.
    pub const MAX: Rating = Rating(50);

    /// Create a rating from tenths (e.g., 43 for 4.3), capped at 5.0.
    pub fn from_tenths(tenths: u8) -> Self {
        Self(tenths.min(Self::MAX.0))
    }

    /// Round a decimal value to one place, clamped to `0.0..=5.0`.
    pub fn from_f64(value: f64) -> Self {
        let tenths = (value * 10.0).round().clamp(0.0, f64::from(Self::MAX.0));
        Self(tenths as u8)
    }

    pub fn tenths(&self) -> u8 {
        self.0
    }

    pub fn value(&self) -> f64 {
        f64::from(self.0) / 10.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.0 / 10, self.0 % 10)
    }
}

/// A product in the catalog. Immutable once generated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Sequential product identifier, starting at 1.
    pub id: ProductId,
    /// Display name, `"<brand> <product type>"`.
    pub name: String,
    /// Marketing copy for the detail page.
    pub description: String,
    /// Placeholder image URL.
    pub image_url: String,
    /// List price before discount.
    pub price: Money,
    /// Discount percentage: 0, or 10..=49.
    pub discount_percent: u8,
    /// Average rating, 3.0..=5.0.
    pub rating: Rating,
    pub category: Category,
    pub brand: String,
    pub product_type: String,
    /// Units in stock, 1..=100.
    pub stock: u32,
    pub created_at: DateTime<Utc>,
    /// Shown with a "new" badge.
    pub is_new: bool,
}

impl Product {
    /// Price after applying the discount, rounded to the smallest unit.
    pub fn effective_price(&self) -> Money {
        self.price.discounted(self.discount_percent)
    }

    /// Check if the product is on sale.
    pub fn has_discount(&self) -> bool {
        self.discount_percent > 0
    }

    /// Discount badge text (e.g., "15%"), only for discounted products.
    pub fn discount_badge(&self) -> Option<String> {
        self.has_discount()
            .then(|| format!("{}%", self.discount_percent))
    }

    /// Amount saved against the list price.
    pub fn savings(&self) -> Money {
        Money::new(
            self.price.amount - self.effective_price().amount,
            self.price.currency,
        )
    }

    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::money::Currency;

    /// Build a product with the given id, price and discount; other fields are fixed.
    pub fn product(id: u64, name: &str, price: i64, discount_percent: u8) -> Product {
        let (brand, product_type) = name.split_once(' ').unwrap_or((name, ""));
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            description: String::new(),
            image_url: String::new(),
            price: Money::new(price, Currency::KRW),
            discount_percent,
            rating: Rating::from_tenths(40),
            category: Category::Electronics,
            brand: brand.to_string(),
            product_type: product_type.to_string(),
            stock: 10,
            created_at: DateTime::<Utc>::default(),
            is_new: false,
        }
    }
}
