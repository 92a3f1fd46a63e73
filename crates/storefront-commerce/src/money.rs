//! Money type for representing monetary values.
//!
//! Amounts are integers in the smallest unit of the currency (won for KRW,
//! cents for USD), so totals never accumulate floating-point error.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CommerceError;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    KRW,
    USD,
    EUR,
    GBP,
    JPY,
}

impl Currency {
    /// Get the currency code (e.g., "KRW").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::KRW => "KRW",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
        }
    }

    /// Get the currency symbol (e.g., "₩").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::KRW => "\u{20a9}",
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
            Currency::JPY => "\u{00a5}",
        }
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::KRW | Currency::JPY => 0,
            _ => 2,
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_uppercase().as_str() {
            "KRW" => Some(Currency::KRW),
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
            "JPY" => Some(Currency::JPY),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in the smallest currency unit.
    pub amount: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from minor units.
    pub const fn new(amount: i64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Create a zero amount in the given currency.
    pub const fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }

    /// Check if this is positive.
    pub fn is_positive(&self) -> bool {
        self.amount > 0
    }

    /// Add another Money value.
    pub fn checked_add(&self, other: &Money) -> Result<Money, CommerceError> {
        self.ensure_same_currency(other)?;
        self.amount
            .checked_add(other.amount)
            .map(|amount| Money::new(amount, self.currency))
            .ok_or(CommerceError::Overflow)
    }

    /// Subtract another Money value.
    pub fn checked_sub(&self, other: &Money) -> Result<Money, CommerceError> {
        self.ensure_same_currency(other)?;
        self.amount
            .checked_sub(other.amount)
            .map(|amount| Money::new(amount, self.currency))
            .ok_or(CommerceError::Overflow)
    }

    /// Multiply by a quantity.
    pub fn checked_mul(&self, factor: i64) -> Result<Money, CommerceError> {
        self.amount
            .checked_mul(factor)
            .map(|amount| Money::new(amount, self.currency))
            .ok_or(CommerceError::Overflow)
    }

    /// Apply a percentage discount, rounding half up to the smallest unit.
    ///
    /// Percentages above 100 are treated as 100.
    ///
    /// ```
    /// use storefront_commerce::money::{Currency, Money};
    /// let price = Money::new(12_345, Currency::KRW);
    /// assert_eq!(price.discounted(10).amount, 11_111);
    /// ```
    pub fn discounted(&self, percent: u8) -> Money {
        let keep = 100 - i128::from(percent.min(100));
        let scaled = i128::from(self.amount) * keep;
        let rounded = (scaled + 50).div_euclid(100);
        // |rounded| <= |amount|, so the value always fits back into i64.
        Money::new(rounded as i64, self.currency)
    }

    /// Sum Money values, failing on overflow or mixed currencies.
    pub fn try_sum<'a>(
        iter: impl IntoIterator<Item = &'a Money>,
        currency: Currency,
    ) -> Result<Money, CommerceError> {
        iter.into_iter()
            .try_fold(Money::zero(currency), |acc, m| acc.checked_add(m))
    }

    /// Format as a display string (e.g., "₩1,234,000").
    pub fn display(&self) -> String {
        let sign = if self.amount < 0 { "-" } else { "" };
        format!("{}{}{}", sign, self.currency.symbol(), self.display_amount_abs())
    }

    /// Format as a display string without symbol (e.g., "1,234,000").
    pub fn display_amount(&self) -> String {
        let sign = if self.amount < 0 { "-" } else { "" };
        format!("{}{}", sign, self.display_amount_abs())
    }

    fn display_amount_abs(&self) -> String {
        let places = self.currency.decimal_places();
        let divisor = 10_u64.pow(places);
        let abs = self.amount.unsigned_abs();
        let whole = group_thousands(abs / divisor);
        if places == 0 {
            whole
        } else {
            format!("{}.{:0width$}", whole, abs % divisor, width = places as usize)
        }
    }

    fn ensure_same_currency(&self, other: &Money) -> Result<(), CommerceError> {
        if self.currency != other.currency {
            return Err(CommerceError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                got: other.currency.code().to_string(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_display_krw() {
        assert_eq!(Money::new(1_234_000, Currency::KRW).display(), "\u{20a9}1,234,000");
        assert_eq!(Money::new(999, Currency::KRW).display(), "\u{20a9}999");
        assert_eq!(Money::new(0, Currency::KRW).display(), "\u{20a9}0");
    }

    #[test]
    fn test_money_display_decimal_currency() {
        assert_eq!(Money::new(123_456, Currency::USD).display(), "$1,234.56");
        assert_eq!(Money::new(5, Currency::USD).display(), "$0.05");
        assert_eq!(Money::new(-1500, Currency::USD).display(), "-$15.00");
    }

    #[test]
    fn test_money_addition() {
        let a = Money::new(1000, Currency::KRW);
        let b = Money::new(500, Currency::KRW);
        assert_eq!(a.checked_add(&b).unwrap().amount, 1500);
    }

    #[test]
    fn test_money_currency_mismatch() {
        let krw = Money::new(1000, Currency::KRW);
        let usd = Money::new(1000, Currency::USD);
        assert!(matches!(
            krw.checked_add(&usd),
            Err(CommerceError::CurrencyMismatch { .. })
        ));
    }

    #[test]
    fn test_money_overflow() {
        let big = Money::new(i64::MAX, Currency::KRW);
        assert_eq!(big.checked_mul(2), Err(CommerceError::Overflow));
        assert_eq!(
            big.checked_add(&Money::new(1, Currency::KRW)),
            Err(CommerceError::Overflow)
        );
    }

    #[test]
    fn test_discounted_rounds_half_up() {
        let price = Money::new(10_005, Currency::KRW);
        // 10005 * 0.5 = 5002.5 -> 5003
        assert_eq!(price.discounted(50).amount, 5003);
        assert_eq!(price.discounted(0), price);
        assert_eq!(price.discounted(100).amount, 0);
        assert_eq!(price.discounted(200).amount, 0);
    }

    #[test]
    fn test_discounted_is_monotonic() {
        for amount in [1, 99, 10_000, 1_999_999] {
            let price = Money::new(amount, Currency::KRW);
            for d in 0..100u8 {
                assert!(price.discounted(d) >= price.discounted(d + 1));
            }
        }
    }

    #[test]
    fn test_try_sum() {
        let values = [Money::new(100, Currency::KRW), Money::new(250, Currency::KRW)];
        assert_eq!(Money::try_sum(&values, Currency::KRW).unwrap().amount, 350);
        assert_eq!(Money::try_sum(std::iter::empty(), Currency::KRW).unwrap().amount, 0);
    }

    #[test]
    fn test_money_orders_by_amount() {
        let low = Money::new(900, Currency::KRW);
        let high = Money::new(1200, Currency::KRW);
        assert!(low < high);
        assert_eq!([high, low].iter().max(), Some(&high));
        assert!(Currency::KRW < Currency::USD);
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("krw"), Some(Currency::KRW));
        assert_eq!(Currency::from_code("USD"), Some(Currency::USD));
        assert_eq!(Currency::from_code("INVALID"), None);
    }
}
