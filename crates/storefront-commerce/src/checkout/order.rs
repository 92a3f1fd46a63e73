//! Order types.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cart::CartItem;
use crate::checkout::ShippingInfo;
use crate::error::CommerceError;
use crate::ids::OrderNumber;
use crate::money::Money;

/// How the customer pays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Credit or debit card.
    #[default]
    Card,
    /// Bank transfer.
    Transfer,
    /// Mobile phone billing.
    Phone,
    /// KakaoPay.
    Kakao,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::Card,
        PaymentMethod::Transfer,
        PaymentMethod::Phone,
        PaymentMethod::Kakao,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "card",
            PaymentMethod::Transfer => "transfer",
            PaymentMethod::Phone => "phone",
            PaymentMethod::Kakao => "kakao",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "Credit Card",
            PaymentMethod::Transfer => "Bank Transfer",
            PaymentMethod::Phone => "Mobile Payment",
            PaymentMethod::Kakao => "KakaoPay",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for PaymentMethod {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        PaymentMethod::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| CommerceError::CheckoutIncomplete(format!("payment method ({})", s)))
    }
}

/// Selected cart items handed from the cart to checkout, with the subtotal
/// the cart computed for them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckoutHandoff {
    pub items: Vec<CartItem>,
    pub subtotal: Money,
}

impl CheckoutHandoff {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Everything needed to place an order, assembled during checkout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderDraft {
    pub items: Vec<CartItem>,
    pub shipping: ShippingInfo,
    pub payment_method: PaymentMethod,
    /// Sum of the selected line totals.
    pub subtotal: Money,
    /// Flat shipping fee.
    pub shipping_fee: Money,
    /// Amount charged (subtotal + shipping).
    pub total: Money,
}

impl OrderDraft {
    /// Get total item count (sum of quantities).
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }
}

/// A submitted order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConfirmedOrder {
    pub order_number: OrderNumber,
    pub confirmed_at: DateTime<Utc>,
    pub draft: OrderDraft,
}

impl ConfirmedOrder {
    pub fn total(&self) -> Money {
        self.draft.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_method_parse() {
        assert_eq!("kakao".parse::<PaymentMethod>().unwrap(), PaymentMethod::Kakao);
        assert_eq!("CARD".parse::<PaymentMethod>().unwrap(), PaymentMethod::Card);
        assert!("cash".parse::<PaymentMethod>().is_err());
        assert_eq!(PaymentMethod::default(), PaymentMethod::Card);
    }

    #[test]
    fn test_payment_method_serializes_lowercase() {
        let json = serde_json::to_string(&PaymentMethod::Transfer).unwrap();
        assert_eq!(json, "\"transfer\"");
    }
}
