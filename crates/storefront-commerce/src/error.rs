//! Commerce error types.

use thiserror::Error;

use crate::ids::{AddressId, ProductId};

/// Errors that can occur in storefront operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// Product id is not in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Category name does not match any known category.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Catalog dictionaries or fixture products are malformed.
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    /// Item not in cart.
    #[error("Item not in cart: {0}")]
    ItemNotInCart(ProductId),

    /// Checkout was entered or advanced without any selected items.
    #[error("No items selected for checkout")]
    EmptySelection,

    /// Invalid checkout state transition.
    #[error("Invalid checkout transition from {from} to {to}")]
    InvalidCheckoutTransition { from: String, to: String },

    /// Checkout incomplete.
    #[error("Checkout incomplete: missing {0}")]
    CheckoutIncomplete(String),

    /// A form was submitted with required fields left blank.
    #[error("Missing required fields: {0}")]
    MissingFields(String),

    /// Saved address id is not in the address book.
    #[error("Address not found: {0}")]
    AddressNotFound(AddressId),

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
