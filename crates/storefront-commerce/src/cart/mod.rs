//! Shopping cart module.
//!
//! Contains the cart, its items, quantity coercion and pricing.

mod cart;
mod pricing;

pub use cart::{coerce_quantity, Cart, CartItem, MAX_QUANTITY_PER_ITEM, MIN_QUANTITY};
pub use pricing::{default_shipping_fee, CartPricing, DEFAULT_SHIPPING_FEE};
