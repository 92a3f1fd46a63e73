//! Checkout module.
//!
//! Contains the checkout flow, shipping details and order types.

mod flow;
mod order;
mod shipping;

pub use flow::{CheckoutFlow, CheckoutStep};
pub use order::{CheckoutHandoff, ConfirmedOrder, OrderDraft, PaymentMethod};
pub use shipping::ShippingInfo;
