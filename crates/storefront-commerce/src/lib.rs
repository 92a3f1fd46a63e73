//! Domain types and logic for a mock e-commerce storefront.
//!
//! Everything runs in memory against a generated catalog:
//!
//! - **Catalog**: category dictionaries, the mock catalog generator, product lookup
//! - **Search**: text/category filters, price sorting, paging, home shelves
//! - **Cart**: items with selection flags, quantity rules, subtotal and shipping
//! - **Checkout**: Shipping → Payment → Review → Confirmed state machine
//! - **Session**: cart, wishlist and order history with change subscriptions
//! - **Account**: profile edits and saved addresses with a single default
//! - **Routes** and the **Support** center (notices, FAQ, inquiries, chat mock)
//!
//! # Example
//!
//! ```rust
//! use storefront_commerce::prelude::*;
//!
//! let catalog = Catalog::seeded(42);
//! let product = catalog.find(ProductId::new(1)).unwrap();
//!
//! let mut cart = Cart::new(Currency::KRW);
//! cart.add_product(product, 2).unwrap();
//!
//! let pricing = cart.pricing(default_shipping_fee(Currency::KRW)).unwrap();
//! println!("Total: {}", pricing.grand_total.display());
//!
//! let mut checkout = CheckoutFlow::enter(cart.checkout_handoff().ok(), pricing.shipping_fee);
//! checkout
//!     .set_shipping(ShippingInfo::new("Gildong Hong", "010-1234-5678", "Seoul"))
//!     .unwrap();
//! checkout.advance().unwrap();
//! checkout.advance().unwrap();
//! let order = checkout.submit(chrono::Utc::now()).unwrap();
//! assert_eq!(order.total(), pricing.grand_total);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod account;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod routes;
pub mod search;
pub mod session;
pub mod support;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{
        Catalog, CatalogDictionary, CatalogGenerator, CatalogProvider, Category,
        CategoryDictionary, PriceRange, Product, Rating,
    };

    // Search
    pub use crate::search::{
        filter_by_category, filter_by_text, home_shelves, page_window, CategoryShelf, Filter,
        Pagination, SearchQuery, SearchResults, SortOption,
    };

    // Cart
    pub use crate::cart::{coerce_quantity, default_shipping_fee, Cart, CartItem, CartPricing};

    // Checkout
    pub use crate::checkout::{
        CheckoutFlow, CheckoutHandoff, CheckoutStep, ConfirmedOrder, OrderDraft, PaymentMethod,
        ShippingInfo,
    };

    // Session, routes, account, support
    pub use crate::account::{
        AccountProfile, AccountSummary, AddressBook, AddressEntry, MembershipLevel,
        ProfileUpdate, SavedAddress,
    };
    pub use crate::routes::Route;
    pub use crate::session::{SessionEvent, SessionStore};
    pub use crate::support::{
        faqs, notices, ChatMessage, ChatSender, ChatSession, ChatStatus, Faq, Inquiry, Notice,
    };
}
