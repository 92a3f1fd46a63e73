//! Session-scoped storefront state.
//!
//! One [`SessionStore`] per browsing session holds the cart, the wishlist and
//! the orders placed so far. Every write notifies subscribers synchronously,
//! in the order they subscribed.

use std::fmt;

use serde::Serialize;

use crate::cart::Cart;
use crate::checkout::ConfirmedOrder;
use crate::ids::{OrderNumber, ProductId, SessionId, SubscriptionId};
use crate::money::{Currency, Money};
use crate::CommerceError;

/// A change to the session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SessionEvent {
    CartChanged { items: usize },
    WishlistChanged { items: usize },
    OrderPlaced(OrderNumber),
}

pub type SessionListener = Box<dyn FnMut(&SessionEvent)>;

/// Cart, wishlist and order history for one session.
pub struct SessionStore {
    id: SessionId,
    cart: Cart,
    wishlist: Vec<ProductId>,
    orders: Vec<ConfirmedOrder>,
    subscribers: Vec<(SubscriptionId, SessionListener)>,
    next_subscription: u64,
}

impl SessionStore {
    /// Create an empty session with a fresh id.
    pub fn new(currency: Currency) -> Self {
        Self::with_id(SessionId::generate(), currency)
    }

    pub fn with_id(id: SessionId, currency: Currency) -> Self {
        Self {
            id,
            cart: Cart::new(currency),
            wishlist: Vec::new(),
            orders: Vec::new(),
            subscribers: Vec::new(),
            next_subscription: 1,
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Replace the cart.
    pub fn set_cart(&mut self, cart: Cart) {
        self.cart = cart;
        self.notify(SessionEvent::CartChanged {
            items: self.cart.unique_item_count(),
        });
    }

    /// Modify the cart in place. Subscribers are notified even if `f` fails,
    /// since it may have changed the cart before returning the error.
    pub fn update_cart<T>(
        &mut self,
        f: impl FnOnce(&mut Cart) -> Result<T, CommerceError>,
    ) -> Result<T, CommerceError> {
        let result = f(&mut self.cart);
        self.notify(SessionEvent::CartChanged {
            items: self.cart.unique_item_count(),
        });
        result
    }

    pub fn wishlist(&self) -> &[ProductId] {
        &self.wishlist
    }

    /// Add a product to the wishlist. Returns false if it was already there.
    pub fn add_to_wishlist(&mut self, product_id: ProductId) -> bool {
        if self.wishlist.contains(&product_id) {
            return false;
        }
        self.wishlist.push(product_id);
        self.notify(SessionEvent::WishlistChanged {
            items: self.wishlist.len(),
        });
        true
    }

    /// Remove a product from the wishlist. Returns whether it was present.
    pub fn remove_from_wishlist(&mut self, product_id: ProductId) -> bool {
        let len_before = self.wishlist.len();
        self.wishlist.retain(|id| *id != product_id);
        let removed = self.wishlist.len() < len_before;
        if removed {
            self.notify(SessionEvent::WishlistChanged {
                items: self.wishlist.len(),
            });
        }
        removed
    }

    pub fn in_wishlist(&self, product_id: ProductId) -> bool {
        self.wishlist.contains(&product_id)
    }

    /// Record a placed order and drop its items from the cart.
    pub fn record_order(&mut self, order: ConfirmedOrder) {
        let ordered: Vec<ProductId> = order.draft.items.iter().map(|i| i.product_id).collect();
        let number = order.order_number.clone();
        self.orders.push(order);
        self.notify(SessionEvent::OrderPlaced(number));

        let before = self.cart.unique_item_count();
        self.cart.items.retain(|i| !ordered.contains(&i.product_id));
        if self.cart.unique_item_count() != before {
            self.notify(SessionEvent::CartChanged {
                items: self.cart.unique_item_count(),
            });
        }
    }

    /// Orders placed in this session, oldest first.
    pub fn orders(&self) -> &[ConfirmedOrder] {
        &self.orders
    }

    /// Sum of all order totals.
    pub fn total_spent(&self) -> Result<Money, CommerceError> {
        Money::try_sum(
            self.orders.iter().map(|o| &o.draft.total),
            self.cart.currency,
        )
    }

    /// Register a listener for session changes.
    pub fn subscribe(&mut self, listener: impl FnMut(&SessionEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId::new(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let len_before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() < len_before
    }

    fn notify(&mut self, event: SessionEvent) {
        tracing::trace!(session = %self.id, ?event, "session changed");
        for (_, listener) in &mut self.subscribers {
            listener(&event);
        }
    }
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("id", &self.id)
            .field("cart", &self.cart)
            .field("wishlist", &self.wishlist)
            .field("orders", &self.orders.len())
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(Currency::default())
    }
}
