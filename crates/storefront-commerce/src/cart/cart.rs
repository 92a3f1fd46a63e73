//! Cart and cart item types.

use serde::{Deserialize, Serialize};

use crate::cart::CartPricing;
use crate::catalog::Product;
use crate::checkout::CheckoutHandoff;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};

/// Maximum quantity allowed per cart item.
pub const MAX_QUANTITY_PER_ITEM: u32 = 999;
/// Quantities never drop below this.
pub const MIN_QUANTITY: u32 = 1;

/// Coerce raw quantity input into a valid quantity.
///
/// Leading digits are read the way a browser number field reports them;
/// anything that yields no number or a value below 1 becomes 1, and values
/// above [`MAX_QUANTITY_PER_ITEM`] are clamped.
pub fn coerce_quantity(raw: &str) -> u32 {
    let trimmed = raw.trim();
    let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let digits = &digits[..end];
    match digits.parse::<u64>() {
        Ok(0) => MIN_QUANTITY,
        Ok(n) => clamp_quantity(n),
        // Only a run too long for u64 fails to parse here.
        Err(_) if !digits.is_empty() => MAX_QUANTITY_PER_ITEM,
        Err(_) => MIN_QUANTITY,
    }
}

/// A shopping cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Cart {
    /// Items in the cart, in the order they were added.
    pub items: Vec<CartItem>,
    /// Cart currency.
    pub currency: Currency,
}

impl Cart {
    /// Create an empty cart.
    pub fn new(currency: Currency) -> Self {
        Self {
            items: Vec::new(),
            currency,
        }
    }

    /// Add a product to the cart at its effective price.
    ///
    /// If the product is already in the cart its quantity grows instead.
    /// Quantities are clamped to `1..=MAX_QUANTITY_PER_ITEM`.
    pub fn add_product(&mut self, product: &Product, quantity: u32) -> Result<(), CommerceError> {
        let unit_price = product.effective_price();
        if unit_price.currency != self.currency {
            return Err(CommerceError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                got: unit_price.currency.code().to_string(),
            });
        }

        let quantity = clamp_quantity(u64::from(quantity));
        if let Some(existing) = self.items.iter_mut().find(|i| i.product_id == product.id) {
            existing.quantity =
                clamp_quantity(u64::from(existing.quantity) + u64::from(quantity));
            return Ok(());
        }

        self.items.push(CartItem {
            product_id: product.id,
            name: product.name.clone(),
            image_url: product.image_url.clone(),
            unit_price,
            quantity,
            selected: true,
        });
        Ok(())
    }

    /// Change an item's quantity by `delta`, never going below 1.
    ///
    /// Returns the new quantity.
    pub fn change_quantity(&mut self, product_id: ProductId, delta: i64) -> Result<u32, CommerceError> {
        let item = self.item_mut(product_id)?;
        let target = i64::from(item.quantity)
            .saturating_add(delta)
            .max(i64::from(MIN_QUANTITY));
        item.quantity = clamp_quantity(target as u64);
        Ok(item.quantity)
    }

    pub fn increment(&mut self, product_id: ProductId) -> Result<u32, CommerceError> {
        self.change_quantity(product_id, 1)
    }

    /// Decrement an item's quantity; at 1 this is a no-op.
    pub fn decrement(&mut self, product_id: ProductId) -> Result<u32, CommerceError> {
        self.change_quantity(product_id, -1)
    }

    /// Set an item's quantity from raw text input. See [`coerce_quantity`].
    pub fn set_quantity_input(&mut self, product_id: ProductId, raw: &str) -> Result<u32, CommerceError> {
        let item = self.item_mut(product_id)?;
        item.quantity = coerce_quantity(raw);
        Ok(item.quantity)
    }

    /// Remove an item from the cart. Returns whether it was present.
    pub fn remove(&mut self, product_id: ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| i.product_id != product_id);
        self.items.len() < len_before
    }

    /// Flip an item's selected flag. Returns the new value.
    pub fn toggle_selected(&mut self, product_id: ProductId) -> Result<bool, CommerceError> {
        let item = self.item_mut(product_id)?;
        item.selected = !item.selected;
        Ok(item.selected)
    }

    /// Select or deselect every item.
    pub fn select_all(&mut self, selected: bool) {
        for item in &mut self.items {
            item.selected = selected;
        }
    }

    /// Check if every item is selected. False for an empty cart.
    pub fn all_selected(&self) -> bool {
        !self.items.is_empty() && self.items.iter().all(|i| i.selected)
    }

    /// Check if some but not all items are selected.
    pub fn partially_selected(&self) -> bool {
        let selected = self.selected_items().count();
        selected > 0 && selected < self.items.len()
    }

    pub fn selected_items(&self) -> impl Iterator<Item = &CartItem> {
        self.items.iter().filter(|i| i.selected)
    }

    /// Get total item count (sum of quantities).
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Get number of distinct products.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Message shown in place of the item list.
    pub fn empty_message(&self) -> Option<&'static str> {
        self.is_empty().then_some("Your cart is empty.")
    }

    /// Get an item by product ID.
    pub fn get(&self, product_id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|i| i.product_id == product_id)
    }

    /// Sum of `unit_price * quantity` over selected items.
    pub fn selected_subtotal(&self) -> Result<Money, CommerceError> {
        self.selected_items()
            .try_fold(Money::zero(self.currency), |acc, item| {
                acc.checked_add(&item.line_total()?)
            })
    }

    /// Calculate the selected subtotal plus a flat shipping fee.
    pub fn pricing(&self, shipping_fee: Money) -> Result<CartPricing, CommerceError> {
        let selected_subtotal = self.selected_subtotal()?;
        let grand_total = selected_subtotal.checked_add(&shipping_fee)?;
        Ok(CartPricing {
            selected_subtotal,
            shipping_fee,
            grand_total,
            selected_count: self.selected_items().count(),
            item_count: self.item_count(),
        })
    }

    /// Package the selected items for the checkout flow.
    pub fn checkout_handoff(&self) -> Result<CheckoutHandoff, CommerceError> {
        let items: Vec<CartItem> = self.selected_items().cloned().collect();
        if items.is_empty() {
            return Err(CommerceError::EmptySelection);
        }
        let subtotal = self.selected_subtotal()?;
        Ok(CheckoutHandoff { items, subtotal })
    }

    fn item_mut(&mut self, product_id: ProductId) -> Result<&mut CartItem, CommerceError> {
        self.items
            .iter_mut()
            .find(|i| i.product_id == product_id)
            .ok_or(CommerceError::ItemNotInCart(product_id))
    }
}

fn clamp_quantity(quantity: u64) -> u32 {
    quantity.clamp(u64::from(MIN_QUANTITY), u64::from(MAX_QUANTITY_PER_ITEM)) as u32
}

/// A product line in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    pub product_id: ProductId,
    /// Product name (denormalized for display).
    pub name: String,
    pub image_url: String,
    /// Price per unit, captured when the product was added.
    pub unit_price: Money,
    /// Quantity, at least 1.
    pub quantity: u32,
    /// Whether the item is included in the order.
    pub selected: bool,
}

impl CartItem {
    /// `unit_price * quantity`.
    pub fn line_total(&self) -> Result<Money, CommerceError> {
        self.unit_price.checked_mul(i64::from(self.quantity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::product::test_support::product;

    fn cart_with(products: &[(Product, u32)]) -> Cart {
        let mut cart = Cart::new(Currency::KRW);
        for (p, qty) in products {
            cart.add_product(p, *qty).unwrap();
        }
        cart
    }

    #[test]
    fn test_add_product_uses_effective_price() {
        let cart = cart_with(&[(product(1, "Samsung TV", 100_000, 15), 1)]);
        let item = cart.get(ProductId::new(1)).unwrap();
        assert_eq!(item.unit_price.amount, 85_000);
        assert!(item.selected);
    }

    #[test]
    fn test_add_same_product_increases_quantity() {
        let p = product(1, "LG Monitor", 10_000, 0);
        let cart = cart_with(&[(p.clone(), 1), (p, 2)]);
        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_selected_subtotal_and_total() {
        let mut cart = cart_with(&[
            (product(1, "A x", 10_000, 0), 2),
            (product(2, "B y", 5_000, 0), 1),
        ]);
        cart.toggle_selected(ProductId::new(2)).unwrap();

        let pricing = cart.pricing(Money::new(3000, Currency::KRW)).unwrap();
        assert_eq!(pricing.selected_subtotal.amount, 20_000);
        assert_eq!(pricing.grand_total.amount, 23_000);
        assert_eq!(pricing.selected_count, 1);
        assert_eq!(pricing.item_count, 3);
    }

    #[test]
    fn test_decrement_stops_at_one() {
        let mut cart = cart_with(&[(product(1, "A x", 1000, 0), 1)]);
        assert_eq!(cart.decrement(ProductId::new(1)).unwrap(), 1);
        assert_eq!(cart.increment(ProductId::new(1)).unwrap(), 2);
        assert_eq!(cart.change_quantity(ProductId::new(1), -10).unwrap(), 1);
    }

    #[test]
    fn test_quantity_is_capped() {
        let mut cart = cart_with(&[(product(1, "A x", 1000, 0), 5000)]);
        assert_eq!(cart.get(ProductId::new(1)).unwrap().quantity, MAX_QUANTITY_PER_ITEM);
        assert_eq!(cart.increment(ProductId::new(1)).unwrap(), MAX_QUANTITY_PER_ITEM);
    }

    #[test]
    fn test_coerce_quantity() {
        assert_eq!(coerce_quantity("3"), 3);
        assert_eq!(coerce_quantity(" 12 "), 12);
        assert_eq!(coerce_quantity("4abc"), 4);
        assert_eq!(coerce_quantity("abc"), 1);
        assert_eq!(coerce_quantity(""), 1);
        assert_eq!(coerce_quantity("0"), 1);
        assert_eq!(coerce_quantity("-5"), 1);
        assert_eq!(coerce_quantity("100000"), MAX_QUANTITY_PER_ITEM);
        assert_eq!(coerce_quantity("99999999999999999999999"), MAX_QUANTITY_PER_ITEM);
    }

    #[test]
    fn test_set_quantity_input() {
        let mut cart = cart_with(&[(product(1, "A x", 1000, 0), 2)]);
        assert_eq!(cart.set_quantity_input(ProductId::new(1), "oops").unwrap(), 1);
        assert_eq!(
            cart.set_quantity_input(ProductId::new(9), "2"),
            Err(CommerceError::ItemNotInCart(ProductId::new(9)))
        );
    }

    #[test]
    fn test_selection_queries() {
        let mut cart = cart_with(&[
            (product(1, "A x", 1000, 0), 1),
            (product(2, "B y", 1000, 0), 1),
        ]);
        assert!(cart.all_selected());
        assert!(!cart.partially_selected());

        cart.toggle_selected(ProductId::new(1)).unwrap();
        assert!(!cart.all_selected());
        assert!(cart.partially_selected());

        cart.select_all(false);
        assert!(!cart.partially_selected());
        assert_eq!(cart.selected_subtotal().unwrap().amount, 0);

        cart.select_all(true);
        assert!(cart.all_selected());
    }

    #[test]
    fn test_remove_and_empty_state() {
        let mut cart = cart_with(&[(product(1, "A x", 1000, 0), 1)]);
        assert!(cart.remove(ProductId::new(1)));
        assert!(!cart.remove(ProductId::new(1)));
        assert!(cart.is_empty());
        assert!(!cart.all_selected());
        assert_eq!(cart.empty_message(), Some("Your cart is empty."));
    }

    #[test]
    fn test_handoff_requires_selection() {
        let mut cart = cart_with(&[(product(1, "A x", 1000, 0), 2)]);
        let handoff = cart.checkout_handoff().unwrap();
        assert_eq!(handoff.items.len(), 1);
        assert_eq!(handoff.subtotal.amount, 2000);

        cart.select_all(false);
        assert_eq!(cart.checkout_handoff(), Err(CommerceError::EmptySelection));
    }

    #[test]
    fn test_currency_mismatch_rejected() {
        let mut cart = Cart::new(Currency::USD);
        let result = cart.add_product(&product(1, "A x", 1000, 0), 1);
        assert!(matches!(result, Err(CommerceError::CurrencyMismatch { .. })));
    }
}
