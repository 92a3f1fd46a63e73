//! Checkout flow state machine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::checkout::{CheckoutHandoff, ConfirmedOrder, OrderDraft, PaymentMethod, ShippingInfo};
use crate::ids::OrderNumber;
use crate::money::Money;
use crate::routes::Route;
use crate::CommerceError;

/// Steps in the checkout flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CheckoutStep {
    /// Recipient and delivery details.
    Shipping,
    /// Payment method selection.
    Payment,
    /// Order review before submission.
    Review,
    /// Order submitted.
    Confirmed,
}

impl CheckoutStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutStep::Shipping => "shipping",
            CheckoutStep::Payment => "payment",
            CheckoutStep::Review => "review",
            CheckoutStep::Confirmed => "confirmed",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CheckoutStep::Shipping => "Shipping",
            CheckoutStep::Payment => "Payment",
            CheckoutStep::Review => "Review",
            CheckoutStep::Confirmed => "Order Complete",
        }
    }

    /// Get the step index (0-indexed).
    pub fn index(&self) -> u8 {
        match self {
            CheckoutStep::Shipping => 0,
            CheckoutStep::Payment => 1,
            CheckoutStep::Review => 2,
            CheckoutStep::Confirmed => 3,
        }
    }
}

/// Checkout flow state.
///
/// A flow entered without selected items is guarded: it stays on the
/// shipping step, refuses every transition and points back to the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckoutFlow {
    /// Current step.
    pub step: CheckoutStep,
    handoff: Option<CheckoutHandoff>,
    shipping: ShippingInfo,
    payment_method: PaymentMethod,
    shipping_fee: Money,
    confirmed: Option<ConfirmedOrder>,
}

impl CheckoutFlow {
    /// Enter checkout with whatever the cart handed over.
    pub fn enter(handoff: Option<CheckoutHandoff>, shipping_fee: Money) -> Self {
        let handoff = handoff.filter(|h| !h.is_empty());
        if handoff.is_none() {
            tracing::warn!("checkout entered without selected items");
        }
        Self {
            step: CheckoutStep::Shipping,
            handoff,
            shipping: ShippingInfo::default(),
            payment_method: PaymentMethod::default(),
            shipping_fee,
            confirmed: None,
        }
    }

    /// Check whether checkout has nothing to order.
    pub fn is_guarded(&self) -> bool {
        self.confirmed.is_none() && self.handoff.is_none()
    }

    /// Where to send the customer instead of showing checkout.
    pub fn redirect(&self) -> Option<Route> {
        self.is_guarded().then_some(Route::Cart)
    }

    /// Message shown in place of the checkout form when guarded.
    pub fn guard_message(&self) -> Option<&'static str> {
        self.is_guarded()
            .then_some("No items selected. Return to your cart to choose items.")
    }

    pub fn step_index(&self) -> u8 {
        self.step.index()
    }

    pub fn is_complete(&self) -> bool {
        self.step == CheckoutStep::Confirmed
    }

    pub fn shipping(&self) -> &ShippingInfo {
        &self.shipping
    }

    pub fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }

    pub fn handoff(&self) -> Option<&CheckoutHandoff> {
        self.handoff.as_ref()
    }

    /// The submitted order, once confirmed.
    pub fn confirmed_order(&self) -> Option<&ConfirmedOrder> {
        self.confirmed.as_ref()
    }

    /// Advance to the next step.
    ///
    /// Leaving the shipping step requires complete shipping info. The review
    /// step is left only through [`CheckoutFlow::submit`].
    pub fn advance(&mut self) -> Result<CheckoutStep, CommerceError> {
        self.ensure_not_guarded()?;
        let next = match self.step {
            CheckoutStep::Shipping => {
                let missing = self.shipping.missing_fields();
                if !missing.is_empty() {
                    return Err(CommerceError::CheckoutIncomplete(missing.join(", ")));
                }
                CheckoutStep::Payment
            }
            CheckoutStep::Payment => CheckoutStep::Review,
            CheckoutStep::Review => return Err(self.invalid_transition(CheckoutStep::Confirmed)),
            CheckoutStep::Confirmed => {
                return Err(CommerceError::InvalidCheckoutTransition {
                    from: "confirmed".to_string(),
                    to: "none".to_string(),
                })
            }
        };

        tracing::debug!(from = self.step.as_str(), to = next.as_str(), "checkout advanced");
        self.step = next;
        Ok(next)
    }

    /// Go back to the previous step.
    pub fn go_back(&mut self) -> Result<CheckoutStep, CommerceError> {
        self.ensure_not_guarded()?;
        let prev = match self.step {
            CheckoutStep::Shipping => {
                return Err(CommerceError::InvalidCheckoutTransition {
                    from: "shipping".to_string(),
                    to: "none".to_string(),
                })
            }
            CheckoutStep::Payment => CheckoutStep::Shipping,
            CheckoutStep::Review => CheckoutStep::Payment,
            CheckoutStep::Confirmed => return Err(self.invalid_transition(CheckoutStep::Review)),
        };

        tracing::debug!(from = self.step.as_str(), to = prev.as_str(), "checkout went back");
        self.step = prev;
        Ok(prev)
    }

    /// Replace the shipping details. Only allowed on the shipping step.
    pub fn set_shipping(&mut self, shipping: ShippingInfo) -> Result<(), CommerceError> {
        self.ensure_step(CheckoutStep::Shipping)?;
        self.shipping = shipping;
        Ok(())
    }

    /// Choose how to pay. Only allowed on the payment step.
    pub fn set_payment_method(&mut self, method: PaymentMethod) -> Result<(), CommerceError> {
        self.ensure_step(CheckoutStep::Payment)?;
        self.payment_method = method;
        Ok(())
    }

    /// Assemble the order as it currently stands.
    pub fn draft(&self) -> Result<OrderDraft, CommerceError> {
        let handoff = self.handoff.as_ref().ok_or(CommerceError::EmptySelection)?;
        Ok(OrderDraft {
            items: handoff.items.clone(),
            shipping: self.shipping.clone(),
            payment_method: self.payment_method,
            subtotal: handoff.subtotal,
            shipping_fee: self.shipping_fee,
            total: handoff.subtotal.checked_add(&self.shipping_fee)?,
        })
    }

    /// Place the order. Moves Review to Confirmed and consumes the handoff.
    pub fn submit(&mut self, now: DateTime<Utc>) -> Result<ConfirmedOrder, CommerceError> {
        self.ensure_not_guarded()?;
        self.ensure_step(CheckoutStep::Review)?;

        let draft = self.draft()?;
        let order = ConfirmedOrder {
            order_number: OrderNumber::generate(now),
            confirmed_at: now,
            draft,
        };

        tracing::info!(
            order_number = %order.order_number,
            total = %order.draft.total,
            items = order.draft.items.len(),
            payment = order.draft.payment_method.as_str(),
            "order submitted"
        );
        let payload = serde_json::to_string(&order)?;
        tracing::debug!(%payload, "order payload");

        self.handoff = None;
        self.step = CheckoutStep::Confirmed;
        self.confirmed = Some(order.clone());
        Ok(order)
    }

    fn ensure_not_guarded(&self) -> Result<(), CommerceError> {
        if self.is_guarded() {
            return Err(CommerceError::EmptySelection);
        }
        Ok(())
    }

    fn ensure_step(&self, expected: CheckoutStep) -> Result<(), CommerceError> {
        if self.step != expected {
            return Err(self.invalid_transition(expected));
        }
        Ok(())
    }

    fn invalid_transition(&self, to: CheckoutStep) -> CommerceError {
        CommerceError::InvalidCheckoutTransition {
            from: self.step.as_str().to_string(),
            to: to.as_str().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::Cart;
    use crate::catalog::product::test_support::product;
    use crate::money::Currency;

    fn fee() -> Money {
        Money::new(3000, Currency::KRW)
    }

    fn handoff() -> CheckoutHandoff {
        let mut cart = Cart::new(Currency::KRW);
        cart.add_product(&product(1, "A x", 10_000, 0), 2).unwrap();
        cart.checkout_handoff().unwrap()
    }

    fn shipping() -> ShippingInfo {
        ShippingInfo::new("Gildong Hong", "010-1234-5678", "Seoul")
    }

    #[test]
    fn test_guarded_without_handoff() {
        let mut flow = CheckoutFlow::enter(None, fee());
        assert!(flow.is_guarded());
        assert_eq!(flow.redirect(), Some(Route::Cart));
        assert_eq!(flow.advance(), Err(CommerceError::EmptySelection));
        assert_eq!(flow.step_index(), 0);
        assert!(flow.guard_message().is_some());
    }

    #[test]
    fn test_guarded_with_empty_handoff() {
        let empty = CheckoutHandoff {
            items: vec![],
            subtotal: Money::zero(Currency::KRW),
        };
        let mut flow = CheckoutFlow::enter(Some(empty), fee());
        assert!(flow.is_guarded());
        assert_eq!(flow.go_back(), Err(CommerceError::EmptySelection));
        assert_eq!(flow.submit(Utc::now()), Err(CommerceError::EmptySelection));
        assert_eq!(flow.step, CheckoutStep::Shipping);
    }

    #[test]
    fn test_shipping_required_to_advance() {
        let mut flow = CheckoutFlow::enter(Some(handoff()), fee());
        assert!(matches!(flow.advance(), Err(CommerceError::CheckoutIncomplete(_))));
        flow.set_shipping(shipping()).unwrap();
        assert_eq!(flow.advance(), Ok(CheckoutStep::Payment));
    }

    #[test]
    fn test_full_flow() {
        let mut flow = CheckoutFlow::enter(Some(handoff()), fee());
        flow.set_shipping(shipping()).unwrap();
        flow.advance().unwrap();
        assert_eq!(flow.payment_method(), PaymentMethod::Card);
        flow.set_payment_method(PaymentMethod::Kakao).unwrap();
        flow.advance().unwrap();
        assert_eq!(flow.step, CheckoutStep::Review);

        let draft = flow.draft().unwrap();
        assert_eq!(draft.subtotal.amount, 20_000);
        assert_eq!(draft.total.amount, 23_000);

        let order = flow.submit(Utc::now()).unwrap();
        assert_eq!(order.draft.payment_method, PaymentMethod::Kakao);
        assert!(order.order_number.as_str().starts_with("ORD-"));
        assert_eq!(flow.step_index(), 3);
        assert!(flow.is_complete());
        assert!(!flow.is_guarded());
        assert!(flow.handoff().is_none());
        assert_eq!(flow.confirmed_order(), Some(&order));
    }

    #[test]
    fn test_back_and_forth() {
        let mut flow = CheckoutFlow::enter(Some(handoff()), fee());
        assert!(matches!(
            flow.go_back(),
            Err(CommerceError::InvalidCheckoutTransition { .. })
        ));
        flow.set_shipping(shipping()).unwrap();
        flow.advance().unwrap();
        flow.advance().unwrap();
        assert_eq!(flow.go_back(), Ok(CheckoutStep::Payment));
        assert_eq!(flow.go_back(), Ok(CheckoutStep::Shipping));
    }

    #[test]
    fn test_review_only_exits_by_submit() {
        let mut flow = CheckoutFlow::enter(Some(handoff()), fee());
        flow.set_shipping(shipping()).unwrap();
        flow.advance().unwrap();
        assert!(flow.submit(Utc::now()).is_err());
        flow.advance().unwrap();
        assert!(matches!(
            flow.advance(),
            Err(CommerceError::InvalidCheckoutTransition { .. })
        ));
    }

    #[test]
    fn test_confirmed_is_terminal() {
        let mut flow = CheckoutFlow::enter(Some(handoff()), fee());
        flow.set_shipping(shipping()).unwrap();
        flow.advance().unwrap();
        flow.advance().unwrap();
        flow.submit(Utc::now()).unwrap();

        assert!(flow.advance().is_err());
        assert!(flow.go_back().is_err());
        assert!(flow.submit(Utc::now()).is_err());
        assert_eq!(flow.step, CheckoutStep::Confirmed);
    }

    #[test]
    fn test_step_setters_check_step() {
        let mut flow = CheckoutFlow::enter(Some(handoff()), fee());
        assert!(flow.set_payment_method(PaymentMethod::Phone).is_err());
        flow.set_shipping(shipping()).unwrap();
        flow.advance().unwrap();
        assert!(flow.set_shipping(ShippingInfo::default()).is_err());
    }
}
