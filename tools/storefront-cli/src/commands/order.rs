//! Order command: cart, checkout and confirmation in one run.

use anyhow::{bail, Context as _, Result};
use chrono::Utc;
use dialoguer::{Confirm, Input};
use serde_json::json;
use storefront_commerce::account::{AccountProfile, AddressBook};
use storefront_commerce::cart::coerce_quantity;
use storefront_commerce::catalog::CatalogProvider;
use storefront_commerce::checkout::{CheckoutFlow, PaymentMethod, ShippingInfo};
use storefront_commerce::session::SessionStore;
use storefront_commerce::ProductId;

use super::OrderArgs;
use crate::context::Context;

const TOTAL_STEPS: usize = 4;

/// Run the order command.
pub fn run(args: OrderArgs, ctx: &Context) -> Result<()> {
    let items = args
        .items
        .iter()
        .map(|raw| parse_item(raw))
        .collect::<Result<Vec<_>>>()?;
    let payment: PaymentMethod = args.payment.parse()?;

    let catalog = ctx.catalog()?;
    let shipping_fee = ctx.shipping_fee()?;
    let mut session = SessionStore::new(ctx.currency()?);

    // Cart
    for (id, quantity) in &items {
        let product = catalog.find(*id)?;
        session.update_cart(|cart| cart.add_product(product, *quantity))?;
    }
    let pricing = session.cart().pricing(shipping_fee)?;
    ctx.output.step(1, TOTAL_STEPS, "Cart");
    for item in &session.cart().items {
        ctx.output.list_item(&format!(
            "{} x{} = {}",
            item.name,
            item.quantity,
            item.line_total()?.display()
        ));
    }
    ctx.output.kv("Subtotal", &pricing.selected_subtotal.display());

    let mut flow = CheckoutFlow::enter(Some(session.cart().checkout_handoff()?), shipping_fee);

    // Shipping
    ctx.output.step(2, TOTAL_STEPS, flow.step.display_name());
    let saved = if args.saved_address {
        AddressBook::demo().default_shipping().unwrap_or_default()
    } else {
        ShippingInfo::default()
    };
    let mut shipping = ShippingInfo::new(
        field(args.name.or(Some(saved.name)), "Recipient name", ctx)?,
        field(args.phone.or(Some(saved.phone)), "Phone", ctx)?,
        field(args.address.or(Some(saved.address)), "Address", ctx)?,
    );
    if let Some(message) = args.message {
        shipping = shipping.with_message(message);
    }
    flow.set_shipping(shipping)?;
    flow.advance()?;

    // Payment
    ctx.output.step(3, TOTAL_STEPS, flow.step.display_name());
    flow.set_payment_method(payment)?;
    ctx.output.kv("Method", payment.display_name());
    flow.advance()?;

    // Review
    ctx.output.step(4, TOTAL_STEPS, flow.step.display_name());
    let draft = flow.draft()?;
    ctx.output.kv("Items", &draft.item_count().to_string());
    ctx.output.kv("Subtotal", &draft.subtotal.display());
    ctx.output.kv("Shipping", &draft.shipping_fee.display());
    ctx.output.kv("Total", &draft.total.display());

    if !args.yes {
        if ctx.output.is_json() {
            bail!("Use --yes to place orders in JSON mode");
        }
        ctx.output.info("");
        let confirmed = Confirm::new()
            .with_prompt(format!("Place order for {}?", draft.total.display()))
            .default(true)
            .interact()?;

        if !confirmed {
            ctx.output.warn("Order cancelled");
            return Ok(());
        }
    }

    let order = flow.submit(Utc::now())?;
    session.record_order(order.clone());
    let summary = AccountProfile::demo().summary(&session)?;

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "order": order,
            "account": summary,
        }));
        return Ok(());
    }

    ctx.output.success(&format!("Order {} confirmed", order.order_number));
    ctx.output.kv("Confirmed at", &order.confirmed_at.format("%Y-%m-%d %H:%M").to_string());
    ctx.output.kv("Ship to", &order.draft.shipping.address);
    if let Some(message) = &order.draft.shipping.message {
        ctx.output.kv("Message", message);
    }
    ctx.output.kv("Charged", &order.total().display());
    ctx.output.kv(
        "Orders this session",
        &summary.order_count.to_string(),
    );

    Ok(())
}

/// Parse `<id>` or `<id>:<quantity>`. Quantities are coerced the way the
/// cart's quantity input is.
fn parse_item(raw: &str) -> Result<(ProductId, u32)> {
    let (id, quantity) = match raw.split_once(':') {
        Some((id, quantity)) => (id, coerce_quantity(quantity)),
        None => (raw, 1),
    };
    let id = id
        .parse::<ProductId>()
        .with_context(|| format!("Invalid product id in item: {}", raw))?;
    Ok((id, quantity))
}

/// Use the flag value, or prompt for it interactively.
fn field(value: Option<String>, prompt: &str, ctx: &Context) -> Result<String> {
    if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
        return Ok(value);
    }
    if ctx.output.is_json() {
        bail!("{} is required in JSON mode", prompt);
    }
    Ok(Input::<String>::new().with_prompt(prompt).interact_text()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_item() {
        assert_eq!(parse_item("61").unwrap(), (ProductId::new(61), 1));
        assert_eq!(parse_item("61:3").unwrap(), (ProductId::new(61), 3));
        assert_eq!(parse_item("61:0").unwrap(), (ProductId::new(61), 1));
        assert_eq!(parse_item("61:abc").unwrap(), (ProductId::new(61), 1));
        assert_eq!(parse_item("61:5000").unwrap(), (ProductId::new(61), 999));
        assert!(parse_item("x:2").is_err());
    }
}
