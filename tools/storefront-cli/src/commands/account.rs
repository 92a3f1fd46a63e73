//! Account page command.

use anyhow::Result;
use serde_json::json;
use storefront_commerce::account::{AccountProfile, AddressBook, ProfileUpdate};
use storefront_commerce::session::SessionStore;

use super::AccountArgs;
use crate::context::Context;

const ADDRESS_COLUMNS: [usize; 4] = [8, 14, 14, 40];

/// Run the account command.
pub fn run(args: AccountArgs, ctx: &Context) -> Result<()> {
    let mut profile = AccountProfile::demo();
    let update = ProfileUpdate {
        name: args.name,
        phone: args.phone,
    };
    let edited = !update.is_empty();
    if edited {
        profile.update(update)?;
    }

    let session = SessionStore::new(ctx.currency()?);
    let summary = profile.summary(&session)?;
    let addresses = AddressBook::demo();

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "account": summary,
            "addresses": addresses.entries(),
        }));
        return Ok(());
    }

    if edited {
        ctx.output.success("Profile updated");
    }
    ctx.output.header("My Page");
    ctx.output.kv("Name", &profile.name);
    ctx.output.kv("Email", &profile.email);
    ctx.output.kv("Phone", &profile.phone);
    ctx.output.kv("Membership", profile.level.as_str());
    ctx.output.kv("Points", &profile.points.to_string());
    ctx.output.kv("Orders", &summary.order_count.to_string());
    ctx.output.kv("Wishlist", &summary.wishlist_count.to_string());

    ctx.output.header("Saved addresses");
    ctx.output
        .table_row(&["LABEL", "RECIPIENT", "PHONE", "ADDRESS"], &ADDRESS_COLUMNS);
    for saved in addresses.entries() {
        let label = if saved.is_default {
            format!("{} *", saved.label)
        } else {
            saved.label.clone()
        };
        ctx.output.table_row(
            &[
                label.as_str(),
                saved.recipient.as_str(),
                saved.phone.as_str(),
                saved.address.as_str(),
            ],
            &ADDRESS_COLUMNS,
        );
    }
    ctx.output.debug("* default address, used by `order --saved-address`");

    Ok(())
}
