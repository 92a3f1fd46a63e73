//! Account profile and the "my page" summary.
//!
//! Name and phone can be edited; the email address identifies the account
//! and stays fixed.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::session::SessionStore;
use crate::CommerceError;

/// Membership tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum MembershipLevel {
    #[default]
    Bronze,
    Silver,
    Gold,
    #[serde(rename = "VIP")]
    Vip,
}

impl MembershipLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            MembershipLevel::Bronze => "BRONZE",
            MembershipLevel::Silver => "SILVER",
            MembershipLevel::Gold => "GOLD",
            MembershipLevel::Vip => "VIP",
        }
    }
}

impl fmt::Display for MembershipLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The signed-in customer's profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub level: MembershipLevel,
    /// Reward points balance.
    pub points: u64,
}

impl AccountProfile {
    /// The demo customer shown on the account page.
    pub fn demo() -> Self {
        Self {
            name: "Gildong Hong".to_string(),
            email: "user@example.com".to_string(),
            phone: "010-1234-5678".to_string(),
            level: MembershipLevel::Gold,
            points: 3000,
        }
    }

    /// Apply an edit from the profile form.
    ///
    /// Provided values are trimmed and must not be blank. Nothing changes
    /// unless every provided value is valid.
    pub fn update(&mut self, update: ProfileUpdate) -> Result<(), CommerceError> {
        let name = update.name.map(|v| v.trim().to_string());
        let phone = update.phone.map(|v| v.trim().to_string());

        let blank: Vec<&str> = [("name", &name), ("phone", &phone)]
            .into_iter()
            .filter(|(_, value)| value.as_deref().is_some_and(str::is_empty))
            .map(|(field, _)| field)
            .collect();
        if !blank.is_empty() {
            return Err(CommerceError::MissingFields(blank.join(", ")));
        }

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(phone) = phone {
            self.phone = phone;
        }
        tracing::debug!(name = %self.name, "Profile updated");
        Ok(())
    }

    /// Combine the profile with the session's activity.
    pub fn summary(&self, session: &SessionStore) -> Result<AccountSummary, CommerceError> {
        Ok(AccountSummary {
            profile: self.clone(),
            order_count: session.orders().len(),
            wishlist_count: session.wishlist().len(),
            cart_items: session.cart().unique_item_count(),
            total_spent: session.total_spent()?,
        })
    }
}

/// Editable profile fields. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub phone: Option<String>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.phone.is_none()
    }
}

/// What the account page shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountSummary {
    pub profile: AccountProfile,
    pub order_count: usize,
    pub wishlist_count: usize,
    pub cart_items: usize,
    pub total_spent: Money,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ProductId;

    #[test]
    fn test_demo_profile() {
        let profile = AccountProfile::demo();
        assert_eq!(profile.level, MembershipLevel::Gold);
        assert_eq!(profile.points, 3000);
        assert_eq!(profile.level.to_string(), "GOLD");
    }

    #[test]
    fn test_summary_reflects_session() {
        let mut session = SessionStore::default();
        session.add_to_wishlist(ProductId::new(1));
        session.add_to_wishlist(ProductId::new(2));

        let summary = AccountProfile::demo().summary(&session).unwrap();
        assert_eq!(summary.order_count, 0);
        assert_eq!(summary.wishlist_count, 2);
        assert!(summary.total_spent.is_zero());
    }

    #[test]
    fn test_update_changes_name_and_phone() {
        let mut profile = AccountProfile::demo();
        profile
            .update(ProfileUpdate {
                name: Some("  Chulsoo Kim ".to_string()),
                phone: Some("010-9876-5432".to_string()),
            })
            .unwrap();

        assert_eq!(profile.name, "Chulsoo Kim");
        assert_eq!(profile.phone, "010-9876-5432");
        assert_eq!(profile.email, "user@example.com");
    }

    #[test]
    fn test_update_leaves_unset_fields() {
        let mut profile = AccountProfile::demo();
        profile
            .update(ProfileUpdate {
                phone: Some("010-0000-0000".to_string()),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(profile.name, "Gildong Hong");
        assert_eq!(profile.phone, "010-0000-0000");
        assert!(ProfileUpdate::default().is_empty());
    }

    #[test]
    fn test_update_rejects_blank_values() {
        let mut profile = AccountProfile::demo();
        let err = profile
            .update(ProfileUpdate {
                name: Some("New Name".to_string()),
                phone: Some("   ".to_string()),
            })
            .unwrap_err();

        assert!(matches!(err, CommerceError::MissingFields(ref f) if f == "phone"));
        // Rejected edits are not partially applied
        assert_eq!(profile, AccountProfile::demo());
    }

    #[test]
    fn test_levels_are_ordered() {
        assert!(MembershipLevel::Vip > MembershipLevel::Gold);
        assert_eq!(
            serde_json::to_string(&MembershipLevel::Vip).unwrap(),
            "\"VIP\""
        );
    }
}
