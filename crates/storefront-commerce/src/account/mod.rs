//! Account page: profile, membership and saved addresses.

mod address;
mod profile;

pub use address::{AddressBook, AddressEntry, SavedAddress};
pub use profile::{AccountProfile, AccountSummary, MembershipLevel, ProfileUpdate};
