//! Saved delivery addresses.
//!
//! A non-empty book always has exactly one default entry, which checkout
//! uses to prefill the shipping form.

use serde::{Deserialize, Serialize};

use crate::checkout::ShippingInfo;
use crate::ids::AddressId;
use crate::CommerceError;

/// Address form input, before it is stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressEntry {
    /// Short name shown in the list, such as "Home".
    pub label: String,
    pub recipient: String,
    pub phone: String,
    pub address: String,
}

impl AddressEntry {
    pub fn new(
        label: impl Into<String>,
        recipient: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            recipient: recipient.into(),
            phone: phone.into(),
            address: address.into(),
        }
    }

    /// Required fields that are blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("label", &self.label),
            ("recipient", &self.recipient),
            ("phone", &self.phone),
            ("address", &self.address),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }

    fn validate(&self) -> Result<(), CommerceError> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(CommerceError::MissingFields(missing.join(", ")))
        }
    }
}

/// A stored address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SavedAddress {
    pub id: AddressId,
    pub label: String,
    pub recipient: String,
    pub phone: String,
    pub address: String,
    pub is_default: bool,
}

impl SavedAddress {
    /// Shipping details for this address, without a courier message.
    pub fn to_shipping(&self) -> ShippingInfo {
        ShippingInfo::new(&self.recipient, &self.phone, &self.address)
    }

    fn apply(&mut self, entry: AddressEntry) {
        self.label = entry.label;
        self.recipient = entry.recipient;
        self.phone = entry.phone;
        self.address = entry.address;
    }
}

/// The customer's saved addresses, in insertion order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AddressBook {
    entries: Vec<SavedAddress>,
    #[serde(skip)]
    next_id: u64,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// The demo customer's home (default) and work addresses.
    pub fn demo() -> Self {
        let mut book = Self::new();
        for label in ["Home", "Work"] {
            let entry = AddressEntry::new(
                label,
                "Gildong Hong",
                "010-1234-5678",
                "123 Teheran-ro, Gangnam-gu, Seoul",
            );
            // Demo entries are always complete
            if let Err(e) = book.add(entry) {
                tracing::warn!(error = %e, "Skipping demo address");
            }
        }
        book
    }

    pub fn entries(&self) -> &[SavedAddress] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: AddressId) -> Option<&SavedAddress> {
        self.entries.iter().find(|a| a.id == id)
    }

    pub fn default_address(&self) -> Option<&SavedAddress> {
        self.entries.iter().find(|a| a.is_default)
    }

    /// Shipping details from the default address, if any.
    pub fn default_shipping(&self) -> Option<ShippingInfo> {
        self.default_address().map(SavedAddress::to_shipping)
    }

    /// Store a new address. The first address becomes the default.
    pub fn add(&mut self, entry: AddressEntry) -> Result<AddressId, CommerceError> {
        entry.validate()?;

        self.next_id += 1;
        let id = AddressId::new(self.next_id);
        let is_default = self.entries.is_empty();
        self.entries.push(SavedAddress {
            id,
            label: entry.label,
            recipient: entry.recipient,
            phone: entry.phone,
            address: entry.address,
            is_default,
        });

        tracing::debug!(address_id = %id, "Address added");
        Ok(id)
    }

    /// Replace the fields of an existing address. The default flag is kept.
    pub fn update(&mut self, id: AddressId, entry: AddressEntry) -> Result<(), CommerceError> {
        entry.validate()?;
        let saved = self
            .entries
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(CommerceError::AddressNotFound(id))?;
        saved.apply(entry);
        Ok(())
    }

    /// Delete an address. Removing the default promotes the first remaining one.
    pub fn remove(&mut self, id: AddressId) -> Result<SavedAddress, CommerceError> {
        let index = self
            .entries
            .iter()
            .position(|a| a.id == id)
            .ok_or(CommerceError::AddressNotFound(id))?;
        let removed = self.entries.remove(index);

        if removed.is_default {
            if let Some(first) = self.entries.first_mut() {
                first.is_default = true;
            }
        }
        tracing::debug!(address_id = %id, "Address removed");
        Ok(removed)
    }

    /// Make `id` the only default address.
    pub fn set_default(&mut self, id: AddressId) -> Result<(), CommerceError> {
        if self.get(id).is_none() {
            return Err(CommerceError::AddressNotFound(id));
        }
        for saved in &mut self.entries {
            saved.is_default = saved.id == id;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_count(book: &AddressBook) -> usize {
        book.entries().iter().filter(|a| a.is_default).count()
    }

    #[test]
    fn test_demo_book() {
        let book = AddressBook::demo();
        assert_eq!(book.len(), 2);
        assert_eq!(default_count(&book), 1);
        assert_eq!(book.default_address().unwrap().label, "Home");
    }

    #[test]
    fn test_first_address_is_default() {
        let mut book = AddressBook::new();
        assert!(book.default_address().is_none());

        let home = book
            .add(AddressEntry::new("Home", "Kim", "010-1111-2222", "Busan"))
            .unwrap();
        let work = book
            .add(AddressEntry::new("Work", "Kim", "010-1111-2222", "Seoul"))
            .unwrap();

        assert_eq!(book.default_address().unwrap().id, home);
        assert!(!book.get(work).unwrap().is_default);
    }

    #[test]
    fn test_set_default_keeps_single_default() {
        let mut book = AddressBook::demo();
        let work = book.entries()[1].id;

        book.set_default(work).unwrap();
        assert_eq!(default_count(&book), 1);
        assert_eq!(book.default_address().unwrap().label, "Work");

        let missing = AddressId::new(99);
        assert!(matches!(
            book.set_default(missing),
            Err(CommerceError::AddressNotFound(id)) if id == missing
        ));
        assert_eq!(book.default_address().unwrap().label, "Work");
    }

    #[test]
    fn test_removing_default_promotes_next() {
        let mut book = AddressBook::demo();
        let home = book.default_address().unwrap().id;

        let removed = book.remove(home).unwrap();
        assert!(removed.is_default);
        assert_eq!(default_count(&book), 1);
        assert_eq!(book.default_address().unwrap().label, "Work");

        let work = book.entries()[0].id;
        book.remove(work).unwrap();
        assert!(book.is_empty());
        assert!(book.default_address().is_none());
    }

    #[test]
    fn test_update_keeps_default_flag() {
        let mut book = AddressBook::demo();
        let home = book.default_address().unwrap().id;

        book.update(
            home,
            AddressEntry::new("Home", "Gildong Hong", "010-1234-5678", "Jeju"),
        )
        .unwrap();
        let saved = book.get(home).unwrap();
        assert_eq!(saved.address, "Jeju");
        assert!(saved.is_default);
    }

    #[test]
    fn test_incomplete_entry_rejected() {
        let mut book = AddressBook::new();
        let err = book
            .add(AddressEntry::new("Home", " ", "010-1111-2222", ""))
            .unwrap_err();
        assert!(matches!(err, CommerceError::MissingFields(ref f) if f == "recipient, address"));
        assert!(book.is_empty());
    }

    #[test]
    fn test_default_prefills_shipping() {
        let book = AddressBook::demo();
        let shipping = book.default_shipping().unwrap();

        assert_eq!(shipping.name, "Gildong Hong");
        assert_eq!(shipping.address, "123 Teheran-ro, Gangnam-gu, Seoul");
        assert!(shipping.is_complete());
        assert!(shipping.message.is_none());
    }
}
