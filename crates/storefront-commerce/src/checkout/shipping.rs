//! Shipping details collected at the first checkout step.

use serde::{Deserialize, Serialize};

/// Recipient and delivery details.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShippingInfo {
    /// Recipient name.
    pub name: String,
    /// Contact phone number.
    pub phone: String,
    /// Delivery address.
    pub address: String,
    /// Optional note for the courier.
    pub message: Option<String>,
}

impl ShippingInfo {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            address: address.into(),
            message: None,
        }
    }

    /// Attach a delivery message. Blank messages are dropped.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        let message = message.into();
        self.message = (!message.trim().is_empty()).then_some(message);
        self
    }

    /// Required fields that are blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("phone", &self.phone),
            ("address", &self.address),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }

    /// Check if every required field is filled in.
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_shipping_info() {
        let info = ShippingInfo::new("Gildong Hong", "010-1234-5678", "Seoul");
        assert!(info.is_complete());
        assert!(info.message.is_none());
    }

    #[test]
    fn test_missing_fields() {
        let info = ShippingInfo::new("  ", "010-1234-5678", "");
        assert_eq!(info.missing_fields(), vec!["name", "address"]);
        assert!(!ShippingInfo::default().is_complete());
    }

    #[test]
    fn test_blank_message_dropped() {
        let info = ShippingInfo::new("A", "B", "C").with_message("   ");
        assert!(info.message.is_none());
        let info = ShippingInfo::new("A", "B", "C").with_message("Leave at the door");
        assert_eq!(info.message.as_deref(), Some("Leave at the door"));
    }
}
