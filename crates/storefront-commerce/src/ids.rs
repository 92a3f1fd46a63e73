//! Newtype IDs for type-safe identifiers.
//!
//! Product ids are the sequential integers assigned by the catalog generator;
//! session ids and order numbers are opaque strings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Macro to generate integer-backed ID structs.
macro_rules! define_numeric_id {
    ($name:ident) => {
        /// A positive integer identifier.
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Create a new ID from its integer value.
            pub const fn new(id: u64) -> Self {
                Self(id)
            }

            /// Get the integer value.
            pub const fn get(self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                Self(id)
            }
        }

        impl FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse::<u64>().map(Self)
            }
        }
    };
}

/// Macro to generate string-backed ID structs.
macro_rules! define_string_id {
    ($name:ident) => {
        /// An opaque string identifier.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_numeric_id!(ProductId);
define_numeric_id!(SubscriptionId);
define_numeric_id!(AddressId);

define_string_id!(SessionId);
define_string_id!(OrderNumber);

impl SessionId {
    /// Generate a new random session ID.
    pub fn generate() -> Self {
        use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
        use rand::Rng;

        let bytes: [u8; 18] = rand::thread_rng().gen();
        Self(format!("sess_{}", URL_SAFE_NO_PAD.encode(bytes)))
    }
}

impl OrderNumber {
    /// Generate an order number of the form `ORD-<yyyymmdd>-<6 hex digits>`.
    pub fn generate(at: chrono::DateTime<chrono::Utc>) -> Self {
        use rand::Rng;

        let suffix: u32 = rand::thread_rng().gen_range(0..0x100_0000);
        Self(format!("ORD-{}-{:06X}", at.format("%Y%m%d"), suffix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_product_id_parse() {
        let id: ProductId = " 42 ".parse().unwrap();
        assert_eq!(id, ProductId::new(42));
        assert!("abc".parse::<ProductId>().is_err());
    }

    #[test]
    fn test_product_id_display() {
        assert_eq!(ProductId::new(7).to_string(), "7");
    }

    #[test]
    fn test_session_id_generation() {
        let a = SessionId::generate();
        let b = SessionId::generate();
        assert!(a.as_str().starts_with("sess_"));
        assert_ne!(a, b);
    }

    #[test]
    fn test_order_number_format() {
        let at = chrono::Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap();
        let number = OrderNumber::generate(at);
        assert!(number.as_str().starts_with("ORD-20240115-"));
        assert_eq!(number.as_str().len(), "ORD-20240115-".len() + 6);
    }
}
