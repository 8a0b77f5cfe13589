//! Newtype wrappers for resource identifiers.
//!
//! A refund carries two server-generated identifiers that are both plain
//! strings on the wire; wrapping them keeps a transaction id from being
//! passed where a payment information id is expected.

use serde::{Deserialize, Serialize};

/// Macro to define a newtype ID wrapping a `String` inner type.
macro_rules! define_string_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates a new identifier from the given string.
            #[inline]
            #[must_use]
            pub const fn new(value: String) -> Self {
                Self(value)
            }

            /// Returns a reference to the inner string.
            #[inline]
            #[must_use]
            pub fn as_inner(&self) -> &str {
                &self.0
            }

            /// Consumes the wrapper and returns the inner string.
            #[inline]
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl core::fmt::Display for $name {
            #[inline]
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<String> for $name {
            #[inline]
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            #[inline]
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }
    };
}

define_string_id! {
    /// Identifier of a single transaction, generated by the paydirekt system.
    TransactionId
}

define_string_id! {
    /// Payment information identifier grouping the transactions of one
    /// payment (the original checkout, its captures and refunds).
    PaymentInformationId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transaction_id_is_transparent_string() {
        let id = TransactionId::new("TXN-1".to_owned());
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, r#""TXN-1""#);
        let deserialized: TransactionId = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, id);
    }

    #[test]
    fn payment_information_id_from_str() {
        let id = PaymentInformationId::from("PAY-1");
        assert_eq!(id.as_inner(), "PAY-1");
        assert_eq!(id.to_string(), "PAY-1");
    }

    #[test]
    fn id_into_inner() {
        let id: TransactionId = "t-9".to_owned().into();
        assert_eq!(id.into_inner(), "t-9");
    }

    #[test]
    fn non_string_id_is_rejected() {
        let result = serde_json::from_str::<TransactionId>("42");
        assert!(result.is_err());
    }
}
