//! Enumeration types for constrained API values.

use serde::{Deserialize, Serialize};

/// Lifecycle state of a refund.
///
/// A status change is never applied in place: the API returns a freshly
/// decoded [`Refund`](super::Refund) carrying the new state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RefundStatus {
    /// Accepted by paydirekt, payout to the buyer not yet confirmed.
    Pending,
    /// Money has been returned to the buyer.
    Successful,
    /// The refund was rejected or could not be executed.
    Failed,
}

impl RefundStatus {
    /// Returns the wire representation of the status.
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Successful => "SUCCESSFUL",
            Self::Failed => "FAILED",
        }
    }
}

impl core::fmt::Display for RefundStatus {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refund_status_serde_roundtrip() {
        let variants = [
            (RefundStatus::Pending, r#""PENDING""#),
            (RefundStatus::Successful, r#""SUCCESSFUL""#),
            (RefundStatus::Failed, r#""FAILED""#),
        ];
        for (variant, expected_json) in variants {
            let json = serde_json::to_string(&variant).unwrap();
            assert_eq!(json, expected_json);
            let deserialized: RefundStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(deserialized, variant);
        }
    }

    #[test]
    fn display_matches_wire_form() {
        assert_eq!(RefundStatus::Successful.to_string(), "SUCCESSFUL");
        assert_eq!(RefundStatus::Pending.as_str(), "PENDING");
    }

    #[test]
    fn lowercase_status_fails() {
        let result = serde_json::from_str::<RefundStatus>(r#""successful""#);
        assert!(result.is_err());
    }

    #[test]
    fn unknown_status_fails() {
        let result = serde_json::from_str::<RefundStatus>(r#""CANCELED""#);
        assert!(result.is_err());
    }
}
