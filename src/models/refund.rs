//! Refund model.

use core::hash::{Hash, Hasher};
use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{HalEnvelope, Link, PaymentInformationId, RefundStatus, TransactionId};
use crate::error::{PaydirektError, Result};

/// A refund transaction: the merchant returns money to the buyer.
///
/// Decoded once from an API response and never mutated. Identity covers the
/// business fields only; two refunds that differ only in `_embedded` or
/// `_links` compare equal and hash alike.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Refund {
    /// Transaction kind, always [`Refund::TYPE`].
    #[serde(rename = "type")]
    kind: String,
    /// Identifier generated by paydirekt.
    transaction_id: TransactionId,
    /// Refunded value. JSON numbers are read from their literal text.
    amount: Decimal,
    /// Comment for the buyer.
    note: Option<String>,
    /// Reference number supplied by the merchant.
    merchant_refund_reference_number: Option<String>,
    /// Groups this refund with the other transactions of its payment.
    payment_information_id: PaymentInformationId,
    /// Lifecycle state.
    status: RefundStatus,
    /// Reconciliation number supplied by the merchant.
    merchant_reconciliation_reference_number: Option<String>,
    /// Embedded resources and links.
    #[serde(flatten)]
    hal: HalEnvelope,
}

impl Refund {
    /// Value of the `type` field for refunds.
    pub const TYPE: &'static str = "REFUND";

    /// Creates a refund from its fields. No validation is performed.
    #[inline]
    #[must_use]
    #[allow(
        clippy::too_many_arguments,
        reason = "mirrors the refund resource schema field by field"
    )]
    pub const fn new(
        kind: String,
        transaction_id: TransactionId,
        amount: Decimal,
        note: Option<String>,
        merchant_refund_reference_number: Option<String>,
        payment_information_id: PaymentInformationId,
        status: RefundStatus,
        merchant_reconciliation_reference_number: Option<String>,
        hal: HalEnvelope,
    ) -> Self {
        Self {
            kind,
            transaction_id,
            amount,
            note,
            merchant_refund_reference_number,
            payment_information_id,
            status,
            merchant_reconciliation_reference_number,
            hal,
        }
    }

    /// Decodes a refund from a JSON response body.
    ///
    /// # Errors
    ///
    /// Returns [`PaydirektError::MalformedResponse`] if the body is not valid
    /// JSON or does not match the refund schema.
    #[inline]
    #[tracing::instrument(level = "trace", skip_all, fields(body_len = body.len()))]
    pub fn from_json(body: &str) -> Result<Self> {
        let refund: Self = serde_json::from_str(body).map_err(|err| {
            tracing::trace!(error = %err, "failed to decode refund");
            PaydirektError::MalformedResponse(err)
        })?;
        tracing::trace!(
            transaction_id = %refund.transaction_id,
            status = %refund.status,
            "decoded refund"
        );
        Ok(refund)
    }

    /// Encodes the refund, including `_embedded` and `_links`, as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`PaydirektError::Serialization`] if encoding fails.
    #[inline]
    #[tracing::instrument(
        level = "trace",
        skip_all,
        fields(transaction_id = %self.transaction_id)
    )]
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(PaydirektError::Serialization)
    }

    /// Returns the transaction kind (the `type` field).
    #[inline]
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Returns the transaction identifier.
    #[inline]
    #[must_use]
    pub const fn transaction_id(&self) -> &TransactionId {
        &self.transaction_id
    }

    /// Returns the refunded amount.
    #[inline]
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the buyer-facing note.
    #[inline]
    #[must_use]
    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    /// Returns the merchant's refund reference number.
    #[inline]
    #[must_use]
    pub fn merchant_refund_reference_number(&self) -> Option<&str> {
        self.merchant_refund_reference_number.as_deref()
    }

    /// Returns the payment information identifier.
    #[inline]
    #[must_use]
    pub const fn payment_information_id(&self) -> &PaymentInformationId {
        &self.payment_information_id
    }

    /// Returns the refund status.
    #[inline]
    #[must_use]
    pub const fn status(&self) -> RefundStatus {
        self.status
    }

    /// Returns the merchant's reconciliation reference number.
    #[inline]
    #[must_use]
    pub fn merchant_reconciliation_reference_number(&self) -> Option<&str> {
        self.merchant_reconciliation_reference_number.as_deref()
    }

    /// Returns the embedded resources.
    #[inline]
    #[must_use]
    pub const fn embedded(&self) -> &HashMap<String, Value> {
        self.hal.embedded()
    }

    /// Returns the links.
    #[inline]
    #[must_use]
    pub const fn links(&self) -> &HashMap<String, Link> {
        self.hal.links()
    }

    /// Returns the HAL envelope for link and embedded-resource lookups.
    #[inline]
    #[must_use]
    pub const fn hal(&self) -> &HalEnvelope {
        &self.hal
    }
}

impl PartialEq for Refund {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.transaction_id == other.transaction_id
            && self.amount == other.amount
            && self.note == other.note
            && self.merchant_refund_reference_number == other.merchant_refund_reference_number
            && self.payment_information_id == other.payment_information_id
            && self.status == other.status
            && self.merchant_reconciliation_reference_number
                == other.merchant_reconciliation_reference_number
    }
}

impl Eq for Refund {}

impl Hash for Refund {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        self.transaction_id.hash(state);
        self.amount.hash(state);
        self.note.hash(state);
        self.merchant_refund_reference_number.hash(state);
        self.payment_information_id.hash(state);
        self.status.hash(state);
        self.merchant_reconciliation_reference_number.hash(state);
    }
}
