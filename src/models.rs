//! Data models for paydirekt API resources.
//!
//! This module contains strongly-typed representations of paydirekt HAL
//! resources, newtype ID wrappers, and enumeration types for constrained
//! values.

mod enums;
mod hal;
mod ids;
mod refund;

pub use enums::RefundStatus;
pub use hal::{HalEnvelope, Link};
pub use ids::{PaymentInformationId, TransactionId};
pub use refund::Refund;
pub use rust_decimal::Decimal;
