//! Typed resource models for the paydirekt payment API.
//!
//! This crate provides the value objects an API client decodes paydirekt
//! responses into, starting with the [`Refund`](models::Refund) resource and
//! the HAL envelope every resource carries.

pub mod error;
pub mod models;
