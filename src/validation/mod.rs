//! Request validation ahead of any store mutation.
//!
//! Payloads arrive with every field optional, mirroring arbitrary JSON
//! bodies. The validator either produces a normalized domain value or a
//! structured list of field-level violations; it never touches the store,
//! so a failed validation can never leave a partial mutation behind.

pub mod error;
pub mod requests;
pub mod rules;
pub mod service;

pub use error::ValidationError;
pub use requests::{ProjectPayload, ResourcePayload, SupplierPayload, TaskPayload};
pub use service::{RequestValidator, ValidationLimits};
