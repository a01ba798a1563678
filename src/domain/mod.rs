//! Domain model: tenant-owned entities and the invoice aggregate.
//!
//! Entities keep their fields private and are mutated only through methods
//! that validate first, so an instance can never hold invalid state.

pub mod business_profile;
pub mod client;
pub mod invoice;
pub mod product;
pub mod tenant;

pub use business_profile::{BusinessProfile, PaymentDetails, ProfileDetails};
pub use client::Client;
pub use invoice::{Invoice, InvoiceItem};
pub use product::Product;
pub use tenant::TenantId;

use crate::error::Error;

/// Rejects empty or whitespace-only required fields.
pub(crate) fn require_non_empty(value: &str, message: &str) -> Result<(), Error> {
    if value.trim().is_empty() {
        return Err(Error::Validation(message.to_string()));
    }
    Ok(())
}

/// Whitespace-only optional values collapse to absent; present values are trimmed.
pub(crate) fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
