//! Orchestration services: validate input, scope to the tenant, call the
//! repositories. All state mutation goes through the domain entities.

pub mod business_profile;
pub mod client;
pub mod invoice;
pub mod product;

pub use business_profile::{BusinessProfileService, UpsertProfile};
pub use client::{ClientService, NewClient, UpdateClient};
pub use invoice::{CreateInvoice, InvoiceItemRequest, InvoiceService};
pub use product::{NewProduct, ProductService, UpdateProduct};

use crate::error::Error;

/// Collapses validator's field errors into the crate's validation error.
pub(crate) fn check(input: &impl validator::Validate) -> Result<(), Error> {
    input
        .validate()
        .map_err(|e| Error::Validation(e.to_string()))
}
