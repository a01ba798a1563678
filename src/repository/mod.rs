//! Persistence gateways, one per entity.
//!
//! Every read and write takes the tenant explicitly; implementations must
//! filter by it so rows are invisible to, and unmodifiable by, other tenants.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{BusinessProfile, Client, Invoice, Product, TenantId};
use crate::error::Result;

#[async_trait]
pub trait ClientRepository: Send + Sync {
    async fn add(&self, client: &Client) -> Result<()>;
    async fn get_by_id(&self, tenant: &TenantId, id: Uuid) -> Result<Option<Client>>;
    async fn list(&self, tenant: &TenantId) -> Result<Vec<Client>>;
    async fn update(&self, client: &Client) -> Result<()>;
}

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn add(&self, product: &Product) -> Result<()>;
    async fn get_by_id(&self, tenant: &TenantId, id: Uuid) -> Result<Option<Product>>;
    async fn list(&self, tenant: &TenantId) -> Result<Vec<Product>>;
    async fn update(&self, product: &Product) -> Result<()>;
    async fn delete(&self, tenant: &TenantId, id: Uuid) -> Result<()>;
}

/// The invoice and its items are one consistency unit: `add` persists them
/// atomically and reads always come back with items loaded.
#[async_trait]
pub trait InvoiceRepository: Send + Sync {
    async fn add(&self, invoice: &Invoice) -> Result<()>;
    async fn get_by_id(&self, tenant: &TenantId, id: Uuid) -> Result<Option<Invoice>>;
    async fn list(&self, tenant: &TenantId) -> Result<Vec<Invoice>>;
}

#[async_trait]
pub trait BusinessProfileRepository: Send + Sync {
    async fn get_by_tenant(&self, tenant: &TenantId) -> Result<Option<BusinessProfile>>;
    async fn add(&self, profile: &BusinessProfile) -> Result<()>;
    async fn update(&self, profile: &BusinessProfile) -> Result<()>;
}
