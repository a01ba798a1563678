//! In-memory repository implementations.
//!
//! Back the services in tests (and local experiments) without a database.
//! Tenant filtering mirrors the Postgres implementations: a row owned by
//! another tenant is indistinguishable from a missing row.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use super::{BusinessProfileRepository, ClientRepository, InvoiceRepository, ProductRepository};
use crate::domain::{BusinessProfile, Client, Invoice, Product, TenantId};
use crate::error::Result;

#[derive(Default)]
pub struct InMemoryClientRepository {
    rows: Mutex<HashMap<Uuid, Client>>,
}

#[async_trait]
impl ClientRepository for InMemoryClientRepository {
    async fn add(&self, client: &Client) -> Result<()> {
        self.rows.lock().unwrap().insert(client.id(), client.clone());
        Ok(())
    }

    async fn get_by_id(&self, tenant: &TenantId, id: Uuid) -> Result<Option<Client>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .get(&id)
            .filter(|c| c.tenant_id() == tenant)
            .cloned())
    }

    async fn list(&self, tenant: &TenantId) -> Result<Vec<Client>> {
        let mut clients: Vec<Client> = self
            .rows
            .lock()
            .unwrap()
            .values()
            .filter(|c| c.tenant_id() == tenant)
            .cloned()
            .collect();
        clients.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(clients)
    }

    async fn update(&self, client: &Client) -> Result<()> {
        self.rows.lock().unwrap().insert(client.id(), client.clone());
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryProductRepository {
    rows: Mutex<HashMap<Uuid, Product>>,
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn add(&self, product: &Product) -> Result<()> {
        self.rows.lock().unwrap().insert(product.id(), product.clone());
        Ok(())
    }

    async fn get_by_id(&self, tenant: &TenantId, id: Uuid) -> Result<Option<Product>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .get(&id)
            .filter(|p| p.tenant_id() == tenant)
            .cloned())
    }

    async fn list(&self, tenant: &TenantId) -> Result<Vec<Product>> {
        let mut products: Vec<Product> = self
            .rows
            .lock()
            .unwrap()
            .values()
            .filter(|p| p.tenant_id() == tenant)
            .cloned()
            .collect();
        products.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(products)
    }

    async fn update(&self, product: &Product) -> Result<()> {
        self.rows.lock().unwrap().insert(product.id(), product.clone());
        Ok(())
    }

    async fn delete(&self, tenant: &TenantId, id: Uuid) -> Result<()> {
        let mut rows = self.rows.lock().unwrap();
        if rows.get(&id).is_some_and(|p| p.tenant_id() == tenant) {
            rows.remove(&id);
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryInvoiceRepository {
    rows: Mutex<HashMap<Uuid, Invoice>>,
}

#[async_trait]
impl InvoiceRepository for InMemoryInvoiceRepository {
    async fn add(&self, invoice: &Invoice) -> Result<()> {
        self.rows.lock().unwrap().insert(invoice.id(), invoice.clone());
        Ok(())
    }

    async fn get_by_id(&self, tenant: &TenantId, id: Uuid) -> Result<Option<Invoice>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .get(&id)
            .filter(|i| i.tenant_id() == tenant)
            .cloned())
    }

    async fn list(&self, tenant: &TenantId) -> Result<Vec<Invoice>> {
        let mut invoices: Vec<Invoice> = self
            .rows
            .lock()
            .unwrap()
            .values()
            .filter(|i| i.tenant_id() == tenant)
            .cloned()
            .collect();
        invoices.sort_by(|a, b| {
            b.invoice_date()
                .cmp(&a.invoice_date())
                .then_with(|| a.invoice_code().cmp(b.invoice_code()))
        });
        Ok(invoices)
    }
}

#[derive(Default)]
pub struct InMemoryBusinessProfileRepository {
    rows: Mutex<HashMap<String, BusinessProfile>>,
}

#[async_trait]
impl BusinessProfileRepository for InMemoryBusinessProfileRepository {
    async fn get_by_tenant(&self, tenant: &TenantId) -> Result<Option<BusinessProfile>> {
        Ok(self.rows.lock().unwrap().get(tenant.as_str()).cloned())
    }

    async fn add(&self, profile: &BusinessProfile) -> Result<()> {
        self.rows
            .lock()
            .unwrap()
            .insert(profile.tenant_id().as_str().to_string(), profile.clone());
        Ok(())
    }

    async fn update(&self, profile: &BusinessProfile) -> Result<()> {
        self.rows
            .lock()
            .unwrap()
            .insert(profile.tenant_id().as_str().to_string(), profile.clone());
        Ok(())
    }
}
