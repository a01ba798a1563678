use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use crate::domain::{Product, TenantId};
use crate::error::{Error, Result};
use crate::repository::ProductRepository;

#[derive(Debug, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub sku: String,
    pub price: Decimal,
}

#[derive(Debug, Deserialize)]
pub struct UpdateProduct {
    pub name: String,
    pub sku: String,
    pub price: Decimal,
}

#[derive(Clone)]
pub struct ProductService {
    repository: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    pub async fn add(&self, tenant: &TenantId, input: NewProduct) -> Result<Product> {
        if input.price <= Decimal::ZERO {
            return Err(Error::Validation(
                "Price must be greater than zero".to_string(),
            ));
        }
        let product = Product::create(tenant.clone(), input.name, input.sku, input.price)?;
        self.repository.add(&product).await?;
        tracing::info!(product_id = %product.id(), tenant = %tenant, "product added");
        Ok(product)
    }

    pub async fn get(&self, tenant: &TenantId, id: Uuid) -> Result<Option<Product>> {
        self.repository.get_by_id(tenant, id).await
    }

    pub async fn list(&self, tenant: &TenantId) -> Result<Vec<Product>> {
        self.repository.list(tenant).await
    }

    /// Replaces details and price together. An unknown id is a silent no-op.
    pub async fn update(&self, tenant: &TenantId, id: Uuid, input: UpdateProduct) -> Result<()> {
        if let Some(mut product) = self.repository.get_by_id(tenant, id).await? {
            product.update_details(input.name, input.sku)?;
            product.update_price(input.price)?;
            self.repository.update(&product).await?;
        }
        Ok(())
    }

    pub async fn delete(&self, tenant: &TenantId, id: Uuid) -> Result<()> {
        self.repository.delete(tenant, id).await
    }
}
