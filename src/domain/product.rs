//! Sellable item owned by a tenant.

use rust_decimal::Decimal;
use uuid::Uuid;

use super::{require_non_empty, TenantId};
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct Product {
    id: Uuid,
    tenant_id: TenantId,
    name: String,
    sku: String,
    price: Decimal,
}

impl Product {
    /// Price must be strictly positive at creation; zero is only reachable
    /// later through `update_price`.
    pub fn create(
        tenant_id: TenantId,
        name: impl Into<String>,
        sku: impl Into<String>,
        price: Decimal,
    ) -> Result<Self> {
        let name = name.into();
        let sku = sku.into();
        require_non_empty(&name, "Name cannot be empty")?;
        require_non_empty(&sku, "SKU cannot be empty")?;
        if price <= Decimal::ZERO {
            return Err(crate::error::Error::Validation(
                "Price must be greater than zero".to_string(),
            ));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            tenant_id,
            name,
            sku,
            price,
        })
    }

    pub(crate) fn hydrate(
        id: Uuid,
        tenant_id: TenantId,
        name: String,
        sku: String,
        price: Decimal,
    ) -> Self {
        Self {
            id,
            tenant_id,
            name,
            sku,
            price,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn tenant_id(&self) -> &TenantId {
        &self.tenant_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sku(&self) -> &str {
        &self.sku
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn update_details(&mut self, name: impl Into<String>, sku: impl Into<String>) -> Result<()> {
        let name = name.into();
        let sku = sku.into();
        require_non_empty(&name, "Name cannot be empty")?;
        require_non_empty(&sku, "SKU cannot be empty")?;
        self.name = name;
        self.sku = sku;
        Ok(())
    }

    /// Zero is allowed on update, unlike creation.
    pub fn update_price(&mut self, price: Decimal) -> Result<()> {
        if price < Decimal::ZERO {
            return Err(crate::error::Error::Validation(
                "Price cannot be negative".to_string(),
            ));
        }
        self.price = price;
        Ok(())
    }
}
