use std::sync::Arc;

use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;

use crate::domain::{Invoice, TenantId};
use crate::error::{Error, Result};
use crate::repository::{ClientRepository, InvoiceRepository, ProductRepository};

#[derive(Debug, Deserialize)]
pub struct CreateInvoice {
    pub invoice_code: String,
    pub invoice_date: NaiveDate,
    /// Defaults to `invoice_date` plus standard payment terms when omitted.
    pub due_date: Option<NaiveDate>,
    pub client_id: Uuid,
    pub items: Vec<InvoiceItemRequest>,
}

#[derive(Debug, Deserialize)]
pub struct InvoiceItemRequest {
    pub product_id: Uuid,
    pub quantity: i32,
}

#[derive(Clone)]
pub struct InvoiceService {
    invoices: Arc<dyn InvoiceRepository>,
    clients: Arc<dyn ClientRepository>,
    products: Arc<dyn ProductRepository>,
}

impl InvoiceService {
    pub fn new(
        invoices: Arc<dyn InvoiceRepository>,
        clients: Arc<dyn ClientRepository>,
        products: Arc<dyn ProductRepository>,
    ) -> Self {
        Self {
            invoices,
            clients,
            products,
        }
    }

    /// Builds the aggregate in memory, item by item in input order, and
    /// persists it as one unit only once every item has resolved. A failure
    /// partway abandons the unpersisted aggregate, so nothing is half-written.
    pub async fn create(&self, tenant: &TenantId, input: CreateInvoice) -> Result<Invoice> {
        let client = self
            .clients
            .get_by_id(tenant, input.client_id)
            .await?
            .ok_or_else(|| Error::NotFound("Client not found".to_string()))?;

        let mut invoice = Invoice::create(
            tenant.clone(),
            input.invoice_code,
            input.invoice_date,
            &client,
            input.due_date,
        )?;

        if input.items.is_empty() {
            return Err(Error::Validation(
                "Invoice must contain at least one item".to_string(),
            ));
        }

        for item in &input.items {
            if item.quantity <= 0 {
                return Err(Error::Validation(format!(
                    "Quantity for product {} must be greater than zero",
                    item.product_id
                )));
            }
            let product = self
                .products
                .get_by_id(tenant, item.product_id)
                .await?
                .ok_or_else(|| {
                    Error::NotFound(format!("Product with ID {} not found", item.product_id))
                })?;
            invoice.add_item(&product, item.quantity)?;
        }

        self.invoices.add(&invoice).await?;
        tracing::info!(
            invoice_id = %invoice.id(),
            tenant = %tenant,
            total = %invoice.total_amount(),
            "invoice created"
        );
        Ok(invoice)
    }

    pub async fn get(&self, tenant: &TenantId, id: Uuid) -> Result<Option<Invoice>> {
        self.invoices.get_by_id(tenant, id).await
    }

    pub async fn list(&self, tenant: &TenantId) -> Result<Vec<Invoice>> {
        self.invoices.list(tenant).await
    }
}
