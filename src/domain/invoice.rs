//! The invoice aggregate: an invoice and the line items it exclusively owns.
//!
//! Client and product details are copied onto the invoice at the moment of
//! association, so editing a client or product later never rewrites history.
//! The total is never stored; it is recomputed from the current items on
//! every read.

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use uuid::Uuid;

use super::{require_non_empty, Client, Product, TenantId};
use crate::error::{Error, Result};

/// Applied when the caller supplies no due date.
pub const DEFAULT_PAYMENT_TERMS_DAYS: i64 = 30;

#[derive(Debug, Clone)]
pub struct InvoiceItem {
    id: Uuid,
    invoice_id: Uuid,
    product_id: Uuid,
    product_name: String,
    sku: String,
    price: Decimal,
    quantity: i32,
    total: Decimal,
}

impl InvoiceItem {
    /// Snapshots the product's name, SKU and price and fixes
    /// `total = price x quantity` once; it is never recalculated.
    fn new(invoice_id: Uuid, product: &Product, quantity: i32) -> Result<Self> {
        if quantity <= 0 {
            return Err(Error::Validation(
                "Quantity must be greater than zero".to_string(),
            ));
        }
        let price = product.price();
        Ok(Self {
            id: Uuid::new_v4(),
            invoice_id,
            product_id: product.id(),
            product_name: product.name().to_string(),
            sku: product.sku().to_string(),
            price,
            quantity,
            total: price * Decimal::from(quantity),
        })
    }

    #[allow(clippy::too_many_arguments)]
    pub(crate) fn hydrate(
        id: Uuid,
        invoice_id: Uuid,
        product_id: Uuid,
        product_name: String,
        sku: String,
        price: Decimal,
        quantity: i32,
        total: Decimal,
    ) -> Self {
        Self {
            id,
            invoice_id,
            product_id,
            product_name,
            sku,
            price,
            quantity,
            total,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn invoice_id(&self) -> Uuid {
        self.invoice_id
    }

    pub fn product_id(&self) -> Uuid {
        self.product_id
    }

    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    pub fn sku(&self) -> &str {
        &self.sku
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn quantity(&self) -> i32 {
        self.quantity
    }

    pub fn total(&self) -> Decimal {
        self.total
    }
}

#[derive(Debug, Clone)]
pub struct Invoice {
    id: Uuid,
    tenant_id: TenantId,
    invoice_code: String,
    invoice_date: NaiveDate,
    due_date: NaiveDate,
    client_id: Uuid,
    client_abn_snapshot: String,
    client_name_snapshot: String,
    client_phone_snapshot: String,
    items: Vec<InvoiceItem>,
}

impl Invoice {
    /// Captures the client's ABN, name and phone at this instant; later
    /// client edits do not propagate. The due date defaults to the invoice
    /// date plus standard payment terms and may never precede it.
    pub fn create(
        tenant_id: TenantId,
        invoice_code: impl Into<String>,
        invoice_date: NaiveDate,
        client: &Client,
        due_date: Option<NaiveDate>,
    ) -> Result<Self> {
        let invoice_code = invoice_code.into();
        require_non_empty(&invoice_code, "Invoice Code cannot be empty")?;
        let due_date =
            due_date.unwrap_or(invoice_date + Duration::days(DEFAULT_PAYMENT_TERMS_DAYS));
        if due_date < invoice_date {
            return Err(Error::Validation(
                "Due date cannot be before the invoice date".to_string(),
            ));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            tenant_id,
            invoice_code,
            invoice_date,
            due_date,
            client_id: client.id(),
            client_abn_snapshot: client.abn().to_string(),
            client_name_snapshot: client.name().to_string(),
            client_phone_snapshot: client.phone().to_string(),
            items: Vec::new(),
        })
    }

    #[allow(clippy::too_many_arguments)]
    pub(crate) fn hydrate(
        id: Uuid,
        tenant_id: TenantId,
        invoice_code: String,
        invoice_date: NaiveDate,
        due_date: NaiveDate,
        client_id: Uuid,
        client_abn_snapshot: String,
        client_name_snapshot: String,
        client_phone_snapshot: String,
        items: Vec<InvoiceItem>,
    ) -> Self {
        Self {
            id,
            tenant_id,
            invoice_code,
            invoice_date,
            due_date,
            client_id,
            client_abn_snapshot,
            client_name_snapshot,
            client_phone_snapshot,
            items,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn tenant_id(&self) -> &TenantId {
        &self.tenant_id
    }

    pub fn invoice_code(&self) -> &str {
        &self.invoice_code
    }

    pub fn invoice_date(&self) -> NaiveDate {
        self.invoice_date
    }

    pub fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    pub fn client_id(&self) -> Uuid {
        self.client_id
    }

    pub fn client_abn_snapshot(&self) -> &str {
        &self.client_abn_snapshot
    }

    pub fn client_name_snapshot(&self) -> &str {
        &self.client_name_snapshot
    }

    pub fn client_phone_snapshot(&self) -> &str {
        &self.client_phone_snapshot
    }

    pub fn items(&self) -> &[InvoiceItem] {
        &self.items
    }

    /// Always appends a new line, even when the same product is already on
    /// the invoice; quantities are never merged.
    pub fn add_item(&mut self, product: &Product, quantity: i32) -> Result<()> {
        let item = InvoiceItem::new(self.id, product, quantity)?;
        self.items.push(item);
        Ok(())
    }

    /// Removes the first line matching the product id, if any. With duplicate
    /// lines only one occurrence goes; a miss is a silent no-op.
    pub fn remove_item(&mut self, product_id: Uuid) {
        if let Some(pos) = self.items.iter().position(|i| i.product_id == product_id) {
            self.items.remove(pos);
        }
    }

    /// Live sum of line totals, recomputed on every read.
    pub fn total_amount(&self) -> Decimal {
        self.items.iter().map(InvoiceItem::total).sum()
    }
}
