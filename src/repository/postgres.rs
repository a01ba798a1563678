//! Postgres implementations of the repository traits over sqlx.
//!
//! Row structs mirror the table layout; domain entities are rehydrated from
//! them so the encapsulated constructors stay the only write path for new
//! state. Every statement carries the tenant filter.

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use super::{BusinessProfileRepository, ClientRepository, InvoiceRepository, ProductRepository};
use crate::domain::{
    BusinessProfile, Client, Invoice, InvoiceItem, PaymentDetails, Product, ProfileDetails,
    TenantId,
};
use crate::error::Result;

#[derive(FromRow)]
struct ClientRow {
    id: Uuid,
    tenant_id: String,
    abn: String,
    name: String,
    phone: String,
    email: Option<String>,
    comment: Option<String>,
}

impl From<ClientRow> for Client {
    fn from(row: ClientRow) -> Self {
        Client::hydrate(
            row.id,
            TenantId::hydrate(row.tenant_id),
            row.abn,
            row.name,
            row.phone,
            row.email,
            row.comment,
        )
    }
}

#[derive(FromRow)]
struct ProductRow {
    id: Uuid,
    tenant_id: String,
    name: String,
    sku: String,
    price: Decimal,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product::hydrate(
            row.id,
            TenantId::hydrate(row.tenant_id),
            row.name,
            row.sku,
            row.price,
        )
    }
}

#[derive(FromRow)]
struct InvoiceRow {
    id: Uuid,
    tenant_id: String,
    invoice_code: String,
    invoice_date: NaiveDate,
    due_date: NaiveDate,
    client_id: Uuid,
    client_abn_snapshot: String,
    client_name_snapshot: String,
    client_phone_snapshot: String,
}

impl InvoiceRow {
    fn into_invoice(self, items: Vec<InvoiceItem>) -> Invoice {
        Invoice::hydrate(
            self.id,
            TenantId::hydrate(self.tenant_id),
            self.invoice_code,
            self.invoice_date,
            self.due_date,
            self.client_id,
            self.client_abn_snapshot,
            self.client_name_snapshot,
            self.client_phone_snapshot,
            items,
        )
    }
}

#[derive(FromRow)]
struct InvoiceItemRow {
    id: Uuid,
    invoice_id: Uuid,
    product_id: Uuid,
    product_name: String,
    sku: String,
    price: Decimal,
    quantity: i32,
    total: Decimal,
}

impl From<InvoiceItemRow> for InvoiceItem {
    fn from(row: InvoiceItemRow) -> Self {
        InvoiceItem::hydrate(
            row.id,
            row.invoice_id,
            row.product_id,
            row.product_name,
            row.sku,
            row.price,
            row.quantity,
            row.total,
        )
    }
}

#[derive(FromRow)]
struct BusinessProfileRow {
    id: Uuid,
    tenant_id: String,
    name: String,
    email: String,
    phone: String,
    postal_location: String,
    website: Option<String>,
    abn: String,
    payment_method: String,
    bank_bsb: Option<String>,
    bank_account_number: Option<String>,
    pay_id: Option<String>,
}

impl From<BusinessProfileRow> for BusinessProfile {
    fn from(row: BusinessProfileRow) -> Self {
        let payment = match row.payment_method.as_str() {
            "PayId" => PaymentDetails::PayId(row.pay_id.unwrap_or_default()),
            _ => PaymentDetails::BankTransfer {
                bsb: row.bank_bsb.unwrap_or_default(),
                account_number: row.bank_account_number.unwrap_or_default(),
            },
        };
        BusinessProfile::hydrate(
            row.id,
            TenantId::hydrate(row.tenant_id),
            ProfileDetails {
                name: row.name,
                email: row.email,
                phone: row.phone,
                postal_location: row.postal_location,
                website: row.website,
                abn: row.abn,
                payment,
            },
        )
    }
}

#[derive(Clone)]
pub struct PgClientRepository {
    pool: PgPool,
}

impl PgClientRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClientRepository for PgClientRepository {
    async fn add(&self, client: &Client) -> Result<()> {
        sqlx::query(
            "INSERT INTO clients (id, tenant_id, abn, name, phone, email, comment) \
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(client.id())
        .bind(client.tenant_id().as_str())
        .bind(client.abn())
        .bind(client.name())
        .bind(client.phone())
        .bind(client.email())
        .bind(client.comment())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn get_by_id(&self, tenant: &TenantId, id: Uuid) -> Result<Option<Client>> {
        let row = sqlx::query_as::<_, ClientRow>(
            "SELECT id, tenant_id, abn, name, phone, email, comment \
             FROM clients WHERE tenant_id = $1 AND id = $2",
        )
        .bind(tenant.as_str())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(Client::from))
    }

    async fn list(&self, tenant: &TenantId) -> Result<Vec<Client>> {
        let rows = sqlx::query_as::<_, ClientRow>(
            "SELECT id, tenant_id, abn, name, phone, email, comment \
             FROM clients WHERE tenant_id = $1 ORDER BY name",
        )
        .bind(tenant.as_str())
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Client::from).collect())
    }

    async fn update(&self, client: &Client) -> Result<()> {
        sqlx::query(
            "UPDATE clients SET name = $3, phone = $4, email = $5, comment = $6 \
             WHERE tenant_id = $1 AND id = $2",
        )
        .bind(client.tenant_id().as_str())
        .bind(client.id())
        .bind(client.name())
        .bind(client.phone())
        .bind(client.email())
        .bind(client.comment())
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

#[derive(Clone)]
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn add(&self, product: &Product) -> Result<()> {
        sqlx::query(
            "INSERT INTO products (id, tenant_id, name, sku, price) VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(product.id())
        .bind(product.tenant_id().as_str())
        .bind(product.name())
        .bind(product.sku())
        .bind(product.price())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn get_by_id(&self, tenant: &TenantId, id: Uuid) -> Result<Option<Product>> {
        let row = sqlx::query_as::<_, ProductRow>(
            "SELECT id, tenant_id, name, sku, price \
             FROM products WHERE tenant_id = $1 AND id = $2",
        )
        .bind(tenant.as_str())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(Product::from))
    }

    async fn list(&self, tenant: &TenantId) -> Result<Vec<Product>> {
        let rows = sqlx::query_as::<_, ProductRow>(
            "SELECT id, tenant_id, name, sku, price \
             FROM products WHERE tenant_id = $1 ORDER BY name",
        )
        .bind(tenant.as_str())
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Product::from).collect())
    }

    async fn update(&self, product: &Product) -> Result<()> {
        sqlx::query(
            "UPDATE products SET name = $3, sku = $4, price = $5 \
             WHERE tenant_id = $1 AND id = $2",
        )
        .bind(product.tenant_id().as_str())
        .bind(product.id())
        .bind(product.name())
        .bind(product.sku())
        .bind(product.price())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn delete(&self, tenant: &TenantId, id: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM products WHERE tenant_id = $1 AND id = $2")
            .bind(tenant.as_str())
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

#[derive(Clone)]
pub struct PgInvoiceRepository {
    pool: PgPool,
}

impl PgInvoiceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InvoiceRepository for PgInvoiceRepository {
    async fn add(&self, invoice: &Invoice) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            "INSERT INTO invoices (id, tenant_id, invoice_code, invoice_date, due_date, \
             client_id, client_abn_snapshot, client_name_snapshot, client_phone_snapshot) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)",
        )
        .bind(invoice.id())
        .bind(invoice.tenant_id().as_str())
        .bind(invoice.invoice_code())
        .bind(invoice.invoice_date())
        .bind(invoice.due_date())
        .bind(invoice.client_id())
        .bind(invoice.client_abn_snapshot())
        .bind(invoice.client_name_snapshot())
        .bind(invoice.client_phone_snapshot())
        .execute(&mut *tx)
        .await?;

        for (position, item) in invoice.items().iter().enumerate() {
            sqlx::query(
                "INSERT INTO invoice_items (id, invoice_id, product_id, product_name, sku, \
                 price, quantity, total, position) \
                 VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)",
            )
            .bind(item.id())
            .bind(item.invoice_id())
            .bind(item.product_id())
            .bind(item.product_name())
            .bind(item.sku())
            .bind(item.price())
            .bind(item.quantity())
            .bind(item.total())
            .bind(position as i32)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    async fn get_by_id(&self, tenant: &TenantId, id: Uuid) -> Result<Option<Invoice>> {
        let row = sqlx::query_as::<_, InvoiceRow>(
            "SELECT id, tenant_id, invoice_code, invoice_date, due_date, client_id, \
             client_abn_snapshot, client_name_snapshot, client_phone_snapshot \
             FROM invoices WHERE tenant_id = $1 AND id = $2",
        )
        .bind(tenant.as_str())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let items = sqlx::query_as::<_, InvoiceItemRow>(
            "SELECT id, invoice_id, product_id, product_name, sku, price, quantity, total \
             FROM invoice_items WHERE invoice_id = $1 ORDER BY position",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Some(
            row.into_invoice(items.into_iter().map(InvoiceItem::from).collect()),
        ))
    }

    async fn list(&self, tenant: &TenantId) -> Result<Vec<Invoice>> {
        let rows = sqlx::query_as::<_, InvoiceRow>(
            "SELECT id, tenant_id, invoice_code, invoice_date, due_date, client_id, \
             client_abn_snapshot, client_name_snapshot, client_phone_snapshot \
             FROM invoices WHERE tenant_id = $1 ORDER BY invoice_date DESC, invoice_code",
        )
        .bind(tenant.as_str())
        .fetch_all(&self.pool)
        .await?;

        // Items come back eager so listed totals are always consistent.
        let ids: Vec<Uuid> = rows.iter().map(|r| r.id).collect();
        let item_rows = sqlx::query_as::<_, InvoiceItemRow>(
            "SELECT id, invoice_id, product_id, product_name, sku, price, quantity, total \
             FROM invoice_items WHERE invoice_id = ANY($1) ORDER BY invoice_id, position",
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await?;

        let mut items_by_invoice: std::collections::HashMap<Uuid, Vec<InvoiceItem>> =
            std::collections::HashMap::new();
        for item_row in item_rows {
            items_by_invoice
                .entry(item_row.invoice_id)
                .or_default()
                .push(InvoiceItem::from(item_row));
        }

        Ok(rows
            .into_iter()
            .map(|row| {
                let items = items_by_invoice.remove(&row.id).unwrap_or_default();
                row.into_invoice(items)
            })
            .collect())
    }
}

#[derive(Clone)]
pub struct PgBusinessProfileRepository {
    pool: PgPool,
}

impl PgBusinessProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BusinessProfileRepository for PgBusinessProfileRepository {
    async fn get_by_tenant(&self, tenant: &TenantId) -> Result<Option<BusinessProfile>> {
        let row = sqlx::query_as::<_, BusinessProfileRow>(
            "SELECT id, tenant_id, name, email, phone, postal_location, website, abn, \
             payment_method, bank_bsb, bank_account_number, pay_id \
             FROM business_profiles WHERE tenant_id = $1",
        )
        .bind(tenant.as_str())
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(BusinessProfile::from))
    }

    async fn add(&self, profile: &BusinessProfile) -> Result<()> {
        sqlx::query(
            "INSERT INTO business_profiles (id, tenant_id, name, email, phone, postal_location, \
             website, abn, payment_method, bank_bsb, bank_account_number, pay_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)",
        )
        .bind(profile.id())
        .bind(profile.tenant_id().as_str())
        .bind(profile.name())
        .bind(profile.email())
        .bind(profile.phone())
        .bind(profile.postal_location())
        .bind(profile.website())
        .bind(profile.abn())
        .bind(profile.payment().method())
        .bind(profile.payment().bank_bsb())
        .bind(profile.payment().bank_account_number())
        .bind(profile.payment().pay_id())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn update(&self, profile: &BusinessProfile) -> Result<()> {
        sqlx::query(
            "UPDATE business_profiles SET name = $2, email = $3, phone = $4, \
             postal_location = $5, website = $6, abn = $7, payment_method = $8, \
             bank_bsb = $9, bank_account_number = $10, pay_id = $11 \
             WHERE tenant_id = $1",
        )
        .bind(profile.tenant_id().as_str())
        .bind(profile.name())
        .bind(profile.email())
        .bind(profile.phone())
        .bind(profile.postal_location())
        .bind(profile.website())
        .bind(profile.abn())
        .bind(profile.payment().method())
        .bind(profile.payment().bank_bsb())
        .bind(profile.payment().bank_account_number())
        .bind(profile.payment().pay_id())
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
