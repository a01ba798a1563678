//! Response bodies. Request bodies are the service input types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::{BusinessProfile, Client, Invoice, InvoiceItem, Product};

#[derive(Debug, Serialize)]
pub struct ClientDto {
    pub id: Uuid,
    pub abn: String,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub comment: Option<String>,
}

impl From<&Client> for ClientDto {
    fn from(client: &Client) -> Self {
        Self {
            id: client.id(),
            abn: client.abn().to_string(),
            name: client.name().to_string(),
            phone: client.phone().to_string(),
            email: client.email().map(str::to_string),
            comment: client.comment().map(str::to_string),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProductDto {
    pub id: Uuid,
    pub name: String,
    pub sku: String,
    pub price: Decimal,
}

impl From<&Product> for ProductDto {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id(),
            name: product.name().to_string(),
            sku: product.sku().to_string(),
            price: product.price(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct InvoiceItemDto {
    pub product_id: Uuid,
    pub product_name: String,
    pub sku: String,
    pub quantity: i32,
    pub price: Decimal,
    pub total: Decimal,
}

impl From<&InvoiceItem> for InvoiceItemDto {
    fn from(item: &InvoiceItem) -> Self {
        Self {
            product_id: item.product_id(),
            product_name: item.product_name().to_string(),
            sku: item.sku().to_string(),
            quantity: item.quantity(),
            price: item.price(),
            total: item.total(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct InvoiceDto {
    pub id: Uuid,
    pub invoice_code: String,
    pub invoice_date: NaiveDate,
    pub due_date: NaiveDate,
    pub client_id: Uuid,
    pub client_name: String,
    pub client_abn: String,
    pub total_amount: Decimal,
    pub items: Vec<InvoiceItemDto>,
}

impl From<&Invoice> for InvoiceDto {
    fn from(invoice: &Invoice) -> Self {
        Self {
            id: invoice.id(),
            invoice_code: invoice.invoice_code().to_string(),
            invoice_date: invoice.invoice_date(),
            due_date: invoice.due_date(),
            client_id: invoice.client_id(),
            client_name: invoice.client_name_snapshot().to_string(),
            client_abn: invoice.client_abn_snapshot().to_string(),
            total_amount: invoice.total_amount(),
            items: invoice.items().iter().map(InvoiceItemDto::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BusinessProfileDto {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub postal_location: String,
    pub website: Option<String>,
    pub abn: String,
    pub payment_method: String,
    pub bank_bsb: Option<String>,
    pub bank_account_number: Option<String>,
    pub pay_id: Option<String>,
}

impl From<&BusinessProfile> for BusinessProfileDto {
    fn from(profile: &BusinessProfile) -> Self {
        Self {
            id: profile.id(),
            name: profile.name().to_string(),
            email: profile.email().to_string(),
            phone: profile.phone().to_string(),
            postal_location: profile.postal_location().to_string(),
            website: profile.website().map(str::to_string),
            abn: profile.abn().to_string(),
            payment_method: profile.payment().method().to_string(),
            bank_bsb: profile.payment().bank_bsb().map(str::to_string),
            bank_account_number: profile.payment().bank_account_number().map(str::to_string),
            pay_id: profile.payment().pay_id().map(str::to_string),
        }
    }
}
