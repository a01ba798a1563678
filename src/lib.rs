//! Fairbill — self-hosted multi-tenant invoicing service.
//!
//! A web API over clients, products, invoices and a per-tenant business
//! profile. Invoices snapshot client and product details at creation time, so
//! later catalogue edits never rewrite issued invoices, and every total is a
//! live sum of line totals.

pub mod api;
pub mod auth;
pub mod config;
pub mod domain;
pub mod error;
pub mod repository;
pub mod service;

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::PgPool;

use auth::AuthConfig;
use repository::postgres::{
    PgBusinessProfileRepository, PgClientRepository, PgInvoiceRepository, PgProductRepository,
};
use service::{BusinessProfileService, ClientService, InvoiceService, ProductService};

#[derive(Clone, FromRef)]
pub struct AppState {
    pub clients: ClientService,
    pub products: ProductService,
    pub invoices: InvoiceService,
    pub profiles: BusinessProfileService,
    pub auth: AuthConfig,
}

impl AppState {
    pub fn postgres(pool: PgPool, auth: AuthConfig) -> Self {
        let clients = Arc::new(PgClientRepository::new(pool.clone()));
        let products = Arc::new(PgProductRepository::new(pool.clone()));
        let invoices = Arc::new(PgInvoiceRepository::new(pool.clone()));
        let profiles = Arc::new(PgBusinessProfileRepository::new(pool));

        Self {
            clients: ClientService::new(clients.clone()),
            products: ProductService::new(products.clone()),
            invoices: InvoiceService::new(invoices, clients, products),
            profiles: BusinessProfileService::new(profiles),
            auth,
        }
    }
}
