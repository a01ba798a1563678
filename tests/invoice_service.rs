//! Invoice creation orchestration against in-memory repositories.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal_macros::dec;
use uuid::Uuid;

use fairbill::domain::{Client, Invoice, Product, TenantId};
use fairbill::error::Error;
use fairbill::repository::memory::{
    InMemoryClientRepository, InMemoryInvoiceRepository, InMemoryProductRepository,
};
use fairbill::repository::{ClientRepository, InvoiceRepository, ProductRepository};
use fairbill::service::{
    ClientService, CreateInvoice, InvoiceItemRequest, InvoiceService, NewClient, NewProduct,
    ProductService, UpdateClient, UpdateProduct,
};

struct Fixture {
    clients: ClientService,
    products: ProductService,
    invoices: InvoiceService,
}

fn fixture() -> Fixture {
    let clients = Arc::new(InMemoryClientRepository::default());
    let products = Arc::new(InMemoryProductRepository::default());
    let invoices = Arc::new(InMemoryInvoiceRepository::default());
    Fixture {
        clients: ClientService::new(clients.clone()),
        products: ProductService::new(products.clone()),
        invoices: InvoiceService::new(invoices, clients, products),
    }
}

fn tenant(id: &str) -> TenantId {
    TenantId::new(id).unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

async fn seed_client(fx: &Fixture, tenant: &TenantId) -> Client {
    fx.clients
        .register(
            tenant,
            NewClient {
                abn: "123456789".to_string(),
                name: "Acme".to_string(),
                phone: "0400111222".to_string(),
                email: None,
                comment: None,
            },
        )
        .await
        .unwrap()
}

async fn seed_product(fx: &Fixture, tenant: &TenantId) -> Product {
    fx.products
        .add(
            tenant,
            NewProduct {
                name: "Widget".to_string(),
                sku: "WID-1".to_string(),
                price: dec!(10.50),
            },
        )
        .await
        .unwrap()
}

fn one_item(client_id: Uuid, product_id: Uuid, quantity: i32) -> CreateInvoice {
    CreateInvoice {
        invoice_code: "INV-1".to_string(),
        invoice_date: date(2026, 3, 1),
        due_date: None,
        client_id,
        items: vec![InvoiceItemRequest {
            product_id,
            quantity,
        }],
    }
}

#[tokio::test]
async fn create_snapshots_client_and_totals_items() {
    let fx = fixture();
    let t = tenant("tenant-a");
    let client = seed_client(&fx, &t).await;
    let product = seed_product(&fx, &t).await;

    let invoice = fx
        .invoices
        .create(&t, one_item(client.id(), product.id(), 2))
        .await
        .unwrap();

    assert_eq!(invoice.total_amount(), dec!(21.00));
    assert_eq!(invoice.due_date(), date(2026, 3, 31));
    assert_eq!(invoice.client_abn_snapshot(), "123456789");
    assert_eq!(invoice.client_name_snapshot(), "Acme");
    assert_eq!(invoice.client_phone_snapshot(), "0400111222");
    assert_eq!(invoice.items().len(), 1);
    assert_eq!(invoice.items()[0].price(), dec!(10.50));
}

#[tokio::test]
async fn create_fails_for_unknown_client() {
    let fx = fixture();
    let t = tenant("tenant-a");
    let product = seed_product(&fx, &t).await;

    let err = fx
        .invoices
        .create(&t, one_item(Uuid::new_v4(), product.id(), 1))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NotFound(m) if m.contains("Client")));
}

#[tokio::test]
async fn create_requires_at_least_one_item() {
    let fx = fixture();
    let t = tenant("tenant-a");
    let client = seed_client(&fx, &t).await;

    let err = fx
        .invoices
        .create(
            &t,
            CreateInvoice {
                invoice_code: "INV-1".to_string(),
                invoice_date: date(2026, 3, 1),
                due_date: None,
                client_id: client.id(),
                items: vec![],
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Validation(m) if m.contains("at least one item")));
}

#[tokio::test]
async fn create_rejects_zero_quantity_and_persists_nothing() {
    let fx = fixture();
    let t = tenant("tenant-a");
    let client = seed_client(&fx, &t).await;
    let product = seed_product(&fx, &t).await;

    let err = fx
        .invoices
        .create(&t, one_item(client.id(), product.id(), 0))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Validation(m) if m.contains("greater than zero")));
    assert!(fx.invoices.list(&t).await.unwrap().is_empty());
}

#[tokio::test]
async fn create_fails_for_unknown_product() {
    let fx = fixture();
    let t = tenant("tenant-a");
    let client = seed_client(&fx, &t).await;
    let missing = Uuid::new_v4();

    let err = fx
        .invoices
        .create(&t, one_item(client.id(), missing, 1))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NotFound(m) if m.contains(&missing.to_string())));
    assert!(fx.invoices.list(&t).await.unwrap().is_empty());
}

#[tokio::test]
async fn create_sums_multiple_items_in_input_order() {
    let fx = fixture();
    let t = tenant("tenant-a");
    let client = seed_client(&fx, &t).await;
    let p1 = seed_product(&fx, &t).await;
    let p2 = fx
        .products
        .add(
            &t,
            NewProduct {
                name: "Gadget".to_string(),
                sku: "GAD-1".to_string(),
                price: dec!(50),
            },
        )
        .await
        .unwrap();

    let invoice = fx
        .invoices
        .create(
            &t,
            CreateInvoice {
                invoice_code: "INV-2".to_string(),
                invoice_date: date(2026, 3, 1),
                due_date: None,
                client_id: client.id(),
                items: vec![
                    InvoiceItemRequest {
                        product_id: p1.id(),
                        quantity: 3,
                    },
                    InvoiceItemRequest {
                        product_id: p2.id(),
                        quantity: 1,
                    },
                ],
            },
        )
        .await
        .unwrap();

    assert_eq!(invoice.total_amount(), dec!(81.50));
    assert_eq!(invoice.items()[0].product_id(), p1.id());
    assert_eq!(invoice.items()[1].product_id(), p2.id());
}

#[tokio::test]
async fn duplicate_product_requests_become_separate_lines() {
    let fx = fixture();
    let t = tenant("tenant-a");
    let client = seed_client(&fx, &t).await;
    let product = seed_product(&fx, &t).await;

    let invoice = fx
        .invoices
        .create(
            &t,
            CreateInvoice {
                invoice_code: "INV-3".to_string(),
                invoice_date: date(2026, 3, 1),
                due_date: None,
                client_id: client.id(),
                items: vec![
                    InvoiceItemRequest {
                        product_id: product.id(),
                        quantity: 1,
                    },
                    InvoiceItemRequest {
                        product_id: product.id(),
                        quantity: 2,
                    },
                ],
            },
        )
        .await
        .unwrap();

    assert_eq!(invoice.items().len(), 2);
    assert_eq!(invoice.total_amount(), dec!(31.50));
}

#[tokio::test]
async fn explicit_due_date_is_kept_and_validated() {
    let fx = fixture();
    let t = tenant("tenant-a");
    let client = seed_client(&fx, &t).await;
    let product = seed_product(&fx, &t).await;

    let mut request = one_item(client.id(), product.id(), 1);
    request.due_date = Some(date(2026, 3, 15));
    let invoice = fx.invoices.create(&t, request).await.unwrap();
    assert_eq!(invoice.due_date(), date(2026, 3, 15));

    let mut request = one_item(client.id(), product.id(), 1);
    request.due_date = Some(date(2026, 2, 1));
    let err = fx.invoices.create(&t, request).await.unwrap_err();
    assert!(matches!(err, Error::Validation(m) if m.contains("Due date")));
}

#[tokio::test]
async fn snapshots_survive_later_catalogue_edits() {
    let fx = fixture();
    let t = tenant("tenant-a");
    let client = seed_client(&fx, &t).await;
    let product = seed_product(&fx, &t).await;

    let invoice = fx
        .invoices
        .create(&t, one_item(client.id(), product.id(), 2))
        .await
        .unwrap();

    fx.clients
        .update(
            &t,
            client.id(),
            UpdateClient {
                name: "Renamed Pty Ltd".to_string(),
                phone: "0400999999".to_string(),
            },
        )
        .await
        .unwrap();
    fx.products
        .update(
            &t,
            product.id(),
            UpdateProduct {
                name: "Renamed Widget".to_string(),
                sku: "NEW-1".to_string(),
                price: dec!(99),
            },
        )
        .await
        .unwrap();

    let reloaded = fx.invoices.get(&t, invoice.id()).await.unwrap().unwrap();
    assert_eq!(reloaded.client_name_snapshot(), "Acme");
    assert_eq!(reloaded.client_phone_snapshot(), "0400111222");
    assert_eq!(reloaded.items()[0].product_name(), "Widget");
    assert_eq!(reloaded.items()[0].price(), dec!(10.50));
    assert_eq!(reloaded.total_amount(), dec!(21.00));
}

#[tokio::test]
async fn invoices_are_invisible_to_other_tenants() {
    let fx = fixture();
    let a = tenant("tenant-a");
    let b = tenant("tenant-b");
    let client = seed_client(&fx, &a).await;
    let product = seed_product(&fx, &a).await;

    let invoice = fx
        .invoices
        .create(&a, one_item(client.id(), product.id(), 1))
        .await
        .unwrap();

    assert!(fx.invoices.get(&b, invoice.id()).await.unwrap().is_none());
    assert!(fx.invoices.list(&b).await.unwrap().is_empty());

    // Another tenant cannot even reference this tenant's client.
    let err = fx
        .invoices
        .create(&b, one_item(client.id(), product.id(), 1))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
}

struct FailingInvoiceRepository;

#[async_trait]
impl InvoiceRepository for FailingInvoiceRepository {
    async fn add(&self, _invoice: &Invoice) -> fairbill::error::Result<()> {
        Err(Error::Database(sqlx::Error::PoolClosed))
    }

    async fn get_by_id(
        &self,
        _tenant: &TenantId,
        _id: Uuid,
    ) -> fairbill::error::Result<Option<Invoice>> {
        Ok(None)
    }

    async fn list(&self, _tenant: &TenantId) -> fairbill::error::Result<Vec<Invoice>> {
        Ok(vec![])
    }
}

#[tokio::test]
async fn persistence_failures_bubble_up_unchanged() {
    let clients: Arc<dyn ClientRepository> = Arc::new(InMemoryClientRepository::default());
    let products: Arc<dyn ProductRepository> = Arc::new(InMemoryProductRepository::default());
    let client_service = ClientService::new(clients.clone());
    let product_service = ProductService::new(products.clone());
    let invoices = InvoiceService::new(Arc::new(FailingInvoiceRepository), clients, products);

    let t = tenant("tenant-a");
    let client = client_service
        .register(
            &t,
            NewClient {
                abn: "123".to_string(),
                name: "Acme".to_string(),
                phone: "0400".to_string(),
                email: None,
                comment: None,
            },
        )
        .await
        .unwrap();
    let product = product_service
        .add(
            &t,
            NewProduct {
                name: "Widget".to_string(),
                sku: "WID-1".to_string(),
                price: dec!(10),
            },
        )
        .await
        .unwrap();

    let err = invoices
        .create(&t, one_item(client.id(), product.id(), 1))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Database(_)));
}
