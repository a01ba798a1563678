//! Product and client service behaviour against in-memory repositories.

use std::sync::Arc;

use rust_decimal_macros::dec;
use uuid::Uuid;

use fairbill::domain::TenantId;
use fairbill::error::Error;
use fairbill::repository::memory::{InMemoryClientRepository, InMemoryProductRepository};
use fairbill::service::{
    ClientService, NewClient, NewProduct, ProductService, UpdateClient, UpdateProduct,
};

fn product_service() -> ProductService {
    ProductService::new(Arc::new(InMemoryProductRepository::default()))
}

fn client_service() -> ClientService {
    ClientService::new(Arc::new(InMemoryClientRepository::default()))
}

fn tenant(id: &str) -> TenantId {
    TenantId::new(id).unwrap()
}

fn widget(price: rust_decimal::Decimal) -> NewProduct {
    NewProduct {
        name: "Widget".to_string(),
        sku: "WID-1".to_string(),
        price,
    }
}

fn acme() -> NewClient {
    NewClient {
        abn: "123456789".to_string(),
        name: "Acme".to_string(),
        phone: "0400111222".to_string(),
        email: None,
        comment: None,
    }
}

#[tokio::test]
async fn add_product_rejects_non_positive_price() {
    let service = product_service();
    let t = tenant("tenant-a");

    let err = service.add(&t, widget(dec!(0))).await.unwrap_err();
    assert!(matches!(err, Error::Validation(m) if m.contains("greater than zero")));

    let err = service.add(&t, widget(dec!(-5))).await.unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
    assert!(service.list(&t).await.unwrap().is_empty());
}

#[tokio::test]
async fn product_crud_roundtrip() {
    let service = product_service();
    let t = tenant("tenant-a");

    let product = service.add(&t, widget(dec!(10.50))).await.unwrap();
    let fetched = service.get(&t, product.id()).await.unwrap().unwrap();
    assert_eq!(fetched.name(), "Widget");
    assert_eq!(fetched.price(), dec!(10.50));

    service
        .update(
            &t,
            product.id(),
            UpdateProduct {
                name: "Widget Pro".to_string(),
                sku: "WID-2".to_string(),
                price: dec!(12),
            },
        )
        .await
        .unwrap();
    let updated = service.get(&t, product.id()).await.unwrap().unwrap();
    assert_eq!(updated.sku(), "WID-2");
    assert_eq!(updated.price(), dec!(12));

    service.delete(&t, product.id()).await.unwrap();
    assert!(service.get(&t, product.id()).await.unwrap().is_none());
}

#[tokio::test]
async fn update_unknown_product_is_a_no_op() {
    let service = product_service();
    let t = tenant("tenant-a");
    service.add(&t, widget(dec!(10))).await.unwrap();

    service
        .update(
            &t,
            Uuid::new_v4(),
            UpdateProduct {
                name: "Ghost".to_string(),
                sku: "GHO-1".to_string(),
                price: dec!(1),
            },
        )
        .await
        .unwrap();

    let products = service.list(&t).await.unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].name(), "Widget");
}

#[tokio::test]
async fn update_product_rejects_negative_price() {
    let service = product_service();
    let t = tenant("tenant-a");
    let product = service.add(&t, widget(dec!(10))).await.unwrap();

    let err = service
        .update(
            &t,
            product.id(),
            UpdateProduct {
                name: "Widget".to_string(),
                sku: "WID-1".to_string(),
                price: dec!(-1),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Validation(m) if m.contains("negative")));
}

#[tokio::test]
async fn products_are_scoped_to_their_tenant() {
    let service = product_service();
    let a = tenant("tenant-a");
    let b = tenant("tenant-b");
    let product = service.add(&a, widget(dec!(10))).await.unwrap();

    assert!(service.get(&b, product.id()).await.unwrap().is_none());
    assert!(service.list(&b).await.unwrap().is_empty());

    service.delete(&b, product.id()).await.unwrap();
    assert!(service.get(&a, product.id()).await.unwrap().is_some());
}

#[tokio::test]
async fn register_client_normalizes_optional_fields() {
    let service = client_service();
    let t = tenant("tenant-a");

    let mut input = acme();
    input.email = Some("   ".to_string());
    input.comment = Some("  net 30  ".to_string());
    let client = service.register(&t, input).await.unwrap();

    assert_eq!(client.email(), None);
    assert_eq!(client.comment(), Some("net 30"));
}

#[tokio::test]
async fn register_client_rejects_invalid_email_and_blank_name() {
    let service = client_service();
    let t = tenant("tenant-a");

    let mut input = acme();
    input.email = Some("not-an-email".to_string());
    let err = service.register(&t, input).await.unwrap_err();
    assert!(matches!(err, Error::Validation(_)));

    let mut input = acme();
    input.name = "   ".to_string();
    let err = service.register(&t, input).await.unwrap_err();
    assert!(matches!(err, Error::Validation(m) if m.contains("Name")));
}

#[tokio::test]
async fn update_client_changes_contact_info_only() {
    let service = client_service();
    let t = tenant("tenant-a");
    let client = service.register(&t, acme()).await.unwrap();

    service
        .update(
            &t,
            client.id(),
            UpdateClient {
                name: "Acme Pty Ltd".to_string(),
                phone: "0400999888".to_string(),
            },
        )
        .await
        .unwrap();

    let updated = service.get(&t, client.id()).await.unwrap().unwrap();
    assert_eq!(updated.name(), "Acme Pty Ltd");
    assert_eq!(updated.phone(), "0400999888");
    assert_eq!(updated.abn(), "123456789");
}

#[tokio::test]
async fn update_unknown_client_is_a_no_op() {
    let service = client_service();
    let t = tenant("tenant-a");
    service.register(&t, acme()).await.unwrap();

    service
        .update(
            &t,
            Uuid::new_v4(),
            UpdateClient {
                name: "Ghost".to_string(),
                phone: "0000".to_string(),
            },
        )
        .await
        .unwrap();

    let clients = service.list(&t).await.unwrap();
    assert_eq!(clients.len(), 1);
    assert_eq!(clients[0].name(), "Acme");
}

#[tokio::test]
async fn clients_are_scoped_to_their_tenant() {
    let service = client_service();
    let a = tenant("tenant-a");
    let b = tenant("tenant-b");
    let client = service.register(&a, acme()).await.unwrap();

    assert!(service.get(&b, client.id()).await.unwrap().is_none());
    assert!(service.list(&b).await.unwrap().is_empty());
}
