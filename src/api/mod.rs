//! HTTP surface: routes, handlers and response DTOs.

pub mod dto;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::auth::CurrentTenant;
use crate::error::Error;
use crate::service::{CreateInvoice, NewClient, NewProduct, UpdateClient, UpdateProduct, UpsertProfile};
use crate::AppState;
use dto::{BusinessProfileDto, ClientDto, InvoiceDto, ProductDto};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/clients", get(list_clients).post(create_client))
        .route("/api/clients/:id", get(get_client).put(update_client))
        .route("/api/products", get(list_products).post(create_product))
        .route(
            "/api/products/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
        .route("/api/invoices", get(list_invoices).post(create_invoice))
        .route("/api/invoices/:id", get(get_invoice))
        .route("/api/business-profile", get(get_profile).put(upsert_profile))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "healthy", "service": "fairbill"}))
}

// --- clients -------------------------------------------------------------

async fn list_clients(
    State(state): State<AppState>,
    CurrentTenant(tenant): CurrentTenant,
) -> Result<Json<Vec<ClientDto>>, Error> {
    let clients = state.clients.list(&tenant).await?;
    Ok(Json(clients.iter().map(ClientDto::from).collect()))
}

async fn get_client(
    State(state): State<AppState>,
    CurrentTenant(tenant): CurrentTenant,
    Path(id): Path<Uuid>,
) -> Result<Json<ClientDto>, Error> {
    let client = state
        .clients
        .get(&tenant, id)
        .await?
        .ok_or_else(|| Error::NotFound("Client not found".to_string()))?;
    Ok(Json(ClientDto::from(&client)))
}

async fn create_client(
    State(state): State<AppState>,
    CurrentTenant(tenant): CurrentTenant,
    Json(input): Json<NewClient>,
) -> Result<(StatusCode, Json<ClientDto>), Error> {
    let client = state.clients.register(&tenant, input).await?;
    Ok((StatusCode::CREATED, Json(ClientDto::from(&client))))
}

async fn update_client(
    State(state): State<AppState>,
    CurrentTenant(tenant): CurrentTenant,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateClient>,
) -> Result<StatusCode, Error> {
    state.clients.update(&tenant, id, input).await?;
    Ok(StatusCode::NO_CONTENT)
}

// --- products ------------------------------------------------------------

async fn list_products(
    State(state): State<AppState>,
    CurrentTenant(tenant): CurrentTenant,
) -> Result<Json<Vec<ProductDto>>, Error> {
    let products = state.products.list(&tenant).await?;
    Ok(Json(products.iter().map(ProductDto::from).collect()))
}

async fn get_product(
    State(state): State<AppState>,
    CurrentTenant(tenant): CurrentTenant,
    Path(id): Path<Uuid>,
) -> Result<Json<ProductDto>, Error> {
    let product = state
        .products
        .get(&tenant, id)
        .await?
        .ok_or_else(|| Error::NotFound("Product not found".to_string()))?;
    Ok(Json(ProductDto::from(&product)))
}

async fn create_product(
    State(state): State<AppState>,
    CurrentTenant(tenant): CurrentTenant,
    Json(input): Json<NewProduct>,
) -> Result<(StatusCode, Json<ProductDto>), Error> {
    let product = state.products.add(&tenant, input).await?;
    Ok((StatusCode::CREATED, Json(ProductDto::from(&product))))
}

async fn update_product(
    State(state): State<AppState>,
    CurrentTenant(tenant): CurrentTenant,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateProduct>,
) -> Result<StatusCode, Error> {
    state.products.update(&tenant, id, input).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_product(
    State(state): State<AppState>,
    CurrentTenant(tenant): CurrentTenant,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, Error> {
    state.products.delete(&tenant, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// --- invoices ------------------------------------------------------------

async fn list_invoices(
    State(state): State<AppState>,
    CurrentTenant(tenant): CurrentTenant,
) -> Result<Json<Vec<InvoiceDto>>, Error> {
    let invoices = state.invoices.list(&tenant).await?;
    Ok(Json(invoices.iter().map(InvoiceDto::from).collect()))
}

async fn get_invoice(
    State(state): State<AppState>,
    CurrentTenant(tenant): CurrentTenant,
    Path(id): Path<Uuid>,
) -> Result<Json<InvoiceDto>, Error> {
    let invoice = state
        .invoices
        .get(&tenant, id)
        .await?
        .ok_or_else(|| Error::NotFound("Invoice not found".to_string()))?;
    Ok(Json(InvoiceDto::from(&invoice)))
}

async fn create_invoice(
    State(state): State<AppState>,
    CurrentTenant(tenant): CurrentTenant,
    Json(input): Json<CreateInvoice>,
) -> Result<(StatusCode, Json<InvoiceDto>), Error> {
    let invoice = state.invoices.create(&tenant, input).await?;
    Ok((StatusCode::CREATED, Json(InvoiceDto::from(&invoice))))
}

// --- business profile ----------------------------------------------------

async fn get_profile(
    State(state): State<AppState>,
    CurrentTenant(tenant): CurrentTenant,
) -> Result<Json<BusinessProfileDto>, Error> {
    let profile = state
        .profiles
        .get(&tenant)
        .await?
        .ok_or_else(|| Error::NotFound("Business profile not found".to_string()))?;
    Ok(Json(BusinessProfileDto::from(&profile)))
}

async fn upsert_profile(
    State(state): State<AppState>,
    CurrentTenant(tenant): CurrentTenant,
    Json(input): Json<UpsertProfile>,
) -> Result<Json<BusinessProfileDto>, Error> {
    let profile = state.profiles.upsert(&tenant, input).await?;
    Ok(Json(BusinessProfileDto::from(&profile)))
}
