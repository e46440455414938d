//! Record HTTP Routes
//!
//! One handler per catalog operation, plus the health check. Request bodies
//! arrive as dynamic JSON and are validated by the catalog before any
//! business logic runs.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use serde_json::Value;

use crate::catalog::{Book, Catalog, CatalogError};

// ==================
// Shared State
// ==================

/// Catalog state shared across handlers
pub struct CatalogState {
    pub catalog: Catalog,
}

impl CatalogState {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }
}

// ==================
// Response Types
// ==================

/// Confirmation message body
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

// ==================
// Routes
// ==================

/// Create record routes
pub fn record_routes(state: Arc<CatalogState>) -> Router {
    Router::new()
        .route(
            "/records",
            get(list_records_handler).post(create_record_handler),
        )
        .route(
            "/records/:id",
            get(get_record_handler)
                .put(update_record_handler)
                .delete(delete_record_handler),
        )
        .with_state(state)
}

/// Health check route
pub fn health_routes() -> Router {
    Router::new().route("/health", get(health_handler))
}

// ==================
// Handlers
// ==================

async fn create_record_handler(
    State(state): State<Arc<CatalogState>>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Book>), CatalogError> {
    let book = state.catalog.create(&body)?;
    Ok((StatusCode::CREATED, Json(book)))
}

async fn list_records_handler(
    State(state): State<Arc<CatalogState>>,
) -> Result<Json<Vec<Book>>, CatalogError> {
    let books = state.catalog.list()?;
    Ok(Json(books))
}

async fn get_record_handler(
    State(state): State<Arc<CatalogState>>,
    Path(id): Path<String>,
) -> Result<Json<Book>, CatalogError> {
    let book = state.catalog.get(&id)?;
    Ok(Json(book))
}

async fn update_record_handler(
    State(state): State<Arc<CatalogState>>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<Book>, CatalogError> {
    let book = state.catalog.update(&id, &body)?;
    Ok(Json(book))
}

async fn delete_record_handler(
    State(state): State<Arc<CatalogState>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, CatalogError> {
    state.catalog.delete(&id)?;
    Ok(Json(MessageResponse {
        message: "Book deleted successfully.".to_string(),
    }))
}

async fn health_handler() -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (StatusCode::OK, Json(response))
}
