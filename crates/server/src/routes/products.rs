//! Product route handlers.

use axum::{Json, extract::Path, extract::State};
use tracing::instrument;

use orchard_core::{Product, ProductId};

use crate::error::{AppError, Result};
use crate::state::AppState;

/// List all products in seeded order.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.catalog().list().to_vec())
}

/// Fetch a single product by id.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Json<Product>> {
    let id = ProductId::new(id);
    state
        .catalog()
        .get(id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))
}
