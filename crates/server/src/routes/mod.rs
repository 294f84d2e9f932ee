//! HTTP route handlers for the storefront API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health              - Liveness check
//! GET  /health/ready        - Readiness check (pings the cart store)
//!
//! # Products
//! GET  /api/products        - Product listing (seeded order)
//! GET  /api/products/{id}   - Product detail
//!
//! # Cart
//! GET  /api/cart?userId=..  - Fetch (or lazily create) a user's cart
//! POST /api/cart/add        - Add an item, merging quantities
//! POST /api/cart/remove     - Remove an item (no-op if absent)
//!
//! # Checkout
//! POST /api/checkout        - Price the cart into a receipt and clear it
//! ```
//!
//! All failure bodies are JSON of the shape `{"error": "<message>"}`.

pub mod cart;
pub mod checkout;
pub mod products;

use axum::extract::State;
use axum::http::StatusCode;
use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;
use crate::store::CartStore as _;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/{id}", get(products::show))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/remove", post(cart::remove))
}

/// Create all API routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/api/products", product_routes())
        .nest("/api/cart", cart_routes())
        .route("/api/checkout", post(checkout::checkout))
}

/// Build the full application router with health endpoints and state applied.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .merge(api_routes())
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Verifies cart store connectivity before returning OK.
/// Returns 503 Service Unavailable if the store is not reachable.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    match state.carts().ping().await {
        Ok(()) => StatusCode::OK,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}
