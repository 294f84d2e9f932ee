//! Integration tests for Orchard.
//!
//! The tests drive the real axum router in-process (no sockets, no running
//! server) via `tower::ServiceExt::oneshot`, against the in-memory cart
//! store and the seeded catalog.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p orchard-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `api_products` - Catalog listing and lookup
//! - `api_cart` - Cart fetch/add/remove semantics and validation
//! - `api_checkout` - Checkout flow and receipt arithmetic

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use orchard_server::catalog::ProductCatalog;
use orchard_server::config::{ServerConfig, StoreMode};
use orchard_server::routes;
use orchard_server::state::AppState;
use orchard_server::store::MemoryCartStore;

/// Build the application router with a fresh in-memory cart store.
///
/// Each test gets its own store, so tests never share cart state.
#[must_use]
pub fn test_router() -> Router {
    let config = ServerConfig {
        host: IpAddr::V4(Ipv4Addr::LOCALHOST),
        port: 0,
        store: StoreMode::Memory,
        sentry_dsn: None,
        sentry_environment: None,
    };

    let state = AppState::new(config, ProductCatalog::seeded(), Arc::new(MemoryCartStore::new()));
    routes::router(state)
}

/// Issue a GET request and return the status with the parsed JSON body.
///
/// # Panics
///
/// Panics if the request cannot be built or the body cannot be read; a
/// non-JSON body parses to `Value::Null`.
pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("build request");
    send(app, request).await
}

/// Issue a POST request with a JSON body and return the status with the
/// parsed JSON response body.
///
/// # Panics
///
/// Panics if the request cannot be built or the body cannot be read.
pub async fn post_json(app: &Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("build request");
    send(app, request).await
}

/// Issue a POST request with a raw body and explicit content type, for
/// exercising malformed payloads the JSON helper cannot produce.
///
/// # Panics
///
/// Panics if the request cannot be built or the body cannot be read.
pub async fn post_raw(
    app: &Router,
    uri: &str,
    content_type: &str,
    body: &str,
) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from(body.to_owned()))
        .expect("build request");
    send(app, request).await
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("router never fails");

    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}
