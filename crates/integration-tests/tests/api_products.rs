//! Integration tests for the product catalog endpoints.

use axum::http::StatusCode;

use orchard_core::Product;
use orchard_integration_tests::{get, test_router};

#[tokio::test]
async fn test_health() {
    let app = test_router();
    let (status, _) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_readiness_with_memory_store() {
    let app = test_router();
    let (status, _) = get(&app, "/health/ready").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_list_products() {
    let app = test_router();
    let (status, body) = get(&app, "/api/products").await;

    assert_eq!(status, StatusCode::OK);
    let products: Vec<Product> = serde_json::from_value(body).expect("product array");
    assert!(!products.is_empty());
}

#[tokio::test]
async fn test_list_order_is_stable() {
    let app = test_router();
    let (_, first) = get(&app, "/api/products").await;
    let (_, second) = get(&app, "/api/products").await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_show_product() {
    let app = test_router();
    let (status, body) = get(&app, "/api/products/1").await;

    assert_eq!(status, StatusCode::OK);
    let product: Product = serde_json::from_value(body).expect("product");
    assert_eq!(product.id.as_i64(), 1);
}

#[tokio::test]
async fn test_show_unknown_product_is_404_with_json_error() {
    let app = test_router();
    let (status, body) = get(&app, "/api/products/9999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().is_some_and(|msg| !msg.is_empty()));
}
