//! Catalog inspection commands.

use orchard_server::catalog::ProductCatalog;

/// Print the seeded product catalog.
pub fn list() {
    let catalog = ProductCatalog::seeded();

    tracing::info!("Seeded Product Catalog");
    tracing::info!("======================");
    tracing::info!("Products: {}", catalog.len());

    for product in catalog.list() {
        tracing::info!(
            "  [{}] {} - ${} ({}, stock {})",
            product.id,
            product.title,
            product.price,
            product.category,
            product.stock
        );
    }
}
