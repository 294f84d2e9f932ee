//! Application state shared across handlers.

use std::sync::Arc;

use crate::catalog::ProductCatalog;
use crate::config::ServerConfig;
use crate::services::{CartService, CheckoutService};
use crate::store::SharedCartStore;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// catalog, the configured cart store, and the services built over them.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ServerConfig,
    catalog: Arc<ProductCatalog>,
    carts: SharedCartStore,
    cart_service: CartService,
    checkout_service: CheckoutService,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Arguments
    ///
    /// * `config` - Server configuration
    /// * `catalog` - Seeded product catalog
    /// * `carts` - Configured cart store backend
    #[must_use]
    pub fn new(config: ServerConfig, catalog: ProductCatalog, carts: SharedCartStore) -> Self {
        let catalog = Arc::new(catalog);
        let cart_service = CartService::new(Arc::clone(&catalog), Arc::clone(&carts));
        let checkout_service = CheckoutService::new(Arc::clone(&carts));

        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                carts,
                cart_service,
                checkout_service,
            }),
        }
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &ProductCatalog {
        &self.inner.catalog
    }

    /// Get a reference to the cart store.
    #[must_use]
    pub fn carts(&self) -> &SharedCartStore {
        &self.inner.carts
    }

    /// Get a reference to the cart service.
    #[must_use]
    pub fn cart_service(&self) -> &CartService {
        &self.inner.cart_service
    }

    /// Get a reference to the checkout service.
    #[must_use]
    pub fn checkout_service(&self) -> &CheckoutService {
        &self.inner.checkout_service
    }
}
