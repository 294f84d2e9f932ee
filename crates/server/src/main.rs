//! Orchard Server - Storefront REST API.
//!
//! This binary serves the JSON API consumed by the storefront frontend on
//! port 5000.
//!
//! # Architecture
//!
//! - Axum web framework serving JSON (no server-side rendering)
//! - Seeded in-memory product catalog, read-only after startup
//! - Cart storage behind an injected store abstraction:
//!   in-memory (mock mode, default) or `SQLite` via sqlx
//! - Checkout prices the cart into a receipt (8% tax) and clears it
//!
//! # Modes
//!
//! - `ORCHARD_STORE=memory` (default): carts live for the process lifetime
//! - `ORCHARD_STORE=sqlite`: carts persist in the database named by
//!   `ORCHARD_DATABASE_URL`

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;

use axum::Router;
use sentry::integrations::tracing as sentry_tracing;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use orchard_server::catalog::ProductCatalog;
use orchard_server::config::{ServerConfig, StoreMode};
use orchard_server::middleware::request_id_middleware;
use orchard_server::routes;
use orchard_server::state::AppState;
use orchard_server::store::{MemoryCartStore, SharedCartStore, SqliteCartStore};

/// Initialize Sentry error tracking and return guard that must be kept alive.
fn init_sentry(config: &ServerConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_ref()?;

    let guard = sentry::init((
        dsn.as_str(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: config
                .sentry_environment
                .clone()
                .map(std::borrow::Cow::Owned),
            attach_stacktrace: true,
            ..Default::default()
        },
    ));

    tracing::info!("Sentry initialized");
    Some(guard)
}

/// Filter tracing events to Sentry event types.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR | tracing::Level::WARN => sentry_tracing::EventFilter::Event,
        tracing::Level::INFO | tracing::Level::DEBUG => sentry_tracing::EventFilter::Breadcrumb,
        _ => sentry_tracing::EventFilter::Ignore,
    }
}

/// Build the configured cart store backend.
async fn build_cart_store(config: &ServerConfig) -> SharedCartStore {
    match &config.store {
        StoreMode::Memory => {
            tracing::info!("Using in-memory cart store (mock mode)");
            Arc::new(MemoryCartStore::new())
        }
        StoreMode::Sqlite { database_url } => {
            let store = SqliteCartStore::connect(database_url)
                .await
                .expect("Failed to connect to cart database");
            tracing::info!("SQLite cart store connected");

            // NOTE: Migrations are NOT run automatically on startup.
            // Run them explicitly via: cargo run -p orchard-cli -- migrate
            Arc::new(store)
        }
    }
}

#[tokio::main]
async fn main() {
    // Load configuration from environment (needed for Sentry init)
    let config = ServerConfig::from_env().expect("Failed to load configuration");

    // Initialize Sentry (must be done before tracing subscriber)
    let _sentry_guard = init_sentry(&config);

    // Initialize tracing with EnvFilter and Sentry integration
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "orchard_server=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();

    // Build the cart store for the configured mode
    let carts = build_cart_store(&config).await;

    // Build application state over the seeded catalog
    let state = AppState::new(config.clone(), ProductCatalog::seeded(), carts);
    tracing::info!(products = state.catalog().len(), "Catalog seeded");

    // Build router
    let app: Router = routes::router(state)
        .layer(axum::middleware::from_fn(request_id_middleware))
        // The SPA frontend is served from a separate origin
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        // Sentry layers (outermost for full request coverage)
        .layer(sentry_tower::NewSentryLayer::new_from_top())
        .layer(sentry_tower::SentryHttpLayer::new().enable_transaction());

    // Start server
    let addr = config.socket_addr();
    tracing::info!("orchard server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
