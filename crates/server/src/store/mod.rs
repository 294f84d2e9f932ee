//! Cart storage backends.
//!
//! The cart for a given user key is the only shared mutable state in the
//! system. Storage is an injected abstraction so the same cart and checkout
//! logic runs against volatile memory (mock mode, the default) or `SQLite`.
//!
//! # Concurrency
//!
//! A backend only guarantees that each individual `get`/`put`/`delete` is
//! atomic. The read-modify-write cycle in the service layer is NOT
//! serialized across concurrent requests for the same user key; two
//! concurrent adds can lose an update. That is an accepted simplification
//! for this demo, not something a backend should try to paper over.

pub mod memory;
pub mod sqlite;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use orchard_core::{Cart, UserKey};

pub use memory::MemoryCartStore;
pub use sqlite::SqliteCartStore;

/// Errors from cart storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database operation failed.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Stored cart document could not be (de)serialized.
    #[error("cart serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Keyed cart storage.
///
/// Implementations must be cheap to share behind an `Arc`; the server holds
/// one store for its whole lifetime.
#[async_trait]
pub trait CartStore: Send + Sync {
    /// Fetch the cart for a user key, if one exists.
    async fn get(&self, user: &UserKey) -> Result<Option<Cart>, StoreError>;

    /// Persist a cart, replacing any existing cart for the same user key.
    async fn put(&self, cart: &Cart) -> Result<(), StoreError>;

    /// Delete the cart for a user key. Deleting a missing cart is a no-op.
    async fn delete(&self, user: &UserKey) -> Result<(), StoreError>;

    /// Health probe used by the readiness endpoint.
    async fn ping(&self) -> Result<(), StoreError>;
}

/// Shared handle to the configured cart store.
pub type SharedCartStore = Arc<dyn CartStore>;
