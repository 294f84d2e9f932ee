//! `SQLite` cart storage via sqlx.
//!
//! One row per user key; line items are stored as a JSON document. The
//! schema lives in `crates/server/migrations/` and is applied via:
//!
//! ```bash
//! cargo run -p orchard-cli -- migrate
//! ```

use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

use orchard_core::{Cart, CartItem, UserKey};

use super::{CartStore, StoreError};

/// Cart store backed by a `SQLite` database.
#[derive(Debug, Clone)]
pub struct SqliteCartStore {
    pool: SqlitePool,
}

impl SqliteCartStore {
    /// Wrap an existing connection pool.
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Connect to the database with sensible pool defaults.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the connection cannot be established.
    pub async fn connect(database_url: &SecretString) -> Result<Self, StoreError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(10))
            .connect(database_url.expose_secret())
            .await?;
        Ok(Self::new(pool))
    }

    /// Get a reference to the underlying pool.
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl CartStore for SqliteCartStore {
    async fn get(&self, user: &UserKey) -> Result<Option<Cart>, StoreError> {
        let row: Option<(String,)> =
            sqlx::query_as("SELECT items FROM carts WHERE user_key = ?")
                .bind(user.as_str())
                .fetch_optional(&self.pool)
                .await?;

        let Some((items_json,)) = row else {
            return Ok(None);
        };

        let items: Vec<CartItem> = serde_json::from_str(&items_json)?;
        Ok(Some(Cart {
            user: user.clone(),
            items,
        }))
    }

    async fn put(&self, cart: &Cart) -> Result<(), StoreError> {
        let items_json = serde_json::to_string(&cart.items)?;

        sqlx::query(
            "INSERT INTO carts (user_key, items, updated_at)
             VALUES (?, ?, CURRENT_TIMESTAMP)
             ON CONFLICT(user_key) DO UPDATE
             SET items = excluded.items, updated_at = CURRENT_TIMESTAMP",
        )
        .bind(cart.user.as_str())
        .bind(items_json)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, user: &UserKey) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM carts WHERE user_key = ?")
            .bind(user.as_str())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
