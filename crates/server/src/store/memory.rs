//! Volatile in-memory cart storage (mock mode).

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use orchard_core::{Cart, UserKey};

use super::{CartStore, StoreError};

/// Cart store backed by a process-local map.
///
/// Carts persist only for the process lifetime. This is the default backend
/// when no database is configured.
#[derive(Debug, Default)]
pub struct MemoryCartStore {
    carts: RwLock<HashMap<UserKey, Cart>>,
}

impl MemoryCartStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CartStore for MemoryCartStore {
    async fn get(&self, user: &UserKey) -> Result<Option<Cart>, StoreError> {
        Ok(self.carts.read().await.get(user).cloned())
    }

    async fn put(&self, cart: &Cart) -> Result<(), StoreError> {
        self.carts
            .write()
            .await
            .insert(cart.user.clone(), cart.clone());
        Ok(())
    }

    async fn delete(&self, user: &UserKey) -> Result<(), StoreError> {
        self.carts.write().await.remove(user);
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use orchard_core::{Product, ProductId};

    use super::*;

    fn cart_with_item(user: &str) -> Cart {
        let mut cart = Cart::new(UserKey::new(user));
        cart.add_item(
            Product {
                id: ProductId::new(1),
                title: "Test".to_owned(),
                description: String::new(),
                price: Decimal::new(1000, 2),
                image: String::new(),
                stock: 1,
                category: "test".to_owned(),
            },
            2,
        );
        cart
    }

    #[tokio::test]
    async fn test_get_missing_cart_is_none() {
        let store = MemoryCartStore::new();
        let cart = store.get(&UserKey::new("u1")).await.expect("get");
        assert!(cart.is_none());
    }

    #[tokio::test]
    async fn test_put_then_get_roundtrip() {
        let store = MemoryCartStore::new();
        let cart = cart_with_item("u1");

        store.put(&cart).await.expect("put");
        let fetched = store.get(&UserKey::new("u1")).await.expect("get");
        assert_eq!(fetched, Some(cart));
    }

    #[tokio::test]
    async fn test_carts_are_isolated_per_user() {
        let store = MemoryCartStore::new();
        store.put(&cart_with_item("u1")).await.expect("put");

        let other = store.get(&UserKey::new("u2")).await.expect("get");
        assert!(other.is_none());
    }

    #[tokio::test]
    async fn test_delete_missing_cart_is_noop() {
        let store = MemoryCartStore::new();
        store.delete(&UserKey::new("u1")).await.expect("delete");
    }

    #[tokio::test]
    async fn test_delete_removes_cart() {
        let store = MemoryCartStore::new();
        store.put(&cart_with_item("u1")).await.expect("put");
        store.delete(&UserKey::new("u1")).await.expect("delete");

        let fetched = store.get(&UserKey::new("u1")).await.expect("get");
        assert!(fetched.is_none());
    }
}
