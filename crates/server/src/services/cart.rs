//! Cart operations.
//!
//! # Missing-cart policy
//!
//! Carts are created lazily: a read or an add for an unknown user key
//! conjures an empty cart. Removing from a nonexistent cart is a no-op that
//! returns an empty cart without persisting anything. The policy is the
//! same in both store modes.
//!
//! # Concurrency
//!
//! Each operation is one read-modify-write cycle with no lock or version
//! check around it; concurrent mutations for the same user key can lose an
//! update (see `store` module docs).

use std::sync::Arc;

use orchard_core::{Cart, ProductId, UserKey};

use crate::catalog::ProductCatalog;
use crate::error::{AppError, Result};
use crate::store::{CartStore as _, SharedCartStore};

/// Cart read/mutate operations over the injected store.
#[derive(Clone)]
pub struct CartService {
    catalog: Arc<ProductCatalog>,
    store: SharedCartStore,
}

impl CartService {
    /// Create a service over a catalog and a cart store.
    #[must_use]
    pub const fn new(catalog: Arc<ProductCatalog>, store: SharedCartStore) -> Self {
        Self { catalog, store }
    }

    /// Fetch the cart for a user, creating and persisting an empty one if
    /// none exists yet.
    ///
    /// # Errors
    ///
    /// Fails only on store I/O errors.
    pub async fn get_cart(&self, user: &UserKey) -> Result<Cart> {
        if let Some(cart) = self.store.get(user).await? {
            return Ok(cart);
        }

        let cart = Cart::new(user.clone());
        self.store.put(&cart).await?;
        tracing::debug!(user = %user, "created empty cart");
        Ok(cart)
    }

    /// Add `qty` units of a product to the user's cart, merging into an
    /// existing line item for the same product if there is one.
    ///
    /// The caller has already validated `qty >= 1` at the request boundary.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::ProductNotFound`] if the product id does not
    /// resolve via the catalog; nothing is written in that case.
    pub async fn add_item(&self, user: &UserKey, product_id: ProductId, qty: u32) -> Result<Cart> {
        let product = self
            .catalog
            .get(product_id)
            .cloned()
            .ok_or(AppError::ProductNotFound(product_id))?;

        let mut cart = match self.store.get(user).await? {
            Some(cart) => cart,
            None => Cart::new(user.clone()),
        };

        cart.add_item(product, qty);
        self.store.put(&cart).await?;

        tracing::debug!(user = %user, product = %product_id, qty, "added item to cart");
        Ok(cart)
    }

    /// Remove the line item for a product id from the user's cart.
    ///
    /// Removing an id that is not in the cart, or removing from a user with
    /// no cart at all, is a no-op.
    ///
    /// # Errors
    ///
    /// Fails only on store I/O errors.
    pub async fn remove_item(&self, user: &UserKey, product_id: ProductId) -> Result<Cart> {
        let Some(mut cart) = self.store.get(user).await? else {
            return Ok(Cart::new(user.clone()));
        };

        cart.remove_item(product_id);
        self.store.put(&cart).await?;

        tracing::debug!(user = %user, product = %product_id, "removed item from cart");
        Ok(cart)
    }
}

#[cfg(test)]
mod tests {
    use crate::store::MemoryCartStore;

    use super::*;

    fn service() -> CartService {
        CartService::new(
            Arc::new(ProductCatalog::seeded()),
            Arc::new(MemoryCartStore::new()),
        )
    }

    #[tokio::test]
    async fn test_get_cart_lazily_creates() {
        let service = service();
        let cart = service.get_cart(&UserKey::new("u1")).await.expect("get");
        assert!(cart.is_empty());
        assert_eq!(cart.user, UserKey::new("u1"));
    }

    #[tokio::test]
    async fn test_add_item_merges_quantities() {
        let service = service();
        let user = UserKey::new("u1");

        service
            .add_item(&user, ProductId::new(1), 2)
            .await
            .expect("add");
        let cart = service
            .add_item(&user, ProductId::new(1), 3)
            .await
            .expect("add again");

        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items.first().map(|item| item.qty), Some(5));
    }

    #[tokio::test]
    async fn test_add_unknown_product_fails_without_writing() {
        let service = service();
        let user = UserKey::new("u1");

        let err = service
            .add_item(&user, ProductId::new(9999), 1)
            .await
            .expect_err("unknown product");
        assert!(matches!(err, AppError::ProductNotFound(_)));

        // No cart was created by the failed add
        let cart = service.get_cart(&user).await.expect("get");
        assert!(cart.is_empty());
    }

    #[tokio::test]
    async fn test_remove_item_absent_id_is_noop() {
        let service = service();
        let user = UserKey::new("u1");

        let before = service
            .add_item(&user, ProductId::new(1), 2)
            .await
            .expect("add");
        let after = service
            .remove_item(&user, ProductId::new(2))
            .await
            .expect("remove absent");
        assert_eq!(before.items, after.items);
    }

    #[tokio::test]
    async fn test_remove_item_from_nonexistent_cart() {
        let service = service();
        let cart = service
            .remove_item(&UserKey::new("ghost"), ProductId::new(1))
            .await
            .expect("remove");
        assert!(cart.is_empty());
    }

    #[tokio::test]
    async fn test_carts_are_independent_per_user() {
        let service = service();

        service
            .add_item(&UserKey::new("u1"), ProductId::new(1), 1)
            .await
            .expect("add");
        let other = service.get_cart(&UserKey::new("u2")).await.expect("get");
        assert!(other.is_empty());
    }
}
