//! Checkout flow.
//!
//! Two terminal outcomes: rejected (empty cart) or completed (receipt
//! produced, cart cleared). The cart is cleared strictly after the receipt
//! has been generated, so a generation failure leaves the cart untouched.
//! Ordering, not transactionality, is the guarantee; there is no rollback
//! because there is nothing to roll back.

use orchard_core::{Receipt, UserKey};

use crate::error::{AppError, Result};
use crate::store::{CartStore as _, SharedCartStore};

/// Orchestrates fetch -> validate -> price -> clear as one logical operation.
#[derive(Clone)]
pub struct CheckoutService {
    store: SharedCartStore,
}

impl CheckoutService {
    /// Create a service over a cart store.
    #[must_use]
    pub const fn new(store: SharedCartStore) -> Self {
        Self { store }
    }

    /// Check out the user's cart.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::EmptyCart`] when the user has no cart or an empty
    /// one. Receipt generation failures propagate without clearing the cart.
    pub async fn checkout(&self, user: &UserKey) -> Result<Receipt> {
        let Some(mut cart) = self.store.get(user).await? else {
            return Err(AppError::EmptyCart);
        };
        if cart.is_empty() {
            return Err(AppError::EmptyCart);
        }

        // Cart must stay untouched unless this succeeds
        let receipt = Receipt::from_cart(&cart)?;

        cart.clear();
        self.store.put(&cart).await?;

        tracing::info!(
            user = %user,
            receipt_id = %receipt.id,
            total = %receipt.total,
            "checkout completed"
        );
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rust_decimal::Decimal;

    use orchard_core::{Cart, CartItem, Product, ProductId};

    use crate::store::{CartStore, MemoryCartStore, SharedCartStore};

    use super::*;

    fn product(id: i64, cents: i64) -> Product {
        Product {
            id: ProductId::new(id),
            title: format!("Product {id}"),
            description: String::new(),
            price: Decimal::new(cents, 2),
            image: String::new(),
            stock: 5,
            category: "test".to_owned(),
        }
    }

    async fn store_with_cart(cart: &Cart) -> SharedCartStore {
        let store: SharedCartStore = Arc::new(MemoryCartStore::new());
        store.put(cart).await.expect("seed cart");
        store
    }

    #[tokio::test]
    async fn test_checkout_without_cart_is_rejected() {
        let store: SharedCartStore = Arc::new(MemoryCartStore::new());
        let service = CheckoutService::new(store);

        let err = service
            .checkout(&UserKey::new("u1"))
            .await
            .expect_err("no cart");
        assert!(matches!(err, AppError::EmptyCart));
    }

    #[tokio::test]
    async fn test_checkout_empty_cart_is_rejected() {
        let user = UserKey::new("u1");
        let store = store_with_cart(&Cart::new(user.clone())).await;
        let service = CheckoutService::new(store);

        let err = service.checkout(&user).await.expect_err("empty cart");
        assert!(matches!(err, AppError::EmptyCart));
    }

    #[tokio::test]
    async fn test_checkout_prices_cart_and_clears_it() {
        let user = UserKey::new("u1");
        let mut cart = Cart::new(user.clone());
        cart.add_item(product(1, 1000), 2);
        cart.add_item(product(2, 550), 1);

        let store = store_with_cart(&cart).await;
        let service = CheckoutService::new(Arc::clone(&store));

        let receipt = service.checkout(&user).await.expect("checkout");
        assert_eq!(receipt.subtotal, Decimal::new(2550, 2));
        assert_eq!(receipt.tax, Decimal::new(204, 2));
        assert_eq!(receipt.total, Decimal::new(2754, 2));

        let after = store.get(&user).await.expect("get").expect("cart row");
        assert!(after.is_empty());
    }

    #[tokio::test]
    async fn test_generation_failure_leaves_cart_unchanged() {
        let user = UserKey::new("u1");
        let mut cart = Cart::new(user.clone());
        // Malformed line item planted directly in the store
        cart.items.push(CartItem {
            product: product(1, 1000),
            qty: 0,
        });

        let store = store_with_cart(&cart).await;
        let service = CheckoutService::new(Arc::clone(&store));

        let err = service.checkout(&user).await.expect_err("invalid line");
        assert!(matches!(err, AppError::Internal(_)));

        let after = store.get(&user).await.expect("get").expect("cart row");
        assert_eq!(after, cart);
    }
}
