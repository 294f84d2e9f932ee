//! Per-user shopping carts.
//!
//! A cart is an ordered list of product/quantity pairs owned by a single
//! user key. Two invariants hold at all times:
//!
//! - no two items reference the same product id (adds merge quantities)
//! - every item quantity is >= 1 (enforced at the request boundary)
//!
//! Item order is insertion order; it is preserved for display but carries
//! no semantic weight.

use serde::{Deserialize, Serialize};

use crate::types::id::ProductId;
use crate::types::product::Product;
use crate::types::user::UserKey;

/// A product reference paired with a quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// The resolved catalog product.
    pub product: Product,
    /// Units of the product in the cart. Always >= 1.
    pub qty: u32,
}

/// A user's cart.
///
/// Wire shape: `{ "user": <key>, "items": [{ "product": ..., "qty": n }] }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    /// Owning user key.
    pub user: UserKey,
    /// Line items in insertion order.
    pub items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart for a user.
    #[must_use]
    pub const fn new(user: UserKey) -> Self {
        Self {
            user,
            items: Vec::new(),
        }
    }

    /// Whether the cart has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total units across all line items.
    #[must_use]
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.qty)).sum()
    }

    /// Add `qty` units of a product.
    ///
    /// If a line item for the same product id already exists, its quantity
    /// is increased (merge, not replace). Otherwise a new line item is
    /// appended.
    pub fn add_item(&mut self, product: Product, qty: u32) {
        if let Some(item) = self
            .items
            .iter_mut()
            .find(|item| item.product.id == product.id)
        {
            item.qty = item.qty.saturating_add(qty);
        } else {
            self.items.push(CartItem { product, qty });
        }
    }

    /// Remove the line item for a product id, if present.
    ///
    /// Removing an id that is not in the cart is a no-op; the item
    /// sequence is left untouched.
    pub fn remove_item(&mut self, product_id: ProductId) {
        self.items.retain(|item| item.product.id != product_id);
    }

    /// Empty the cart, keeping the cart itself (and its owner) alive.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}
