//! Catalog product entries.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::id::ProductId;

/// A catalog entry.
///
/// Products are seeded at startup and never mutated by cart or checkout
/// operations. The `stock` field is informational only; nothing in scope
/// decrements it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Longer description shown on the product page.
    pub description: String,
    /// Unit price in the currency's standard unit. Non-negative.
    pub price: Decimal,
    /// Image URL.
    pub image: String,
    /// Units on hand (informational).
    pub stock: i64,
    /// Category label used for grouping in the product grid.
    pub category: String,
}
