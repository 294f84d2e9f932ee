//! Checkout receipts.
//!
//! A receipt is a derived, immutable snapshot of a cart at checkout time.
//! Line subtotals and aggregates are computed at full decimal precision and
//! rounded to cents only when written into the receipt, so the displayed
//! `total` always equals `round(subtotal + tax)` within a cent.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::types::cart::Cart;
use crate::types::money::{round_to_cents, tax_rate};

/// Errors from receipt generation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReceiptError {
    /// The cart has no items; there is nothing to price.
    #[error("Cart empty")]
    EmptyCart,

    /// A line item is malformed (zero quantity or negative unit price).
    #[error("Invalid line item: {0}")]
    InvalidLineItem(String),
}

/// Receipt lifecycle status.
///
/// Only `completed` receipts exist in scope; payment states are a non-goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReceiptStatus {
    #[default]
    Completed,
}

/// A priced line on a receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptLine {
    /// Product title at checkout time.
    pub title: String,
    /// Unit price at checkout time.
    pub unit_price: Decimal,
    /// Units purchased.
    pub qty: u32,
    /// `unit_price * qty`, rounded to cents.
    pub subtotal: Decimal,
}

/// An immutable priced summary of a completed checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    /// Unique receipt identifier (`receipt_<uuid>`).
    pub id: String,
    /// Creation timestamp (ISO-8601 on the wire).
    pub created_at: DateTime<Utc>,
    /// Priced line items.
    pub items: Vec<ReceiptLine>,
    /// Sum of line subtotals, rounded to cents.
    pub subtotal: Decimal,
    /// `subtotal * TAX_RATE`, rounded to cents.
    pub tax: Decimal,
    /// `subtotal + tax`, rounded to cents.
    pub total: Decimal,
    /// Always `completed` in scope.
    pub status: ReceiptStatus,
}

impl Receipt {
    /// Price a cart snapshot into a receipt.
    ///
    /// Pure computation; the cart is not consumed or modified. The caller
    /// (the checkout flow) is responsible for clearing the cart afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`ReceiptError::EmptyCart`] for a cart with no items and
    /// [`ReceiptError::InvalidLineItem`] if any line has a zero quantity or
    /// a negative unit price.
    pub fn from_cart(cart: &Cart) -> Result<Self, ReceiptError> {
        if cart.is_empty() {
            return Err(ReceiptError::EmptyCart);
        }

        let mut items = Vec::with_capacity(cart.items.len());
        let mut raw_subtotal = Decimal::ZERO;

        for item in &cart.items {
            if item.qty == 0 {
                return Err(ReceiptError::InvalidLineItem(format!(
                    "zero quantity for '{}'",
                    item.product.title
                )));
            }
            if item.product.price.is_sign_negative() {
                return Err(ReceiptError::InvalidLineItem(format!(
                    "negative price for '{}'",
                    item.product.title
                )));
            }

            // Full precision here; rounding happens per displayed amount only
            let line_subtotal = item.product.price * Decimal::from(item.qty);
            raw_subtotal += line_subtotal;

            items.push(ReceiptLine {
                title: item.product.title.clone(),
                unit_price: item.product.price,
                qty: item.qty,
                subtotal: round_to_cents(line_subtotal),
            });
        }

        let raw_tax = raw_subtotal * tax_rate();

        Ok(Self {
            id: format!("receipt_{}", Uuid::new_v4()),
            created_at: Utc::now(),
            items,
            subtotal: round_to_cents(raw_subtotal),
            tax: round_to_cents(raw_tax),
            total: round_to_cents(raw_subtotal + raw_tax),
            status: ReceiptStatus::Completed,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::types::id::ProductId;
    use crate::types::product::Product;
    use crate::types::user::UserKey;

    use super::*;

    fn product(id: i64, price: Decimal) -> Product {
        Product {
            id: ProductId::new(id),
            title: format!("Product {id}"),
            description: String::new(),
            price,
            image: String::new(),
            stock: 5,
            category: "test".to_owned(),
        }
    }

    #[test]
    fn test_empty_cart_is_rejected() {
        let cart = Cart::new(UserKey::new("u1"));
        assert_eq!(Receipt::from_cart(&cart), Err(ReceiptError::EmptyCart));
    }

    #[test]
    fn test_reference_arithmetic() {
        // (10.00 x 2) + (5.50 x 1) = 25.50; 8% tax = 2.04; total 27.54
        let mut cart = Cart::new(UserKey::new("u1"));
        cart.add_item(product(1, Decimal::new(1000, 2)), 2);
        cart.add_item(product(2, Decimal::new(550, 2)), 1);

        let receipt = Receipt::from_cart(&cart).expect("receipt");
        assert_eq!(receipt.subtotal, Decimal::new(2550, 2));
        assert_eq!(receipt.tax, Decimal::new(204, 2));
        assert_eq!(receipt.total, Decimal::new(2754, 2));
    }

    #[test]
    fn test_total_matches_rounded_sum() {
        // Awkward unit price so tax rounding actually matters
        let mut cart = Cart::new(UserKey::new("u1"));
        cart.add_item(product(1, Decimal::new(333, 2)), 3);

        let receipt = Receipt::from_cart(&cart).expect("receipt");
        let diff = (receipt.total - (receipt.subtotal + receipt.tax)).abs();
        assert!(diff <= Decimal::new(1, 2), "off by more than a cent: {diff}");
    }

    #[test]
    fn test_line_subtotals_are_rounded() {
        let mut cart = Cart::new(UserKey::new("u1"));
        cart.add_item(product(1, Decimal::new(3335, 3)), 3); // 3.335 * 3 = 10.005

        let receipt = Receipt::from_cart(&cart).expect("receipt");
        assert_eq!(
            receipt.items.first().map(|line| line.subtotal),
            Some(Decimal::new(1001, 2)) // half-up
        );
    }

    #[test]
    fn test_zero_quantity_line_is_invalid() {
        let mut cart = Cart::new(UserKey::new("u1"));
        cart.items.push(crate::types::cart::CartItem {
            product: product(1, Decimal::new(1000, 2)),
            qty: 0,
        });

        assert!(matches!(
            Receipt::from_cart(&cart),
            Err(ReceiptError::InvalidLineItem(_))
        ));
    }

    #[test]
    fn test_negative_price_line_is_invalid() {
        let mut cart = Cart::new(UserKey::new("u1"));
        cart.add_item(product(1, Decimal::new(-100, 2)), 1);

        assert!(matches!(
            Receipt::from_cart(&cart),
            Err(ReceiptError::InvalidLineItem(_))
        ));
    }

    #[test]
    fn test_receipt_metadata() {
        let mut cart = Cart::new(UserKey::new("u1"));
        cart.add_item(product(1, Decimal::new(1000, 2)), 1);

        let receipt = Receipt::from_cart(&cart).expect("receipt");
        assert!(receipt.id.starts_with("receipt_"));
        assert_eq!(receipt.status, ReceiptStatus::Completed);

        let json = serde_json::to_value(&receipt).expect("serialize");
        assert_eq!(json["status"], "completed");
        // chrono serializes DateTime<Utc> as ISO-8601/RFC 3339
        assert!(
            json["created_at"]
                .as_str()
                .is_some_and(|ts| ts.contains('T'))
        );
    }
}
