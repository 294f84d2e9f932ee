//! Core types for Orchard.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod cart;
pub mod id;
pub mod money;
pub mod product;
pub mod receipt;
pub mod user;

pub use cart::{Cart, CartItem};
pub use id::*;
pub use money::{round_to_cents, tax_rate};
pub use product::Product;
pub use receipt::{Receipt, ReceiptError, ReceiptLine, ReceiptStatus};
pub use user::UserKey;
