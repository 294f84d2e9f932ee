//! Orchard Core - Shared types library.
//!
//! This crate provides the domain types used across all Orchard components:
//! - `server` - JSON REST API (catalog, cart, checkout)
//! - `cli` - Command-line tools for migrations and catalog inspection
//!
//! # Architecture
//!
//! The core crate contains only types and pure computation - no I/O, no
//! database access, no HTTP. This keeps it lightweight and allows it to be
//! used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Ids, money helpers, products, carts, and receipts

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
