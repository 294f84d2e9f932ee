//! Business logic services.
//!
//! Services sit between the route handlers and the cart store: handlers
//! validate requests into typed commands, services apply the cart and
//! checkout semantics against whichever store backend is configured.

pub mod cart;
pub mod checkout;

pub use cart::CartService;
pub use checkout::CheckoutService;
