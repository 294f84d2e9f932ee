//! Money arithmetic helpers using decimal arithmetic.
//!
//! All prices are carried as [`rust_decimal::Decimal`] in the currency's
//! standard unit (dollars, not cents). Intermediate sums keep full precision;
//! rounding to cents happens only when an amount is written into a receipt.

use rust_decimal::{Decimal, RoundingStrategy};

/// Sales tax rate applied at checkout (8%).
///
/// A fixed constant; per-region tax tables are out of scope.
#[must_use]
pub fn tax_rate() -> Decimal {
    Decimal::new(8, 2)
}

/// Round an amount to 2 decimal places using half-up rounding.
#[must_use]
pub fn round_to_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
