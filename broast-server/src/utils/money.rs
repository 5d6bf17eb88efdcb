//! Money calculation utilities using rust_decimal for precision
//!
//! All monetary arithmetic is done with `Decimal` internally, then converted
//! to `f64` at the serialization boundary.

use rust_decimal::prelude::*;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Round a decimal to money precision (2 decimal places, half away from zero)
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Convert an f64 price into a Decimal
///
/// Non-finite inputs collapse to zero; prices are validated non-negative at
/// the catalog boundary.
pub fn dec(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or(Decimal::ZERO)
}

/// Convert a Decimal amount back to f64 for serialization
pub fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}

/// price × quantity at money precision
pub fn line_total(price: f64, quantity: u32) -> Decimal {
    round_money(dec(price) * Decimal::from(quantity))
}

/// Format an amount the way the storefront displays it: trailing zeros
/// stripped, so whole-rupee amounts render as integers ("540", "50.5")
pub fn format_amount(value: Decimal) -> String {
    round_money(value).normalize().to_string()
}
