//! Money arithmetic
//!
//! Amounts are stored as `f64` but never added or divided as floats;
//! all arithmetic goes through `rust_decimal` and results round to two
//! decimal places.

use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};

pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

pub fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}

/// Round to 2 decimal places, banker's rounding off
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp(2)
}

/// quantity * unit_price, rounded
pub fn line_total(unit_price: f64, quantity: i64) -> f64 {
    to_f64(round2(to_decimal(unit_price) * Decimal::from(quantity)))
}

/// Sum a list of amounts, rounded
pub fn sum(amounts: impl IntoIterator<Item = f64>) -> f64 {
    let total: Decimal = amounts.into_iter().map(to_decimal).sum();
    to_f64(round2(total))
}

/// total / quantity (per-unit price), rounded; zero quantity yields zero
pub fn unit_price(total: f64, quantity: i64) -> f64 {
    if quantity == 0 {
        return 0.0;
    }
    to_f64(round2(to_decimal(total) / Decimal::from(quantity)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_total_avoids_float_drift() {
        // 0.1 * 3 in f64 is 0.30000000000000004
        assert_eq!(line_total(0.1, 3), 0.3);
    }

    #[test]
    fn sum_rounds_to_cents() {
        assert_eq!(sum([10.005, 4.995]), 15.0);
        assert_eq!(sum([]), 0.0);
    }

    #[test]
    fn unit_price_handles_zero_quantity() {
        assert_eq!(unit_price(25.0, 5), 5.0);
        assert_eq!(unit_price(25.0, 0), 0.0);
    }
}
