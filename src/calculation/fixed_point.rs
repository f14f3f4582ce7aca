//! Fixed-point boundary conversions.
//!
//! All formula arithmetic runs in scaled-integer cents so that additive and
//! multiplicative chains never accumulate floating-point drift. Decimal text
//! exists only at the boundary: inputs are scaled on the way in, results are
//! rendered on the way out.

use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// A monetary amount as decimal value x 100, stored as an integer.
pub type Cents = i64;

/// Converts a decimal string to scaled-integer cents.
///
/// The value is first rounded to exactly two fractional digits
/// (half-away-from-zero, so "12.345" rounds to "12.35"), then scaled by 100.
/// Malformed, blank, and out-of-range input all degrade to 0; this function
/// never errors, so dirty input still produces a best-effort answer.
///
/// # Examples
///
/// ```
/// use compensation_engine::calculation::decimal_to_cents;
///
/// assert_eq!(decimal_to_cents("12.345"), 1235);
/// assert_eq!(decimal_to_cents("1000.00"), 100_000);
/// assert_eq!(decimal_to_cents("-0.05"), -5);
/// assert_eq!(decimal_to_cents("not a number"), 0);
/// assert_eq!(decimal_to_cents(""), 0);
/// ```
pub fn decimal_to_cents(text: &str) -> Cents {
    let Ok(value) = Decimal::from_str(text.trim()) else {
        return 0;
    };

    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    (rounded * Decimal::ONE_HUNDRED).to_i64().unwrap_or(0)
}

/// Renders a cents value as a decimal string with two fractional digits.
///
/// # Examples
///
/// ```
/// use compensation_engine::calculation::cents_to_decimal;
///
/// assert_eq!(cents_to_decimal(1235), "12.35");
/// assert_eq!(cents_to_decimal(0), "0.00");
/// assert_eq!(cents_to_decimal(-5), "-0.05");
/// assert_eq!(cents_to_decimal(48_000), "480.00");
/// ```
pub fn cents_to_decimal(cents: Cents) -> String {
    Decimal::new(cents, 2).to_string()
}
