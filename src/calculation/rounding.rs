//! Rounding helpers shared across the engine.
//!
//! Deductible amounts round to 2 decimal places and percentages to 1,
//! both half away from zero.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a monetary amount to 2 decimal places, half away from zero.
///
/// The result always carries exactly two decimal places so serialized
/// amounts read as currency (e.g. "400.00", not "400").
///
/// # Example
///
/// ```
/// use deduction_engine::calculation::round_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rounded = round_currency(Decimal::from_str("180.006").unwrap());
/// assert_eq!(rounded.to_string(), "180.01");
/// ```
pub fn round_currency(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

/// Rounds a percentage to 1 decimal place, half away from zero.
pub fn round_percentage(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(1);
    rounded
}
