//! Common utility functions for declaration calculations.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a monetary amount to exactly two decimal places.
///
/// Ties are rounded away from zero, so 0.005 becomes 0.01 and -0.005
/// becomes -0.01.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use taxcheck_core::calculations::common::round_to_cents;
///
/// assert_eq!(round_to_cents(dec!(117000.004)), dec!(117000.00));
/// assert_eq!(round_to_cents(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_to_cents(dec!(-123.455)), dec!(-123.46));
/// ```
pub fn round_to_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
