//! Common rounding helpers shared by the calculator and presentation code.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded away from zero. Totals are stored
/// unrounded; this is applied when an amount is shown.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use rent_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(4300)), dec!(4300.00));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

/// Divides `amount` by `divisor` and rounds the quotient up to the next
/// whole unit (towards positive infinity).
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use rent_core::calculations::common::ceil_div;
///
/// assert_eq!(ceil_div(dec!(601), dec!(6)), dec!(101));
/// assert_eq!(ceil_div(dec!(600), dec!(6)), dec!(100));
/// ```
pub fn ceil_div(
    amount: Decimal,
    divisor: Decimal,
) -> Decimal {
    (amount / divisor).ceil()
}
