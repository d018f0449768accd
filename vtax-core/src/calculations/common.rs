//! Shared helpers for the tax simulators: financial rounding, floor-at-zero
//! clamping and bracket lookup.

use rust_decimal::Decimal;
use tracing::warn;

use crate::models::UpperBounded;

/// Rounds a monetary value to two decimal places using half-up rounding.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use vtax_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Clamps a computed component at zero. Small displacements or emissions can
/// make `value × rate − deduction` negative; the statute floors it at zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use vtax_core::calculations::common::floor_at_zero;
///
/// assert_eq!(floor_at_zero(dec!(-120.50)), dec!(0));
/// assert_eq!(floor_at_zero(dec!(120.50)), dec!(120.50));
/// ```
pub fn floor_at_zero(value: Decimal) -> Decimal {
    if value > Decimal::ZERO {
        value
    } else {
        Decimal::ZERO
    }
}

/// Resolves a value to its bracket: the first bracket whose upper bound is
/// greater than or equal to the value. A value exactly at an upper bound
/// belongs to that bracket, not the next one.
///
/// Tables are ordered ascending with an unbounded last bracket, so every
/// non-negative value matches. If nothing matches (negative value against a
/// malformed table), the last bracket is returned — the clamp-to-last policy
/// the simulators have always had — and a warning is emitted so the fallback
/// is visible at the boundary.
///
/// # Panics
///
/// Panics on an empty table. All statutory tables are non-empty consts.
pub fn lookup<'a, B: UpperBounded>(table: &'a [B], value: Decimal) -> &'a B {
    match table.iter().find(|bracket| match bracket.upper_bound() {
        Some(max) => value <= max,
        None => true,
    }) {
        Some(bracket) => bracket,
        None => {
            warn!(%value, "value outside bracket table, clamping to last bracket");
            table.last().expect("bracket tables are non-empty")
        }
    }
}
