//! Statutory bracket tables for the Portuguese 2026 tax year.
//!
//! Tables are `const` data: both simulators are pure functions over these
//! read-only tables and their input record.

pub mod isv;
pub mod iuc;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Amounts below this floor (€) are not collected; the vehicle is reported
/// exempt. Applies to both simulators.
pub const EXEMPTION_FLOOR: Decimal = dec!(10);

/// Whether a computed amount falls under the collection floor. The floor is
/// exclusive: €9.99 is exempt, €10.00 is collected.
pub fn is_below_floor(amount: Decimal) -> bool {
    amount < EXEMPTION_FLOOR
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn floor_exempts_nine_ninety_nine() {
        assert!(is_below_floor(dec!(9.99)));
    }

    #[test]
    fn floor_collects_exactly_ten_euros() {
        assert!(!is_below_floor(dec!(10.00)));
    }

    #[test]
    fn floor_exempts_zero() {
        assert!(is_below_floor(dec!(0)));
    }
}
