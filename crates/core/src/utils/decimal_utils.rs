use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::constants::DISPLAY_DECIMAL_PRECISION;

/// Share of `part` in `whole` as a display percentage.
///
/// This is the single guarded percentage used across the aggregators:
/// a non-positive `whole` yields 0, never NaN or a division panic.
pub fn percentage_of(part: Decimal, whole: Decimal) -> Decimal {
    if whole > Decimal::ZERO {
        (part / whole * dec!(100)).round_dp(DISPLAY_DECIMAL_PRECISION)
    } else {
        Decimal::ZERO
    }
}

/// `numerator / denominator`, 0 when the denominator is not positive.
pub fn guarded_ratio(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator > Decimal::ZERO {
        numerator / denominator
    } else {
        Decimal::ZERO
    }
}

/// Clamps a signed total to zero for display.
///
/// Internal sums stay signed; tables never show a negative bucket total.
pub fn clamp_display(value: Decimal) -> Decimal {
    value.max(Decimal::ZERO)
}
