use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a value to exactly two decimal places.
///
/// Midpoints round away from zero, matching conventional decimal rounding:
/// `1.075` becomes `1.08` and `-1.067` becomes `-1.07`. Because the
/// arithmetic is decimal throughout, the integer part survives untouched for
/// any representable magnitude and no binary representation artifacts can
/// creep in. The function is idempotent.
pub fn round_to_two_dp(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
