//! Two-decimal rounding for monetary figures.
//!
//! Values are nudged up by one binary-float epsilon before scaling to cents,
//! so products such as `1.005` that are stored slightly below the true
//! decimal still round up. Ties round toward positive infinity.

use rust_decimal::Decimal;

/// The bias added before rounding (2^-52).
pub const ROUNDING_EPSILON: f64 = f64::EPSILON;

/// Rounds to the nearest integer, ties toward positive infinity.
fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Rounds a value to two decimals, returning a float.
///
/// # Examples
///
/// ```
/// use paystub_engine::calculation::round2;
///
/// assert_eq!(round2(1.005), 1.01);
/// assert_eq!(round2(49.599999999999994), 49.6);
/// assert_eq!(round2(0.125), 0.13);
/// assert_eq!(round2(-2.345), -2.34);
/// ```
pub fn round2(value: f64) -> f64 {
    round_half_up((value + ROUNDING_EPSILON) * 100.0) / 100.0
}

/// Rounds a value to two decimals, returning a monetary amount.
///
/// Amounts beyond the range of [`Decimal`] saturate at `Decimal::MAX` or
/// `Decimal::MIN`; NaN becomes zero.
///
/// # Examples
///
/// ```
/// use paystub_engine::calculation::to_money;
///
/// assert_eq!(to_money(618.8).to_string(), "618.80");
/// assert_eq!(to_money(0.0).to_string(), "0.00");
/// assert_eq!(to_money(1e17).to_string(), "100000000000000000.00");
/// ```
pub fn to_money(value: f64) -> Decimal {
    let rounded = round2(value);
    if rounded == 0.0 || rounded.is_nan() {
        return Decimal::new(0, 2);
    }
    match Decimal::from_f64_retain(rounded) {
        Some(amount) => {
            let mut amount = amount.round_dp(2);
            amount.rescale(2);
            amount
        }
        None if rounded.is_sign_negative() => Decimal::MIN,
        None => Decimal::MAX,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up_ties_go_toward_positive_infinity() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.6), -3.0);
        assert_eq!(round_half_up(7.49), 7.0);
    }

    #[test]
    fn test_epsilon_corrects_representation_error() {
        // 1.005 is stored as 1.00499999999999989...
        assert_eq!(round2(1.005), 1.01);
        assert_eq!(to_money(1.005).to_string(), "1.01");
    }

    #[test]
    fn test_negative_values_round_toward_positive_infinity_on_ties() {
        assert_eq!(round2(-0.125), -0.12);
        assert_eq!(to_money(-10.0).to_string(), "-10.00");
    }

    #[test]
    fn test_exact_values_are_unchanged() {
        assert_eq!(round2(800.0), 800.0);
        assert_eq!(round2(49.6), 49.6);
        assert_eq!(round2(0.0), 0.0);
    }

    #[test]
    fn test_to_money_keeps_two_decimal_places() {
        assert_eq!(to_money(800.0).to_string(), "800.00");
        assert_eq!(to_money(11.6).to_string(), "11.60");
        assert_eq!(to_money(0.004).to_string(), "0.00");
        assert_eq!(to_money(-3.5).to_string(), "-3.50");
    }

    #[test]
    fn test_nan_rounds_to_zero() {
        assert_eq!(to_money(f64::NAN).to_string(), "0.00");
    }

    #[test]
    fn test_negative_zero_prints_unsigned() {
        assert_eq!(to_money(-0.001).to_string(), "0.00");
        assert_eq!(to_money(-0.0).to_string(), "0.00");
    }

    #[test]
    fn test_amounts_beyond_i64_cents_keep_their_value() {
        assert_eq!(to_money(1e17).to_string(), "100000000000000000.00");
        assert_eq!(to_money(-3e17).to_string(), "-300000000000000000.00");
        assert_eq!(to_money(9.3e16).to_string(), "93000000000000000.00");
    }

    #[test]
    fn test_amounts_beyond_decimal_range_saturate() {
        assert_eq!(to_money(1e300), Decimal::MAX);
        assert_eq!(to_money(-1e300), Decimal::MIN);
        assert_eq!(to_money(f64::INFINITY), Decimal::MAX);
    }
}
