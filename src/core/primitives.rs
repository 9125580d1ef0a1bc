use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds `value` to `precision` decimal places, midpoint away from zero.
///
/// Operates on the exact binary value, so `6.25` rounds to `6.3` and
/// `1.005` (stored as `1.00499..`) rounds to `1.0`. Non-finite input is
/// returned unchanged.
#[must_use]
pub fn round_to_precision(value: f64, precision: u32) -> f64 {
    let Some(decimal) = Decimal::from_f64_retain(value) else {
        return value;
    };
    // Going through the decimal string keeps the result the nearest f64.
    decimal
        .round_dp_with_strategy(precision, RoundingStrategy::MidpointAwayFromZero)
        .to_string()
        .parse()
        .unwrap_or(value)
}

/// Fixed-point rendering with exactly `precision` fractional digits.
#[must_use]
pub fn to_fixed(value: f64, precision: u32) -> String {
    let digits = precision as usize;
    match Decimal::from_f64_retain(value) {
        Some(decimal) => {
            let rounded =
                decimal.round_dp_with_strategy(precision, RoundingStrategy::MidpointAwayFromZero);
            if rounded.is_zero() {
                return format!("{:.*}", digits, Decimal::ZERO);
            }
            format!("{:.*}", digits, rounded)
        }
        None => format!("{:.*}", digits, value),
    }
}

/// Shortest decimal rendering of a number, without a trailing `.0`.
#[must_use]
pub fn to_plain(value: f64) -> String {
    if value == 0.0 {
        return "0".to_owned();
    }
    format!("{value}")
}

/// Ratio guarded against zero, negative or absent denominators.
///
/// Returns `numerator / denominator * scale` when the denominator is present
/// and strictly positive, `0.0` otherwise. A non-finite quotient also
/// collapses to `0.0`.
#[must_use]
pub fn guarded_ratio(numerator: f64, denominator: Option<f64>, scale: f64) -> f64 {
    match denominator {
        Some(den) if den > 0.0 => finite_or_zero(numerator / den * scale),
        _ => 0.0,
    }
}

#[must_use]
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}
