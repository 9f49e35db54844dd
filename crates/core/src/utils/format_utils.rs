use num_traits::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

/// Converts a float to a decimal rounded half away from zero.
///
/// Returns `None` when the value is outside the range `Decimal` can hold.
fn to_rounded_decimal(value: f64, decimal_places: u32) -> Option<Decimal> {
    Decimal::from_f64(value)
        .map(|d| d.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointAwayFromZero))
}

/// Rounds a float to the given number of decimal places.
///
/// Goes through `Decimal` so that values like `2.675` round the way a donor
/// would expect rather than the way their binary representation dictates.
pub fn round_to(value: f64, decimal_places: u32) -> f64 {
    match to_rounded_decimal(value, decimal_places).and_then(|d| d.to_f64()) {
        Some(rounded) => rounded,
        None => {
            let factor = 10f64.powi(decimal_places as i32);
            (value * factor).round() / factor
        }
    }
}

/// Rounds a non-negative float to the nearest whole count.
pub fn round_count(value: f64) -> u64 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    round_to(value, 0) as u64
}

/// Formats a float with exactly `decimal_places` digits after the point.
pub fn format_fixed(value: f64, decimal_places: u32) -> String {
    match to_rounded_decimal(value, decimal_places) {
        Some(d) => format!("{:.*}", decimal_places as usize, d),
        None => format!("{:.*}", decimal_places as usize, value),
    }
}

/// Formats a float with at most `decimal_places` digits, dropping trailing zeros.
///
/// `1.0` becomes `"1"`, `2.50` becomes `"2.5"`.
pub fn format_trimmed(value: f64, decimal_places: u32) -> String {
    match to_rounded_decimal(value, decimal_places) {
        Some(d) => d.normalize().to_string(),
        None => {
            let fixed = format!("{:.*}", decimal_places as usize, value);
            if fixed.contains('.') {
                fixed
                    .trim_end_matches('0')
                    .trim_end_matches('.')
                    .to_string()
            } else {
                fixed
            }
        }
    }
}

/// Picks the singular or plural noun for a count.
pub fn pluralize<'a>(count: u64, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 {
        singular
    } else {
        plural
    }
}
