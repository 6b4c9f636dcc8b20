//! Numeric coercion.

/// Parses a string as f64, returning None for invalid, empty or NaN input.
pub fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| !v.is_nan())
}

/// Parses a year, accepting integral decimals such as `2010.0`.
///
/// Fractional or out-of-range values yield None.
pub fn parse_year(value: &str) -> Option<i32> {
    let number = parse_f64(value)?;
    if number.fract() != 0.0 || number < f64::from(i32::MIN) || number > f64::from(i32::MAX) {
        return None;
    }
    Some(number as i32)
}
