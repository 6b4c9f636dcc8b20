//! Cell formatting for exported values.

/// Formats an optional float for CSV output.
///
/// Nulls become empty fields. Whole numbers keep one decimal (`5.0`), other
/// values use the shortest representation that round-trips.
pub fn format_value(value: Option<f64>) -> String {
    match value {
        None => String::new(),
        Some(v) if v.is_finite() && v.fract() == 0.0 => format!("{v:.1}"),
        Some(v) => v.to_string(),
    }
}
