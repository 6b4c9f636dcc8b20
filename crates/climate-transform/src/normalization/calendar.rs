//! Month name lookup.

/// English month names in calendar order.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Calendar index (1..=12) of an English month name.
///
/// Matching is exact and case-sensitive.
pub fn month_index(name: &str) -> Option<u32> {
    MONTH_NAMES
        .iter()
        .position(|month| *month == name)
        .and_then(|idx| u32::try_from(idx + 1).ok())
}
