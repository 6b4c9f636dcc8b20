//! Permissive parsing of source cells.
//!
//! Every function here turns malformed input into `None` instead of an
//! error. Callers decide whether a `None` drops the row (years, dates, month
//! names, country codes) or is kept as a null value (indicator values and
//! anomalies).
//!
//! - **numeric**: numbers and integral years
//! - **datetime**: calendar dates of daily observations
//! - **calendar**: English month names
//! - **country**: ISO3 country code format

pub mod calendar;
pub mod country;
pub mod datetime;
pub mod numeric;

pub use calendar::{MONTH_NAMES, month_index};
pub use country::is_iso3_code;
pub use datetime::{parse_day, year_of_day};
pub use numeric::{parse_f64, parse_year};
