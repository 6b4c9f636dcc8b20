//! Normalization of heterogeneous climate sources into canonical tables.
//!
//! - **indicator**: annual OWID-like files to `(country_code, country_name, year, value)`
//! - **temperature**: daily country anomalies aggregated to annual means
//! - **global_monthly**: global month-keyed anomalies in chronological order
//! - **normalization**: the permissive parsing policy shared by all three

mod columns;
pub mod error;
pub mod global_monthly;
pub mod indicator;
pub mod normalization;
pub mod table;
pub mod temperature;

pub use error::{Result, TransformError};
pub use global_monthly::normalize_global_monthly;
pub use indicator::{normalize_indicator, select_value_column};
pub use table::{IndicatorTable, TemperatureTable};
pub use temperature::annualize_temperature;
