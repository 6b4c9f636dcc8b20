//! CSV export of the pipeline artifacts.
//!
//! - [`write_master_csv`]: `iso3,country,year,<indicators>[,temp_anom]`
//! - [`write_global_monthly_csv`]: `month,year,temp_anom,month_idx`
//!
//! Null values are written as empty fields.

pub mod error;
pub mod format;
pub mod writer;

pub use error::{OutputError, Result};
pub use format::format_value;
pub use writer::{
    GLOBAL_MONTHLY_COLUMNS, ensure_parent_dir, write_global_monthly_csv, write_master_csv,
};
