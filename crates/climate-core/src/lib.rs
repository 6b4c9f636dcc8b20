//! Merge engine for the country-year master table.
//!
//! [`merge_tables`] chains outer joins over the normalized indicator tables,
//! attaches annual temperature with a left join and sorts the result for
//! export. The merge is pure; writing is done by `climate-output`.

pub mod error;
pub mod merge;

pub use error::{MergeError, Result};
pub use merge::{
    KEY_COLUMNS, MasterTable, TEMPERATURE_COLUMN, duplicate_keys, left_join_temperature,
    merge_tables, outer_join,
};
