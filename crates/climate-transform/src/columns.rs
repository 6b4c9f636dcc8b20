//! Column presence checks shared by the normalizers.

use climate_ingest::RawTable;

use crate::error::{Result, TransformError};

pub const ENTITY: &str = "Entity";
pub const CODE: &str = "Code";
pub const YEAR: &str = "Year";
pub const DAY: &str = "Day";
pub const TEMPERATURE_ANOMALY: &str = "Temperature anomaly";

/// Fails with a schema error naming the missing and the actual columns.
pub fn require_columns(raw: &RawTable, required: &[&str]) -> Result<()> {
    let missing: Vec<&str> = required
        .iter()
        .copied()
        .filter(|name| !raw.has_column(name))
        .collect();
    if missing.is_empty() {
        return Ok(());
    }
    Err(TransformError::schema(
        raw.source(),
        format!(
            "missing column(s) {missing:?}; found {:?}",
            raw.column_names()
        ),
    ))
}

/// Text values of an optional column; an absent column reads as all-null.
pub fn optional_text_column(raw: &RawTable, name: &str) -> Result<Vec<Option<String>>> {
    if raw.has_column(name) {
        Ok(raw.text_column(name)?)
    } else {
        Ok(vec![None; raw.height()])
    }
}
