//! Canonicalization of annual OWID-like indicator files.
//!
//! Input files carry `Entity`, `Year`, usually `Code`, and one value column
//! whose header differs per publication. The normalizer renames these to the
//! canonical `(country_code, country_name, year, value)` shape and applies
//! the year window and ISO3 filters.

use climate_ingest::RawTable;
use climate_model::{CountryYear, IndicatorRow, IndicatorSource, YearWindow};

use crate::columns::{CODE, ENTITY, YEAR, optional_text_column, require_columns};
use crate::error::{Result, TransformError};
use crate::normalization::{is_iso3_code, parse_f64, parse_year};
use crate::table::IndicatorTable;

/// Picks the column holding the indicator value.
///
/// A declared column must be present. Without a declaration the last column
/// in source order that is not `Entity`, `Code` or `Year` is used.
pub fn select_value_column(columns: &[String], declared: Option<&str>) -> Option<String> {
    match declared {
        Some(name) => columns.iter().find(|column| *column == name).cloned(),
        None => columns
            .iter()
            .rev()
            .find(|column| !matches!(column.as_str(), ENTITY | CODE | YEAR))
            .cloned(),
    }
}

/// Normalizes one indicator source.
///
/// Rows with a year outside `window`, an unparseable year, or a code that is
/// not three uppercase letters are dropped. Non-numeric values are kept as
/// nulls.
pub fn normalize_indicator(
    raw: &RawTable,
    source: &IndicatorSource,
    window: YearWindow,
) -> Result<IndicatorTable> {
    require_columns(raw, &[ENTITY, YEAR])?;

    let columns = raw.column_names();
    let declared = source.value_column.as_deref();
    let value_column = select_value_column(&columns, declared).ok_or_else(|| {
        let reason = match declared {
            Some(name) => format!("declared value column '{name}' not found in {columns:?}"),
            None => format!("cannot find value column in {columns:?}"),
        };
        TransformError::schema(raw.source(), reason)
    })?;

    let names = raw.text_column(ENTITY)?;
    let codes = optional_text_column(raw, CODE)?;
    let years = raw.text_column(YEAR)?;
    let values = raw.text_column(&value_column)?;

    let mut rows = Vec::with_capacity(raw.height());
    let mut dropped = 0usize;
    for (((name, code), year), value) in names.into_iter().zip(codes).zip(years).zip(values) {
        let Some(year) = year
            .as_deref()
            .and_then(parse_year)
            .filter(|year| window.contains(*year))
        else {
            dropped += 1;
            continue;
        };
        let Some(code) = code.filter(|code| is_iso3_code(code)) else {
            dropped += 1;
            continue;
        };
        rows.push(IndicatorRow {
            key: CountryYear::new(code, name.unwrap_or_default(), year),
            value: value.as_deref().and_then(parse_f64),
        });
    }

    tracing::debug!(
        source = %raw.source(),
        indicator = %source.indicator,
        value_column = %value_column,
        rows = rows.len(),
        dropped,
        "normalized indicator"
    );

    Ok(IndicatorTable {
        indicator: source.indicator,
        source: raw.source().to_string(),
        value_column,
        rows,
    })
}
