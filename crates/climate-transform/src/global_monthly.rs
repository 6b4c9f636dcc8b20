//! Chronological normalization of the global monthly anomaly series.

use climate_ingest::RawTable;
use climate_model::{GlobalMonthlyRow, YearWindow};

use crate::columns::{ENTITY, TEMPERATURE_ANOMALY, YEAR, require_columns};
use crate::error::Result;
use crate::normalization::{month_index, parse_f64, parse_year};

/// Normalizes a series whose `Entity` column holds English month names.
///
/// Rows outside the year window or with an unrecognized month name are
/// dropped. The result is sorted by `(year, month_index)`.
pub fn normalize_global_monthly(raw: &RawTable, window: YearWindow) -> Result<Vec<GlobalMonthlyRow>> {
    require_columns(raw, &[ENTITY, YEAR, TEMPERATURE_ANOMALY])?;

    let months = raw.text_column(ENTITY)?;
    let years = raw.text_column(YEAR)?;
    let anomalies = raw.text_column(TEMPERATURE_ANOMALY)?;

    let mut rows = Vec::with_capacity(raw.height());
    let mut dropped = 0usize;
    for ((month, year), anomaly) in months.into_iter().zip(years).zip(anomalies) {
        let Some(year) = year
            .as_deref()
            .and_then(parse_year)
            .filter(|year| window.contains(*year))
        else {
            dropped += 1;
            continue;
        };
        let Some((month, month_index)) =
            month.and_then(|name| month_index(&name).map(|idx| (name, idx)))
        else {
            dropped += 1;
            continue;
        };
        rows.push(GlobalMonthlyRow {
            month,
            year,
            month_index,
            temp_anomaly: anomaly.as_deref().and_then(parse_f64),
        });
    }
    rows.sort_by_key(GlobalMonthlyRow::chronological_key);

    tracing::debug!(
        source = %raw.source(),
        rows = rows.len(),
        dropped,
        "normalized global monthly series"
    );
    Ok(rows)
}
