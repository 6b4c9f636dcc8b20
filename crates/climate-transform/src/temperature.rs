//! Annual aggregation of daily country temperature anomalies.

use std::collections::BTreeMap;

use climate_ingest::RawTable;
use climate_model::{CountryYear, TemperatureRow, YearWindow};

use crate::columns::{CODE, DAY, ENTITY, TEMPERATURE_ANOMALY, require_columns};
use crate::error::Result;
use crate::normalization::{is_iso3_code, parse_f64, year_of_day};
use crate::table::TemperatureTable;

/// Running mean over the non-null observations of one key.
#[derive(Debug, Default, Clone, Copy)]
struct MeanAccumulator {
    sum: f64,
    count: usize,
}

impl MeanAccumulator {
    fn push(&mut self, value: Option<f64>) {
        if let Some(value) = value {
            self.sum += value;
            self.count += 1;
        }
    }

    /// None when no observation of the key carried a value.
    fn mean(self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.sum / self.count as f64)
        }
    }
}

/// Aggregates a daily series to one mean anomaly per
/// `(country_code, country_name, year)`.
///
/// Null anomalies are excluded from the mean; a key whose anomalies are all
/// null yields a null mean. Rows with an unparseable day or a non-ISO3 code
/// are dropped. Output is ordered by key.
pub fn annualize_temperature(raw: &RawTable, window: YearWindow) -> Result<TemperatureTable> {
    require_columns(raw, &[ENTITY, CODE, DAY, TEMPERATURE_ANOMALY])?;

    let names = raw.text_column(ENTITY)?;
    let codes = raw.text_column(CODE)?;
    let days = raw.text_column(DAY)?;
    let anomalies = raw.text_column(TEMPERATURE_ANOMALY)?;

    let mut groups: BTreeMap<CountryYear, MeanAccumulator> = BTreeMap::new();
    let mut dropped = 0usize;
    for (((name, code), day), anomaly) in names.into_iter().zip(codes).zip(days).zip(anomalies) {
        let Some(year) = day
            .as_deref()
            .and_then(year_of_day)
            .filter(|year| window.contains(*year))
        else {
            dropped += 1;
            continue;
        };
        let Some(code) = code.filter(|code| is_iso3_code(code)) else {
            dropped += 1;
            continue;
        };
        groups
            .entry(CountryYear::new(code, name.unwrap_or_default(), year))
            .or_default()
            .push(anomaly.as_deref().and_then(parse_f64));
    }

    let rows: Vec<TemperatureRow> = groups
        .into_iter()
        .map(|(key, acc)| TemperatureRow {
            key,
            temp_anomaly: acc.mean(),
        })
        .collect();

    tracing::debug!(
        source = %raw.source(),
        rows = rows.len(),
        dropped,
        "annualized temperature anomalies"
    );
    Ok(TemperatureTable { rows })
}
