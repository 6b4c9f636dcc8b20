//! Composition of the normalized tables into the country-year master table.
//!
//! The five indicator tables are chained with full outer joins on
//! `(country_code, country_name, year)`, so a key missing from one source
//! still carries the values of every other source. Annual temperature is then
//! attached with a left join and the result is stably sorted by
//! `(country_code, year)`.

use std::collections::{BTreeSet, HashMap};

use climate_model::{CountryYear, DuplicateKeyPolicy, Indicator, MasterRow};
use climate_transform::{IndicatorTable, TemperatureTable};

use crate::error::{MergeError, Result};

pub const KEY_COLUMNS: [&str; 3] = ["iso3", "country", "year"];
pub const TEMPERATURE_COLUMN: &str = "temp_anom";

/// The merged master table.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MasterTable {
    pub rows: Vec<MasterRow>,
    /// Whether a temperature table was attached.
    pub has_temperature: bool,
}

impl MasterTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of distinct country codes.
    pub fn country_count(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.key.country_code.as_str())
            .collect::<BTreeSet<_>>()
            .len()
    }

    /// Exported column names, temperature last when present.
    pub fn column_names(&self) -> Vec<&'static str> {
        let mut columns: Vec<&'static str> = KEY_COLUMNS.to_vec();
        columns.extend(Indicator::ALL.iter().map(|indicator| indicator.column_name()));
        if self.has_temperature {
            columns.push(TEMPERATURE_COLUMN);
        }
        columns
    }
}

/// Full outer join of the accumulated rows with one indicator table.
///
/// Matching keys pair every left row with every right row of that key.
/// Left rows without a match keep a null for the indicator; right rows
/// without a match become new rows with only that indicator set.
pub fn outer_join(left: Vec<MasterRow>, right: &IndicatorTable) -> Vec<MasterRow> {
    let index = index_keys(right.rows.iter().map(|row| &row.key));
    let mut matched = vec![false; right.rows.len()];
    let mut joined = Vec::with_capacity(left.len().max(right.rows.len()));

    for row in left {
        match index.get(&row.key) {
            Some(positions) => {
                for &pos in positions {
                    matched[pos] = true;
                    let mut pair = row.clone();
                    pair.set_value(right.indicator, right.rows[pos].value);
                    joined.push(pair);
                }
            }
            None => joined.push(row),
        }
    }

    for (row, _) in right
        .rows
        .iter()
        .zip(&matched)
        .filter(|(_, matched)| !**matched)
    {
        let mut fresh = MasterRow::empty(row.key.clone());
        fresh.set_value(right.indicator, row.value);
        joined.push(fresh);
    }
    joined
}

/// Left join of the master rows with annual temperature.
///
/// Temperature never introduces a row; unmatched master rows get a null
/// anomaly.
pub fn left_join_temperature(left: Vec<MasterRow>, temperature: &TemperatureTable) -> Vec<MasterRow> {
    let index = index_keys(temperature.rows.iter().map(|row| &row.key));
    let mut joined = Vec::with_capacity(left.len());

    for mut row in left {
        match index.get(&row.key) {
            Some(positions) => {
                for &pos in positions {
                    let mut pair = row.clone();
                    pair.temp_anomaly = temperature.rows[pos].temp_anomaly;
                    joined.push(pair);
                }
            }
            None => {
                row.temp_anomaly = None;
                joined.push(row);
            }
        }
    }
    joined
}

/// Builds the master table from the normalized indicator tables and the
/// optional annual temperature table.
pub fn merge_tables(
    indicators: &[IndicatorTable],
    temperature: Option<&TemperatureTable>,
    policy: DuplicateKeyPolicy,
) -> Result<MasterTable> {
    for table in indicators {
        check_duplicates(&table.source, table.keys(), policy)?;
    }
    if let Some(temperature) = temperature {
        check_duplicates(
            "temperature",
            temperature.rows.iter().map(|row| &row.key),
            policy,
        )?;
    }

    let mut rows = indicators.iter().fold(Vec::new(), outer_join);
    tracing::debug!(rows = rows.len(), sources = indicators.len(), "outer joined indicators");

    if let Some(temperature) = temperature {
        rows = left_join_temperature(rows, temperature);
        let with_anomaly = rows.iter().filter(|row| row.temp_anomaly.is_some()).count();
        tracing::debug!(rows = rows.len(), with_anomaly, "attached temperature");
    }

    // sort_by is stable
    rows.sort_by(|a, b| a.key.export_order(&b.key));

    Ok(MasterTable {
        rows,
        has_temperature: temperature.is_some(),
    })
}

/// Keys that occur more than once, with their occurrence counts.
pub fn duplicate_keys<'a>(
    keys: impl IntoIterator<Item = &'a CountryYear>,
) -> Vec<(&'a CountryYear, usize)> {
    let mut counts: HashMap<&CountryYear, usize> = HashMap::new();
    let mut order = Vec::new();
    for key in keys {
        let count = counts.entry(key).or_insert(0);
        if *count == 0 {
            order.push(key);
        }
        *count += 1;
    }
    order
        .into_iter()
        .filter_map(|key| {
            let count = counts[key];
            (count > 1).then_some((key, count))
        })
        .collect()
}

fn check_duplicates<'a>(
    source_name: &str,
    keys: impl IntoIterator<Item = &'a CountryYear>,
    policy: DuplicateKeyPolicy,
) -> Result<()> {
    let duplicates = duplicate_keys(keys);
    let Some(&(first, occurrences)) = duplicates.first() else {
        return Ok(());
    };
    match policy {
        DuplicateKeyPolicy::Reject => Err(MergeError::DuplicateKey {
            source_name: source_name.to_string(),
            key: first.clone(),
            occurrences,
        }),
        DuplicateKeyPolicy::Preserve => {
            tracing::warn!(
                source = source_name,
                duplicates = duplicates.len(),
                "duplicate keys will multiply joined rows"
            );
            Ok(())
        }
    }
}

fn index_keys<'a>(keys: impl Iterator<Item = &'a CountryYear>) -> HashMap<&'a CountryYear, Vec<usize>> {
    let mut index: HashMap<&CountryYear, Vec<usize>> = HashMap::new();
    for (pos, key) in keys.enumerate() {
        index.entry(key).or_default().push(pos);
    }
    index
}
