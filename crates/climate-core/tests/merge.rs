//! Integration tests for the master table merge.

use std::collections::BTreeSet;

use climate_core::{MergeError, merge_tables};
use climate_model::{CountryYear, DuplicateKeyPolicy, Indicator, IndicatorRow, TemperatureRow};
use climate_transform::{IndicatorTable, TemperatureTable};
use proptest::prelude::*;

fn table(indicator: Indicator, rows: &[(&str, &str, i32, Option<f64>)]) -> IndicatorTable {
    IndicatorTable {
        indicator,
        source: format!("{}.csv", indicator.label()),
        value_column: "Value".to_string(),
        rows: rows
            .iter()
            .map(|(code, name, year, value)| IndicatorRow {
                key: CountryYear::new(*code, *name, *year),
                value: *value,
            })
            .collect(),
    }
}

fn empty_tables() -> Vec<IndicatorTable> {
    Indicator::ALL.into_iter().map(|i| table(i, &[])).collect()
}

fn temperature(rows: &[(&str, &str, i32, Option<f64>)]) -> TemperatureTable {
    TemperatureTable {
        rows: rows
            .iter()
            .map(|(code, name, year, anomaly)| TemperatureRow {
                key: CountryYear::new(*code, *name, *year),
                temp_anomaly: *anomaly,
            })
            .collect(),
    }
}

#[test]
fn co2_and_gdp_for_same_key_merge_into_one_row() {
    let mut tables = empty_tables();
    tables[0] = table(Indicator::Co2, &[("USA", "United States", 2015, Some(15.0))]);
    tables[4] = table(Indicator::Gdp, &[("USA", "United States", 2015, Some(55000.0))]);

    let master = merge_tables(&tables, None, DuplicateKeyPolicy::default()).unwrap();

    assert_eq!(master.len(), 1);
    let row = &master.rows[0];
    assert_eq!(row.key, CountryYear::new("USA", "United States", 2015));
    assert_eq!(row.value(Indicator::Co2), Some(15.0));
    assert_eq!(row.value(Indicator::Gdp), Some(55000.0));
    assert_eq!(row.value(Indicator::Energy), None);
    assert_eq!(row.value(Indicator::Water), None);
    assert_eq!(row.value(Indicator::Sanitation), None);
    assert!(!master.has_temperature);
}

#[test]
fn rows_are_sorted_by_code_then_year() {
    let mut tables = empty_tables();
    tables[1] = table(
        Indicator::Energy,
        &[
            ("ZZZ", "Zed", 2001, Some(1.0)),
            ("AAA", "Aye", 2003, Some(2.0)),
            ("AAA", "Aye", 2001, Some(3.0)),
        ],
    );
    tables[2] = table(Indicator::Water, &[("MMM", "Em", 2002, Some(4.0))]);

    let master = merge_tables(&tables, None, DuplicateKeyPolicy::Preserve).unwrap();

    let keys: Vec<(&str, i32)> = master
        .rows
        .iter()
        .map(|row| (row.key.country_code.as_str(), row.key.year))
        .collect();
    assert_eq!(keys, vec![("AAA", 2001), ("AAA", 2003), ("MMM", 2002), ("ZZZ", 2001)]);
    assert_eq!(master.country_count(), 3);
}

#[test]
fn keys_differing_by_name_stay_separate() {
    let mut tables = empty_tables();
    tables[0] = table(Indicator::Co2, &[("CIV", "Cote d'Ivoire", 2010, Some(0.4))]);
    tables[3] = table(Indicator::Sanitation, &[("CIV", "Ivory Coast", 2010, Some(30.0))]);

    let master = merge_tables(&tables, None, DuplicateKeyPolicy::Preserve).unwrap();

    assert_eq!(master.len(), 2);
    assert_eq!(master.country_count(), 1);
}

#[test]
fn temperature_is_left_joined() {
    let mut tables = empty_tables();
    tables[0] = table(
        Indicator::Co2,
        &[("TST", "Testland", 2010, Some(5.5)), ("TST", "Testland", 2011, Some(5.6))],
    );
    let temps = temperature(&[
        ("TST", "Testland", 2010, Some(2.0)),
        ("XYZ", "Elsewhere", 2010, Some(1.0)),
    ]);

    let master = merge_tables(&tables, Some(&temps), DuplicateKeyPolicy::Preserve).unwrap();

    assert!(master.has_temperature);
    assert_eq!(master.len(), 2);
    assert_eq!(master.rows[0].temp_anomaly, Some(2.0));
    assert_eq!(master.rows[1].temp_anomaly, None);
    assert!(master.rows.iter().all(|row| row.key.country_code == "TST"));
    assert_eq!(master.column_names().last(), Some(&"temp_anom"));
}

#[test]
fn preserve_keeps_duplicate_rows() {
    let mut tables = empty_tables();
    tables[0] = table(
        Indicator::Co2,
        &[("TST", "Testland", 2010, Some(1.0)), ("TST", "Testland", 2010, Some(2.0))],
    );
    tables[4] = table(Indicator::Gdp, &[("TST", "Testland", 2010, Some(9.0))]);

    let master = merge_tables(&tables, None, DuplicateKeyPolicy::Preserve).unwrap();

    let co2: Vec<Option<f64>> = master.rows.iter().map(|r| r.value(Indicator::Co2)).collect();
    assert_eq!(co2, vec![Some(1.0), Some(2.0)]);
    assert!(master.rows.iter().all(|r| r.value(Indicator::Gdp) == Some(9.0)));
}

#[test]
fn reject_fails_on_duplicate_key() {
    let mut tables = empty_tables();
    tables[2] = table(
        Indicator::Water,
        &[("TST", "Testland", 2010, Some(1.0)), ("TST", "Testland", 2010, None)],
    );

    let err = merge_tables(&tables, None, DuplicateKeyPolicy::Reject).unwrap_err();

    let MergeError::DuplicateKey {
        source_name,
        key,
        occurrences,
    } = err;
    assert_eq!(source_name, "water.csv");
    assert_eq!(key, CountryYear::new("TST", "Testland", 2010));
    assert_eq!(occurrences, 2);
}

#[test]
fn reject_accepts_unique_keys() {
    let mut tables = empty_tables();
    tables[0] = table(Indicator::Co2, &[("TST", "Testland", 2010, Some(1.0))]);
    tables[1] = table(Indicator::Energy, &[("TST", "Testland", 2010, Some(1.0))]);

    let master = merge_tables(&tables, None, DuplicateKeyPolicy::Reject).unwrap();

    assert_eq!(master.len(), 1);
}

fn key_strategy() -> impl Strategy<Value = (String, i32)> {
    ("[A-D]{3}", 2000i32..2004)
}

fn unique_rows() -> impl Strategy<Value = Vec<(String, i32)>> {
    prop::collection::btree_set(key_strategy(), 0..12).prop_map(|set| set.into_iter().collect())
}

proptest! {
    #[test]
    fn merged_keys_are_the_union_of_inputs(
        sources in prop::collection::vec(unique_rows(), 5),
        temps in unique_rows(),
    ) {
        let tables: Vec<IndicatorTable> = Indicator::ALL
            .into_iter()
            .zip(&sources)
            .map(|(indicator, keys)| IndicatorTable {
                indicator,
                source: indicator.label().to_string(),
                value_column: "Value".to_string(),
                rows: keys
                    .iter()
                    .map(|(code, year)| IndicatorRow {
                        key: CountryYear::new(code.as_str(), code.as_str(), *year),
                        value: Some(f64::from(*year)),
                    })
                    .collect(),
            })
            .collect();
        let temperature = TemperatureTable {
            rows: temps
                .iter()
                .map(|(code, year)| TemperatureRow {
                    key: CountryYear::new(code.as_str(), code.as_str(), *year),
                    temp_anomaly: Some(1.0),
                })
                .collect(),
        };

        let master = merge_tables(&tables, Some(&temperature), DuplicateKeyPolicy::Reject).unwrap();

        let expected: BTreeSet<(String, i32)> = sources.iter().flatten().cloned().collect();
        let merged: BTreeSet<(String, i32)> = master
            .rows
            .iter()
            .map(|row| (row.key.country_code.clone(), row.key.year))
            .collect();
        prop_assert_eq!(master.len(), expected.len());
        prop_assert_eq!(merged, expected);

        let temp_keys: BTreeSet<&(String, i32)> = temps.iter().collect();
        for row in &master.rows {
            let key = (row.key.country_code.clone(), row.key.year);
            prop_assert_eq!(row.temp_anomaly.is_some(), temp_keys.contains(&key));
            for (indicator, keys) in Indicator::ALL.into_iter().zip(&sources) {
                prop_assert_eq!(row.value(indicator).is_some(), keys.contains(&key));
            }
        }
        for pair in master.rows.windows(2) {
            prop_assert!(pair[0].key.export_order(&pair[1].key).is_le());
        }
    }
}
