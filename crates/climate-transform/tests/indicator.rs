//! Tests for indicator schema normalization.

use climate_ingest::RawTable;
use climate_model::{CountryYear, Indicator, IndicatorRow, IndicatorSource, YearWindow};
use climate_transform::{TransformError, normalize_indicator};

fn raw(columns: Vec<(&str, Vec<Option<&str>>)>) -> RawTable {
    RawTable::from_text_columns("test.csv", columns).expect("build raw table")
}

fn co2() -> IndicatorSource {
    IndicatorSource::defaults(Indicator::Co2)
}

#[test]
fn normalizes_canonical_row() {
    let table = raw(vec![
        ("Entity", vec![Some("Testland")]),
        ("Code", vec![Some("TST")]),
        ("Year", vec![Some("2010")]),
        ("Annual CO2 emissions (per capita)", vec![Some("5.5")]),
    ]);

    let normalized = normalize_indicator(&table, &co2(), YearWindow::default()).unwrap();

    assert_eq!(normalized.indicator, Indicator::Co2);
    assert_eq!(normalized.value_column, "Annual CO2 emissions (per capita)");
    assert_eq!(
        normalized.rows,
        vec![IndicatorRow {
            key: CountryYear::new("TST", "Testland", 2010),
            value: Some(5.5),
        }]
    );
}

#[test]
fn drops_bad_codes_and_years_outside_window() {
    let table = raw(vec![
        (
            "Entity",
            vec![
                Some("Testland"),
                Some("Short"),
                Some("Old"),
                Some("World"),
                Some("Nowhere"),
                Some("Late"),
            ],
        ),
        (
            "Code",
            vec![
                Some("TST"),
                Some("T1"),
                Some("OLD"),
                Some("OWID_WRL"),
                None,
                Some("LAT"),
            ],
        ),
        (
            "Year",
            vec![
                Some("2010"),
                Some("2010"),
                Some("1999"),
                Some("2010"),
                Some("2010"),
                Some("2024"),
            ],
        ),
        (
            "Value",
            vec![
                Some("1"),
                Some("2"),
                Some("3"),
                Some("4"),
                Some("5"),
                Some("6"),
            ],
        ),
    ]);

    let normalized = normalize_indicator(&table, &co2(), YearWindow::default()).unwrap();

    assert_eq!(normalized.len(), 1);
    assert_eq!(normalized.rows[0].key.country_code, "TST");
}

#[test]
fn window_bounds_are_inclusive() {
    let table = raw(vec![
        ("Entity", vec![Some("A"), Some("A"), Some("A")]),
        ("Code", vec![Some("AAA"), Some("AAA"), Some("AAA")]),
        ("Year", vec![Some("2004"), Some("2005"), Some("2006")]),
        ("Value", vec![Some("1"), Some("2"), Some("3")]),
    ]);
    let window = YearWindow::new(2004, 2005).unwrap();

    let normalized = normalize_indicator(&table, &co2(), window).unwrap();

    let years: Vec<i32> = normalized.rows.iter().map(|row| row.key.year).collect();
    assert_eq!(years, vec![2004, 2005]);
}

#[test]
fn non_numeric_year_is_dropped_without_error() {
    let table = raw(vec![
        ("Entity", vec![Some("A"), Some("B")]),
        ("Code", vec![Some("AAA"), Some("BBB")]),
        ("Year", vec![Some("circa 2010"), None]),
        ("Value", vec![Some("1"), Some("2")]),
    ]);

    let normalized = normalize_indicator(&table, &co2(), YearWindow::default()).unwrap();

    assert!(normalized.is_empty());
}

#[test]
fn non_numeric_value_becomes_null() {
    let table = raw(vec![
        ("Entity", vec![Some("A"), Some("B")]),
        ("Code", vec![Some("AAA"), Some("BBB")]),
        ("Year", vec![Some("2010"), Some("2010")]),
        ("Value", vec![Some("n/a"), None]),
    ]);

    let normalized = normalize_indicator(&table, &co2(), YearWindow::default()).unwrap();

    assert_eq!(normalized.len(), 2);
    assert!(normalized.rows.iter().all(|row| row.value.is_none()));
}

#[test]
fn missing_code_column_drops_every_row() {
    let table = raw(vec![
        ("Entity", vec![Some("World")]),
        ("Year", vec![Some("2010")]),
        ("Value", vec![Some("1")]),
    ]);

    let normalized = normalize_indicator(&table, &co2(), YearWindow::default()).unwrap();

    assert_eq!(normalized.value_column, "Value");
    assert!(normalized.is_empty());
}

#[test]
fn missing_entity_or_year_is_schema_error() {
    let no_year = raw(vec![
        ("Entity", vec![Some("A")]),
        ("Code", vec![Some("AAA")]),
        ("Value", vec![Some("1")]),
    ]);
    let no_entity = raw(vec![
        ("Code", vec![Some("AAA")]),
        ("Year", vec![Some("2010")]),
        ("Value", vec![Some("1")]),
    ]);

    for table in [no_year, no_entity] {
        let err = normalize_indicator(&table, &co2(), YearWindow::default()).unwrap_err();
        assert!(err.is_schema(), "unexpected error: {err}");
    }
}

#[test]
fn no_value_column_is_schema_error() {
    let table = raw(vec![
        ("Entity", vec![Some("A")]),
        ("Code", vec![Some("AAA")]),
        ("Year", vec![Some("2010")]),
    ]);

    let err = normalize_indicator(&table, &co2(), YearWindow::default()).unwrap_err();

    assert!(matches!(err, TransformError::Schema { ref reason, .. } if reason.contains("value column")));
}

#[test]
fn declared_value_column_is_used() {
    let table = raw(vec![
        ("Entity", vec![Some("A")]),
        ("Code", vec![Some("AAA")]),
        ("Year", vec![Some("2010")]),
        ("GDP per capita", vec![Some("12000")]),
        ("Annotations", vec![Some("estimate")]),
    ]);
    let mut source = IndicatorSource::defaults(Indicator::Gdp);
    source.value_column = Some("GDP per capita".to_string());

    let normalized = normalize_indicator(&table, &source, YearWindow::default()).unwrap();

    assert_eq!(normalized.value_column, "GDP per capita");
    assert_eq!(normalized.rows[0].value, Some(12000.0));
}

#[test]
fn declared_value_column_must_exist() {
    let table = raw(vec![
        ("Entity", vec![Some("A")]),
        ("Code", vec![Some("AAA")]),
        ("Year", vec![Some("2010")]),
        ("Value", vec![Some("1")]),
    ]);
    let mut source = co2();
    source.value_column = Some("CO2".to_string());

    let err = normalize_indicator(&table, &source, YearWindow::default()).unwrap_err();

    assert!(err.is_schema());
}

#[test]
fn renormalizing_canonical_output_is_idempotent() {
    let table = raw(vec![
        ("Entity", vec![Some("A"), Some("B"), Some("C"), Some("D")]),
        ("Code", vec![Some("AAA"), Some("BBB"), Some("x"), Some("DDD")]),
        ("Year", vec![Some("2001"), Some("2002"), Some("2003"), Some("1980")]),
        ("Value", vec![Some("0.1"), Some("oops"), Some("3"), Some("4")]),
    ]);
    let first = normalize_indicator(&table, &co2(), YearWindow::default()).unwrap();

    let codes: Vec<String> = first.rows.iter().map(|r| r.key.country_code.clone()).collect();
    let names: Vec<String> = first.rows.iter().map(|r| r.key.country_name.clone()).collect();
    let years: Vec<String> = first.rows.iter().map(|r| r.key.year.to_string()).collect();
    let values: Vec<Option<String>> = first
        .rows
        .iter()
        .map(|r| r.value.map(|v| v.to_string()))
        .collect();
    let canonical = raw(vec![
        ("Entity", names.iter().map(|v| Some(v.as_str())).collect()),
        ("Code", codes.iter().map(|v| Some(v.as_str())).collect()),
        ("Year", years.iter().map(|v| Some(v.as_str())).collect()),
        ("co2_pc", values.iter().map(|v| v.as_deref()).collect()),
    ]);
    let second = normalize_indicator(&canonical, &co2(), YearWindow::default()).unwrap();

    assert_eq!(first.rows, second.rows);
    assert_eq!(second.len(), 2);
}
