//! Tests for the CSV writers.

use std::fs;

use climate_core::MasterTable;
use climate_model::{CountryYear, GlobalMonthlyRow, Indicator, MasterRow};
use climate_output::{write_global_monthly_csv, write_master_csv};
use tempfile::tempdir;

fn master_row(code: &str, name: &str, year: i32) -> MasterRow {
    MasterRow::empty(CountryYear::new(code, name, year))
}

#[test]
fn writes_master_table_without_temperature() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("core_merged.csv");
    let mut row = master_row("USA", "United States", 2015);
    row.set_value(Indicator::Co2, Some(15.0));
    row.set_value(Indicator::Gdp, Some(55000.5));
    let table = MasterTable {
        rows: vec![row],
        has_temperature: false,
    };

    let written = write_master_csv(&path, &table).expect("write");

    assert_eq!(written, 1);
    let content = fs::read_to_string(&path).expect("read");
    assert_eq!(
        content,
        "iso3,country,year,co2_pc,energy_pc,water_basic_pct,sanitation_pct,gdp_pc\n\
         USA,United States,2015,15.0,,,,55000.5\n"
    );
}

#[test]
fn writes_temperature_column_when_attached() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("core_merged.csv");
    let mut first = master_row("TST", "Testland", 2010);
    first.set_value(Indicator::Water, Some(99.5));
    first.temp_anomaly = Some(2.0);
    let second = master_row("TST", "Testland", 2011);
    let table = MasterTable {
        rows: vec![first, second],
        has_temperature: true,
    };

    write_master_csv(&path, &table).expect("write");

    let content = fs::read_to_string(&path).expect("read");
    let lines: Vec<&str> = content.lines().collect();
    assert!(lines[0].ends_with(",gdp_pc,temp_anom"));
    assert_eq!(lines[1], "TST,Testland,2010,,,99.5,,,2.0");
    assert_eq!(lines[2], "TST,Testland,2011,,,,,,");
}

#[test]
fn quotes_names_with_commas() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("core_merged.csv");
    let table = MasterTable {
        rows: vec![master_row("KOR", "Korea, Republic of", 2020)],
        has_temperature: false,
    };

    write_master_csv(&path, &table).expect("write");

    let content = fs::read_to_string(&path).expect("read");
    assert!(content.contains("KOR,\"Korea, Republic of\",2020"));
}

#[test]
fn writes_global_monthly_series() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("global_temp_monthly.csv");
    let rows = vec![
        GlobalMonthlyRow {
            month: "January".to_string(),
            year: 2001,
            month_index: 1,
            temp_anomaly: Some(0.25),
        },
        GlobalMonthlyRow {
            month: "February".to_string(),
            year: 2001,
            month_index: 2,
            temp_anomaly: None,
        },
    ];

    let written = write_global_monthly_csv(&path, &rows).expect("write");

    assert_eq!(written, 2);
    let content = fs::read_to_string(&path).expect("read");
    assert_eq!(
        content,
        "month,year,temp_anom,month_idx\nJanuary,2001,0.25,1\nFebruary,2001,,2\n"
    );
}

#[test]
fn creates_missing_parent_directories() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("nested").join("out").join("global.csv");

    write_global_monthly_csv(&path, &[]).expect("write");

    let content = fs::read_to_string(&path).expect("read");
    assert_eq!(content, "month,year,temp_anom,month_idx\n");
}
