//! Canonical row types produced by normalization and consumed by the merge.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::indicator::Indicator;

/// Composite join key shared by every annual table.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CountryYear {
    /// Three-letter uppercase ISO code.
    pub country_code: String,
    /// Country display name as published by the source.
    pub country_name: String,
    pub year: i32,
}

impl CountryYear {
    pub fn new(country_code: impl Into<String>, country_name: impl Into<String>, year: i32) -> Self {
        Self {
            country_code: country_code.into(),
            country_name: country_name.into(),
            year,
        }
    }

    /// Ordering used for the exported master table: `(country_code, year)`.
    ///
    /// Country name is deliberately not part of the order so that a stable
    /// sort keeps source order among rows that only differ by name.
    pub fn export_order(&self, other: &Self) -> Ordering {
        self.country_code
            .cmp(&other.country_code)
            .then(self.year.cmp(&other.year))
    }
}

/// One annual observation of a single indicator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorRow {
    pub key: CountryYear,
    pub value: Option<f64>,
}

/// Annual mean temperature anomaly for one country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureRow {
    pub key: CountryYear,
    pub temp_anomaly: Option<f64>,
}

/// One month of the global temperature-anomaly series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalMonthlyRow {
    /// Month name as published (e.g. "January").
    pub month: String,
    pub year: i32,
    /// Calendar position, 1..=12.
    pub month_index: u32,
    pub temp_anomaly: Option<f64>,
}

impl GlobalMonthlyRow {
    /// Chronological ordering key.
    #[must_use]
    pub fn chronological_key(&self) -> (i32, u32) {
        (self.year, self.month_index)
    }
}

/// A row of the merged master table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MasterRow {
    pub key: CountryYear,
    /// Values in [`Indicator::ALL`] order.
    pub values: [Option<f64>; 5],
    /// Only meaningful when the table carries a temperature column.
    pub temp_anomaly: Option<f64>,
}

impl MasterRow {
    pub fn empty(key: CountryYear) -> Self {
        Self {
            key,
            values: [None; 5],
            temp_anomaly: None,
        }
    }

    /// Value of a single indicator column.
    #[must_use]
    pub fn value(&self, indicator: Indicator) -> Option<f64> {
        self.values[indicator_slot(indicator)]
    }

    pub fn set_value(&mut self, indicator: Indicator, value: Option<f64>) {
        self.values[indicator_slot(indicator)] = value;
    }
}

fn indicator_slot(indicator: Indicator) -> usize {
    match indicator {
        Indicator::Co2 => 0,
        Indicator::Energy => 1,
        Indicator::Water => 2,
        Indicator::Sanitation => 3,
        Indicator::Gdp => 4,
    }
}
