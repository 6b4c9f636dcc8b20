//! Normalized tables handed to the merge.

use climate_model::{CountryYear, Indicator, IndicatorRow, TemperatureRow};

/// A normalized indicator source.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorTable {
    pub indicator: Indicator,
    /// Label of the file the rows came from.
    pub source: String,
    /// Source column the values were read from.
    pub value_column: String,
    pub rows: Vec<IndicatorRow>,
}

impl IndicatorTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &CountryYear> {
        self.rows.iter().map(|row| &row.key)
    }
}

/// Annual country temperature anomalies, one row per key.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TemperatureTable {
    pub rows: Vec<TemperatureRow>,
}

impl TemperatureTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
