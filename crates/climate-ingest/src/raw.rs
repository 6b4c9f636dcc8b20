//! Untyped tabular data as read from a CSV or zip source.

use polars::prelude::{Column, DataFrame, DataType, IntoColumn, NamedFrom, Series};

use crate::error::{IngestError, Result};

/// A parsed source table whose columns have not been validated yet.
///
/// Every column is held as text; typing happens during normalization.
#[derive(Debug, Clone)]
pub struct RawTable {
    source: String,
    data: DataFrame,
}

impl RawTable {
    pub fn new(source: impl Into<String>, data: DataFrame) -> Self {
        Self {
            source: source.into(),
            data,
        }
    }

    /// Build a table from in-memory text columns.
    ///
    /// `None` cells become nulls. All columns must have the same length.
    pub fn from_text_columns(
        source: impl Into<String>,
        columns: Vec<(&str, Vec<Option<&str>>)>,
    ) -> Result<Self> {
        let cols: Vec<Column> = columns
            .into_iter()
            .map(|(name, values)| Series::new(name.into(), values).into_column())
            .collect();
        let data = DataFrame::new(cols)?;
        Ok(Self::new(source, data))
    }

    /// Label of the file or archive entry this table came from.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn data(&self) -> &DataFrame {
        &self.data
    }

    /// Number of data rows.
    pub fn height(&self) -> usize {
        self.data.height()
    }

    /// Column names in source order.
    pub fn column_names(&self) -> Vec<String> {
        self.data
            .get_column_names()
            .into_iter()
            .map(ToString::to_string)
            .collect()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.data
            .get_column_names()
            .into_iter()
            .any(|column| column.as_str() == name)
    }

    /// Values of a column as text, nulls preserved.
    pub fn text_column(&self, name: &str) -> Result<Vec<Option<String>>> {
        let column = self
            .data
            .column(name)
            .map_err(|_| IngestError::ColumnNotFound {
                column: name.to_string(),
                source_name: self.source.clone(),
            })?;
        let text = column.cast(&DataType::String)?;
        let values = text
            .str()?
            .into_iter()
            .map(|value| value.map(str::to_string))
            .collect();
        Ok(values)
    }
}
