use std::path::PathBuf;

use climate_model::Indicator;

/// Result of loading an optional source.
#[derive(Debug, Clone, PartialEq)]
pub enum SourceOutcome<T> {
    Loaded(T),
    /// The archive does not exist in the data directory.
    Absent,
    /// The archive exists but could not be read or normalized.
    Skipped { reason: String },
}

impl<T> SourceOutcome<T> {
    pub fn as_ref(&self) -> SourceOutcome<&T> {
        match self {
            Self::Loaded(value) => SourceOutcome::Loaded(value),
            Self::Absent => SourceOutcome::Absent,
            Self::Skipped { reason } => SourceOutcome::Skipped {
                reason: reason.clone(),
            },
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> SourceOutcome<U> {
        match self {
            Self::Loaded(value) => SourceOutcome::Loaded(f(value)),
            Self::Absent => SourceOutcome::Absent,
            Self::Skipped { reason } => SourceOutcome::Skipped { reason },
        }
    }

    pub fn loaded(self) -> Option<T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }
}

/// One normalized indicator source.
#[derive(Debug, Clone)]
pub struct IndicatorSummary {
    pub indicator: Indicator,
    pub path: PathBuf,
    pub value_column: String,
    pub rows: usize,
}

#[derive(Debug, Clone)]
pub struct RunResult {
    pub merged_path: PathBuf,
    pub rows: usize,
    pub countries: usize,
    pub columns: Vec<&'static str>,
    pub sources: Vec<IndicatorSummary>,
    /// Annual temperature rows attached to the master table.
    pub temperature: SourceOutcome<usize>,
    /// Rows written to the global monthly file.
    pub global_monthly: SourceOutcome<usize>,
    pub global_monthly_path: PathBuf,
    pub duration_ms: u128,
}

/// Where a source would be read from.
#[derive(Debug, Clone)]
pub struct SourceListing {
    pub label: &'static str,
    pub candidates: Vec<String>,
    pub required: bool,
    pub resolved: Option<PathBuf>,
}
