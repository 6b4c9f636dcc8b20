//! Configuration threaded explicitly through every pipeline stage.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::indicator::Indicator;

pub const DEFAULT_START_YEAR: i32 = 2000;
pub const DEFAULT_END_YEAR: i32 = 2023;

/// Default data directory, relative to the working directory.
pub const DEFAULT_DATA_DIR: &str = "public/data";
pub const MERGED_FILE_NAME: &str = "core_merged.csv";
pub const GLOBAL_MONTHLY_FILE_NAME: &str = "global_temp_monthly.csv";

pub const COUNTRY_TEMPERATURE_ARCHIVE: &str = "monthly-temperature-anomalies.zip";
pub const COUNTRY_TEMPERATURE_ENTRY: &str = "monthly-temperature-anomalies.csv";
pub const GLOBAL_TEMPERATURE_ARCHIVE: &str = "global-temperature-anomalies-by-month.zip";
pub const GLOBAL_TEMPERATURE_ENTRY: &str = "global-temperature-anomalies-by-month.csv";

/// Inclusive range of years kept by every normalizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearWindow {
    start: i32,
    end: i32,
}

impl YearWindow {
    pub fn new(start: i32, end: i32) -> Result<Self> {
        if start > end {
            return Err(ModelError::InvalidYearWindow { start, end });
        }
        Ok(Self { start, end })
    }

    #[must_use]
    pub const fn start(&self) -> i32 {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> i32 {
        self.end
    }

    #[must_use]
    pub fn contains(&self, year: i32) -> bool {
        (self.start..=self.end).contains(&year)
    }
}

impl Default for YearWindow {
    fn default() -> Self {
        Self {
            start: DEFAULT_START_YEAR,
            end: DEFAULT_END_YEAR,
        }
    }
}

/// How the merge treats a `(country_code, country_name, year)` key that occurs
/// more than once within a single input table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateKeyPolicy {
    /// Keep duplicates; each matching pair of rows produces one output row.
    #[default]
    Preserve,
    /// Fail the merge on the first duplicated key.
    Reject,
}

/// Where an indicator is read from and which column carries its value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorSource {
    pub indicator: Indicator,
    /// File names tried in order inside the data directory.
    pub candidates: Vec<String>,
    /// Declared value column. `None` falls back to the last non-key column.
    pub value_column: Option<String>,
}

impl IndicatorSource {
    pub fn defaults(indicator: Indicator) -> Self {
        Self {
            indicator,
            candidates: indicator
                .default_candidates()
                .iter()
                .map(|name| (*name).to_string())
                .collect(),
            value_column: None,
        }
    }
}

/// A CSV file stored inside a zip archive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchiveSource {
    /// Archive file name inside the data directory.
    pub archive: String,
    /// Entry name inside the archive.
    pub entry: String,
}

impl ArchiveSource {
    pub fn new(archive: impl Into<String>, entry: impl Into<String>) -> Self {
        Self {
            archive: archive.into(),
            entry: entry.into(),
        }
    }
}

/// The two optional temperature archives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemperatureSources {
    pub country_daily: ArchiveSource,
    pub global_monthly: ArchiveSource,
}

impl Default for TemperatureSources {
    fn default() -> Self {
        Self {
            country_daily: ArchiveSource::new(
                COUNTRY_TEMPERATURE_ARCHIVE,
                COUNTRY_TEMPERATURE_ENTRY,
            ),
            global_monthly: ArchiveSource::new(
                GLOBAL_TEMPERATURE_ARCHIVE,
                GLOBAL_TEMPERATURE_ENTRY,
            ),
        }
    }
}

/// Destination files for the two artifacts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputPaths {
    pub merged: PathBuf,
    pub global_monthly: PathBuf,
}

impl OutputPaths {
    /// Default file names placed inside `data_dir`.
    pub fn in_dir(data_dir: &Path) -> Self {
        Self {
            merged: data_dir.join(MERGED_FILE_NAME),
            global_monthly: data_dir.join(GLOBAL_MONTHLY_FILE_NAME),
        }
    }
}

/// Complete configuration of one pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineConfig {
    pub data_dir: PathBuf,
    pub year_window: YearWindow,
    pub output: OutputPaths,
    /// One entry per indicator, in [`Indicator::ALL`] order.
    pub sources: Vec<IndicatorSource>,
    pub temperature: TemperatureSources,
    pub duplicate_keys: DuplicateKeyPolicy,
}

impl PipelineConfig {
    /// Defaults rooted at `data_dir`.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        Self {
            output: OutputPaths::in_dir(&data_dir),
            data_dir,
            year_window: YearWindow::default(),
            sources: Indicator::ALL
                .into_iter()
                .map(IndicatorSource::defaults)
                .collect(),
            temperature: TemperatureSources::default(),
            duplicate_keys: DuplicateKeyPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_year_window(mut self, year_window: YearWindow) -> Self {
        self.year_window = year_window;
        self
    }

    #[must_use]
    pub fn with_duplicate_keys(mut self, policy: DuplicateKeyPolicy) -> Self {
        self.duplicate_keys = policy;
        self
    }

    pub fn source(&self, indicator: Indicator) -> Option<&IndicatorSource> {
        self.sources
            .iter()
            .find(|source| source.indicator == indicator)
    }

    /// Apply overrides read from a config file.
    pub fn apply(mut self, overrides: ConfigOverrides) -> Result<Self> {
        if overrides.start_year.is_some() || overrides.end_year.is_some() {
            self.year_window = YearWindow::new(
                overrides.start_year.unwrap_or(self.year_window.start()),
                overrides.end_year.unwrap_or(self.year_window.end()),
            )?;
        }
        if let Some(path) = overrides.merged_output {
            self.output.merged = self.resolve(path);
        }
        if let Some(path) = overrides.global_monthly_output {
            self.output.global_monthly = self.resolve(path);
        }
        if let Some(policy) = overrides.duplicate_keys {
            self.duplicate_keys = policy;
        }
        for source_override in overrides.sources {
            let Some(source) = self
                .sources
                .iter_mut()
                .find(|source| source.indicator == source_override.indicator)
            else {
                continue;
            };
            if let Some(candidates) = source_override.candidates {
                source.candidates = candidates;
            }
            if source_override.value_column.is_some() {
                source.value_column = source_override.value_column;
            }
        }
        Ok(self)
    }

    /// Relative paths from config files are taken relative to the data directory.
    fn resolve(&self, path: PathBuf) -> PathBuf {
        if path.is_absolute() {
            path
        } else {
            self.data_dir.join(path)
        }
    }
}

/// Optional settings read from a JSON config file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigOverrides {
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
    pub merged_output: Option<PathBuf>,
    pub global_monthly_output: Option<PathBuf>,
    pub duplicate_keys: Option<DuplicateKeyPolicy>,
    pub sources: Vec<SourceOverride>,
}

/// Per-indicator override of candidate names and declared value column.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceOverride {
    pub indicator: Indicator,
    #[serde(default)]
    pub candidates: Option<Vec<String>>,
    #[serde(default)]
    pub value_column: Option<String>,
}
