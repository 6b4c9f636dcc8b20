//! Assembly of the run configuration: defaults, then the optional JSON
//! config file, then command-line flags.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use climate_model::{ConfigOverrides, DuplicateKeyPolicy, PipelineConfig, YearWindow};

/// Settings given directly on the command line.
#[derive(Debug, Clone, Default)]
pub struct RunOverrides {
    pub config_file: Option<PathBuf>,
    pub merged_output: Option<PathBuf>,
    pub global_monthly_output: Option<PathBuf>,
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
    pub reject_duplicate_keys: bool,
}

/// Reads a JSON config file.
pub fn load_overrides(path: &Path) -> Result<ConfigOverrides> {
    let text =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parse config {}", path.display()))
}

/// Builds the configuration for `data_dir`. Command-line flags take
/// precedence over the config file.
pub fn build_config(data_dir: &Path, overrides: &RunOverrides) -> Result<PipelineConfig> {
    let mut config = PipelineConfig::new(data_dir);
    if let Some(path) = &overrides.config_file {
        let file_overrides = load_overrides(path)?;
        config = config
            .apply(file_overrides)
            .with_context(|| format!("apply config {}", path.display()))?;
    }

    if overrides.start_year.is_some() || overrides.end_year.is_some() {
        let window = YearWindow::new(
            overrides.start_year.unwrap_or(config.year_window.start()),
            overrides.end_year.unwrap_or(config.year_window.end()),
        )
        .context("invalid year window")?;
        config = config.with_year_window(window);
    }
    if let Some(path) = &overrides.merged_output {
        config.output.merged.clone_from(path);
    }
    if let Some(path) = &overrides.global_monthly_output {
        config.output.global_monthly.clone_from(path);
    }
    if overrides.reject_duplicate_keys {
        config = config.with_duplicate_keys(DuplicateKeyPolicy::Reject);
    }
    Ok(config)
}
