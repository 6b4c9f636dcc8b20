//! Staged pipeline: locate, normalize, temperature, merge, output.
//!
//! Required indicator sources are fatal on any failure. The two temperature
//! archives are optional; their loaders return a [`SourceOutcome`] and a
//! skipped archive is logged as a warning.

use std::time::Instant;

use anyhow::{Context, Result, anyhow};
use tracing::{info, info_span, warn};

use climate_core::merge_tables;
use climate_ingest::{
    LocatedSource, RawTable, find_first_existing, locate_archive, locate_indicator_sources,
    read_csv_table, read_zip_csv,
};
use climate_model::{ArchiveSource, GlobalMonthlyRow, PipelineConfig};
use climate_output::{write_global_monthly_csv, write_master_csv};
use climate_transform::{
    IndicatorTable, TemperatureTable, TransformError, annualize_temperature,
    normalize_global_monthly, normalize_indicator,
};

use crate::types::{IndicatorSummary, RunResult, SourceListing, SourceOutcome};

pub const COUNTRY_TEMPERATURE_LABEL: &str = "temperature";
pub const GLOBAL_MONTHLY_LABEL: &str = "global_monthly";

/// Runs every stage and writes both artifacts.
///
/// Nothing is written when a required source is missing, fails to
/// normalize, or the merge fails.
pub fn run_pipeline(config: &PipelineConfig) -> Result<RunResult> {
    let started = Instant::now();

    let located = locate_sources(config)?;
    let indicators = normalize_indicators(config, &located)?;

    let (temperature, global_monthly) = info_span!("temperature").in_scope(|| {
        let temperature = load_country_temperature(config);
        report_outcome(COUNTRY_TEMPERATURE_LABEL, &temperature.as_ref().map(TemperatureTable::len));
        let global_monthly = load_global_monthly(config);
        report_outcome(GLOBAL_MONTHLY_LABEL, &global_monthly.as_ref().map(Vec::len));
        (temperature, global_monthly)
    });

    let temperature_rows = temperature.as_ref().map(TemperatureTable::len);
    let temperature = temperature.loaded();
    let master = info_span!("merge").in_scope(|| {
        let start = Instant::now();
        let master = merge_tables(&indicators, temperature.as_ref(), config.duplicate_keys)
            .context("merge indicator tables")?;
        info!(
            rows = master.len(),
            countries = master.country_count(),
            temperature = master.has_temperature,
            duration_ms = start.elapsed().as_millis(),
            "merge complete"
        );
        Ok::<_, anyhow::Error>(master)
    })?;

    let merged_path = config.output.merged.clone();
    info_span!("output", artifact = "master").in_scope(|| {
        write_master_csv(&merged_path, &master)
            .with_context(|| format!("write {}", merged_path.display()))
    })?;

    // Written only once the master table is on disk so a failed merge leaves no output.
    let global_monthly = match global_monthly {
        SourceOutcome::Loaded(rows) => write_global_monthly(config, &rows),
        SourceOutcome::Absent => SourceOutcome::Absent,
        SourceOutcome::Skipped { reason } => SourceOutcome::Skipped { reason },
    };

    let sources = located
        .iter()
        .zip(&indicators)
        .map(|(located, table)| IndicatorSummary {
            indicator: located.indicator,
            path: located.path.clone(),
            value_column: table.value_column.clone(),
            rows: table.len(),
        })
        .collect();

    Ok(RunResult {
        merged_path,
        rows: master.len(),
        countries: master.country_count(),
        columns: master.column_names(),
        sources,
        temperature: temperature_rows,
        global_monthly,
        global_monthly_path: config.output.global_monthly.clone(),
        duration_ms: started.elapsed().as_millis(),
    })
}

/// Locates the five indicator files, failing with every missing label.
pub fn locate_sources(config: &PipelineConfig) -> Result<Vec<LocatedSource>> {
    let span = info_span!("locate", data_dir = %config.data_dir.display());
    let _guard = span.enter();
    let start = Instant::now();
    let located = locate_indicator_sources(config)?;
    info!(
        sources = located.len(),
        duration_ms = start.elapsed().as_millis(),
        "located indicator files"
    );
    Ok(located)
}

/// Reads and normalizes every located indicator file, in the order given.
pub fn normalize_indicators(
    config: &PipelineConfig,
    located: &[LocatedSource],
) -> Result<Vec<IndicatorTable>> {
    let mut tables = Vec::with_capacity(located.len());
    for entry in located {
        let label = entry.indicator.label();
        let table = info_span!("normalize", source = label).in_scope(|| {
            let start = Instant::now();
            let source = config
                .source(entry.indicator)
                .ok_or_else(|| anyhow!("no source configured for {label}"))?;
            let raw = read_csv_table(&entry.path)
                .with_context(|| format!("read {label} source {}", entry.path.display()))?;
            let table = normalize_indicator(&raw, source, config.year_window)
                .with_context(|| format!("normalize {label} source"))?;
            info!(
                source = label,
                rows = table.len(),
                dropped = raw.height() - table.len(),
                value_column = %table.value_column,
                duration_ms = start.elapsed().as_millis(),
                "normalized indicator"
            );
            Ok::<_, anyhow::Error>(table)
        })?;
        tables.push(table);
    }
    Ok(tables)
}

/// Loads the daily country anomalies and aggregates them per year.
pub fn load_country_temperature(config: &PipelineConfig) -> SourceOutcome<TemperatureTable> {
    load_archive(config, &config.temperature.country_daily, |raw| {
        annualize_temperature(raw, config.year_window)
    })
}

/// Loads the global monthly series.
pub fn load_global_monthly(config: &PipelineConfig) -> SourceOutcome<Vec<GlobalMonthlyRow>> {
    load_archive(config, &config.temperature.global_monthly, |raw| {
        normalize_global_monthly(raw, config.year_window)
    })
}

/// Resolves every source to the file that would be read.
pub fn describe_sources(config: &PipelineConfig) -> Vec<SourceListing> {
    let mut listings: Vec<SourceListing> = config
        .sources
        .iter()
        .map(|source| SourceListing {
            label: source.indicator.label(),
            candidates: source.candidates.clone(),
            required: true,
            resolved: find_first_existing(&config.data_dir, &source.candidates),
        })
        .collect();
    for (label, archive) in [
        (COUNTRY_TEMPERATURE_LABEL, &config.temperature.country_daily),
        (GLOBAL_MONTHLY_LABEL, &config.temperature.global_monthly),
    ] {
        listings.push(SourceListing {
            label,
            candidates: vec![format!("{}!{}", archive.archive, archive.entry)],
            required: false,
            resolved: locate_archive(&config.data_dir, archive),
        });
    }
    listings
}

fn load_archive<T>(
    config: &PipelineConfig,
    source: &ArchiveSource,
    normalize: impl FnOnce(&RawTable) -> Result<T, TransformError>,
) -> SourceOutcome<T> {
    let Some(path) = locate_archive(&config.data_dir, source) else {
        return SourceOutcome::Absent;
    };
    let loaded = read_zip_csv(&path, &source.entry)
        .map_err(TransformError::from)
        .and_then(|raw| normalize(&raw));
    match loaded {
        Ok(value) => SourceOutcome::Loaded(value),
        Err(error) => SourceOutcome::Skipped {
            reason: error.to_string(),
        },
    }
}

fn report_outcome(label: &str, outcome: &SourceOutcome<usize>) {
    match outcome {
        SourceOutcome::Loaded(rows) => info!(source = label, rows, "loaded optional source"),
        SourceOutcome::Absent => info!(source = label, "optional source not present"),
        SourceOutcome::Skipped { reason } => {
            warn!(source = label, reason = %reason, "optional source load failed, skipping");
        }
    }
}

fn write_global_monthly(config: &PipelineConfig, rows: &[GlobalMonthlyRow]) -> SourceOutcome<usize> {
    let path = &config.output.global_monthly;
    info_span!("output", artifact = "global_monthly").in_scope(|| {
        match write_global_monthly_csv(path, rows) {
            Ok(written) => SourceOutcome::Loaded(written),
            Err(error) => {
                warn!(path = %path.display(), error = %error, "global monthly export failed");
                SourceOutcome::Skipped {
                    reason: error.to_string(),
                }
            }
        }
    })
}
