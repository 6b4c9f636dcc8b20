//! Locating input files under their candidate names.

use std::path::{Path, PathBuf};

use climate_model::{ArchiveSource, Indicator, PipelineConfig};

use crate::error::{IngestError, Result};

/// A required indicator file that was found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedSource {
    pub indicator: Indicator,
    pub path: PathBuf,
}

/// Returns the first candidate that exists as a file inside `dir`.
pub fn find_first_existing<S: AsRef<str>>(dir: &Path, candidates: &[S]) -> Option<PathBuf> {
    candidates
        .iter()
        .map(|name| dir.join(name.as_ref()))
        .find(|path| path.is_file())
}

/// Locates all five indicator files.
///
/// Fails with [`IngestError::MissingSources`] naming every indicator that
/// could not be found, so nothing is read when any of them is absent.
pub fn locate_indicator_sources(config: &PipelineConfig) -> Result<Vec<LocatedSource>> {
    let mut located = Vec::with_capacity(config.sources.len());
    let mut missing = Vec::new();

    for source in &config.sources {
        match find_first_existing(&config.data_dir, &source.candidates) {
            Some(path) => {
                tracing::debug!(
                    source = %source.indicator,
                    path = %path.display(),
                    "located indicator file"
                );
                located.push(LocatedSource {
                    indicator: source.indicator,
                    path,
                });
            }
            None => missing.push(source.indicator.label().to_string()),
        }
    }

    if !missing.is_empty() {
        return Err(IngestError::MissingSources { labels: missing });
    }
    Ok(located)
}

/// Path of an optional archive, if it exists.
pub fn locate_archive(dir: &Path, source: &ArchiveSource) -> Option<PathBuf> {
    find_first_existing(dir, std::slice::from_ref(&source.archive))
}
