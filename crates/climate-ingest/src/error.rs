//! Error types for source discovery and loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while locating or reading input files.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file or archive not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// One or more required indicator files could not be located.
    #[error("missing required file(s): {}", .labels.join(", "))]
    MissingSources { labels: Vec<String> },

    // === CSV Parsing Errors ===
    /// File uses an encoding other than UTF-8.
    #[error("unsupported encoding {encoding} in {source_name}")]
    UnsupportedEncoding {
        source_name: String,
        encoding: &'static str,
    },

    /// CSV content is empty.
    #[error("CSV source is empty: {source_name}")]
    EmptyCsv { source_name: String },

    /// Failed to parse CSV with Polars.
    #[error("failed to parse CSV {source_name}: {message}")]
    CsvParse {
        source_name: String,
        message: String,
    },

    // === Archive Errors ===
    /// Archive could not be opened or decompressed.
    #[error("failed to read archive {path}: {source}")]
    Archive {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    /// Requested entry is not present in the archive.
    #[error("entry '{entry}' not found in archive {path}")]
    ArchiveEntryNotFound { path: PathBuf, entry: String },

    // === DataFrame Errors ===
    /// Column not found in the raw table.
    #[error("column '{column}' not found in {source_name}")]
    ColumnNotFound {
        column: String,
        source_name: String,
    },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
