//! CSV parsing into untyped [`RawTable`]s.

use std::io::Cursor;
use std::path::Path;

use polars::prelude::*;

use crate::error::{IngestError, Result};
use crate::raw::RawTable;

/// Maximum size of a single CSV payload (500 MB).
pub const MAX_CSV_BYTES: u64 = 500 * 1024 * 1024;

const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Reject payloads that are not UTF-8.
///
/// A UTF-8 BOM is accepted and stripped by [`parse_csv_bytes`].
pub fn validate_encoding(bytes: &[u8], source_name: &str) -> Result<()> {
    if bytes.len() >= 2 {
        if bytes[0..2] == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                source_name: source_name.to_string(),
                encoding: "UTF-16 LE",
            });
        }
        if bytes[0..2] == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                source_name: source_name.to_string(),
                encoding: "UTF-16 BE",
            });
        }
    }
    Ok(())
}

/// Reads a CSV file with a single header row.
///
/// Every column is read as text and empty cells become nulls; no type
/// inference happens at this stage.
pub fn read_csv_table(path: &Path) -> Result<RawTable> {
    let metadata = std::fs::metadata(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    if metadata.len() > MAX_CSV_BYTES {
        return Err(IngestError::CsvParse {
            source_name: path.display().to_string(),
            message: format!("file is {} bytes, limit is {MAX_CSV_BYTES}", metadata.len()),
        });
    }

    let bytes = std::fs::read(path).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_csv_bytes(bytes, &source_label(path))
}

/// Parses an in-memory CSV payload.
pub fn parse_csv_bytes(mut bytes: Vec<u8>, source_name: &str) -> Result<RawTable> {
    validate_encoding(&bytes, source_name)?;
    if bytes.starts_with(&UTF8_BOM) {
        bytes.drain(..UTF8_BOM.len());
    }
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(IngestError::EmptyCsv {
            source_name: source_name.to_string(),
        });
    }

    let df = CsvReadOptions::default()
        .with_has_header(true)
        // zero rows of inference reads every column as String
        .with_infer_schema_length(Some(0))
        .into_reader_with_file_handle(Cursor::new(bytes))
        .finish()
        .map_err(|e| IngestError::CsvParse {
            source_name: source_name.to_string(),
            message: e.to_string(),
        })?;

    tracing::debug!(
        source = %source_name,
        rows = df.height(),
        columns = df.width(),
        "parsed CSV"
    );
    Ok(RawTable::new(source_name, df))
}

fn source_label(path: &Path) -> String {
    path.file_name()
        .and_then(|name| name.to_str())
        .map_or_else(|| path.display().to_string(), str::to_string)
}
