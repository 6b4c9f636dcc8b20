//! Reading a named CSV entry out of a zip archive.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use zip::ZipArchive;
use zip::result::ZipError;

use crate::csv::{MAX_CSV_BYTES, parse_csv_bytes};
use crate::error::{IngestError, Result};
use crate::raw::RawTable;

/// Extracts `entry` from the zip archive at `zip_path` and parses it as CSV.
///
/// The archive handle is dropped before parsing starts.
pub fn read_zip_csv(zip_path: &Path, entry: &str) -> Result<RawTable> {
    let bytes = read_zip_entry(zip_path, entry)?;
    let source_name = format!(
        "{}!{entry}",
        zip_path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("archive")
    );
    parse_csv_bytes(bytes, &source_name)
}

/// Returns the decompressed bytes of a single archive entry.
pub fn read_zip_entry(zip_path: &Path, entry: &str) -> Result<Vec<u8>> {
    let file = File::open(zip_path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: zip_path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: zip_path.to_path_buf(),
                source: e,
            }
        }
    })?;

    let mut archive = ZipArchive::new(BufReader::new(file)).map_err(|e| IngestError::Archive {
        path: zip_path.to_path_buf(),
        source: e,
    })?;

    let mut zipped = archive.by_name(entry).map_err(|e| match e {
        ZipError::FileNotFound => IngestError::ArchiveEntryNotFound {
            path: zip_path.to_path_buf(),
            entry: entry.to_string(),
        },
        other => IngestError::Archive {
            path: zip_path.to_path_buf(),
            source: other,
        },
    })?;

    if zipped.size() > MAX_CSV_BYTES {
        return Err(IngestError::CsvParse {
            source_name: entry.to_string(),
            message: format!("entry is {} bytes, limit is {MAX_CSV_BYTES}", zipped.size()),
        });
    }

    let mut bytes = Vec::with_capacity(usize::try_from(zipped.size()).unwrap_or_default());
    zipped
        .read_to_end(&mut bytes)
        .map_err(|e| IngestError::FileRead {
            path: zip_path.to_path_buf(),
            source: e,
        })?;

    tracing::debug!(
        archive = %zip_path.display(),
        entry,
        bytes = bytes.len(),
        "extracted archive entry"
    );
    Ok(bytes)
}
