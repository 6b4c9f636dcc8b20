//! Input loading for the climate indicator merge.
//!
//! This crate locates the indicator files inside a data directory and parses
//! CSV files (plain or stored inside zip archives) into untyped
//! [`RawTable`]s backed by Polars DataFrames.
//!
//! # Example
//!
//! ```ignore
//! use climate_ingest::{locate_indicator_sources, read_csv_table, read_zip_csv};
//!
//! let located = locate_indicator_sources(&config)?;
//! let co2 = read_csv_table(&located[0].path)?;
//! let temps = read_zip_csv(&zip_path, "monthly-temperature-anomalies.csv")?;
//! ```

mod archive;
mod csv;
mod discovery;
mod error;
mod raw;

// === Error Types ===
pub use error::{IngestError, Result};

// === Raw Tables ===
pub use raw::RawTable;

// === CSV Reading ===
pub use archive::{read_zip_csv, read_zip_entry};
pub use csv::{MAX_CSV_BYTES, parse_csv_bytes, read_csv_table, validate_encoding};

// === File Discovery ===
pub use discovery::{LocatedSource, find_first_existing, locate_archive, locate_indicator_sources};
