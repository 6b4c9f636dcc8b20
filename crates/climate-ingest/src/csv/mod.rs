//! CSV reading utilities.

mod reader;

pub use reader::{MAX_CSV_BYTES, parse_csv_bytes, read_csv_table, validate_encoding};
