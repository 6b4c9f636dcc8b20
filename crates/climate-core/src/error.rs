use climate_model::CountryYear;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MergeError {
    /// A join key occurs more than once in one input while duplicates are rejected.
    #[error(
        "duplicate key ({}, {}, {}) in {source_name} ({occurrences} occurrences)",
        .key.country_code,
        .key.country_name,
        .key.year
    )]
    DuplicateKey {
        source_name: String,
        key: CountryYear,
        occurrences: usize,
    },
}

pub type Result<T> = std::result::Result<T, MergeError>;
