//! Error types for schema normalization.

use climate_ingest::IngestError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransformError {
    /// The source does not have the expected shape.
    #[error("{source_name}: {reason}")]
    Schema { source_name: String, reason: String },

    #[error(transparent)]
    Ingest(#[from] IngestError),
}

impl TransformError {
    pub fn schema(source_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Schema {
            source_name: source_name.into(),
            reason: reason.into(),
        }
    }

    /// True for shape errors, as opposed to failures reading the data itself.
    pub fn is_schema(&self) -> bool {
        matches!(self, Self::Schema { .. })
    }
}

pub type Result<T> = std::result::Result<T, TransformError>;
