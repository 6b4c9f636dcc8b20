use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid year window: start {start} is after end {end}")]
    InvalidYearWindow { start: i32, end: i32 },
}

pub type Result<T> = std::result::Result<T, ModelError>;
