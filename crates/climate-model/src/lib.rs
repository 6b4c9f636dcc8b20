pub mod error;
pub mod indicator;
pub mod options;
pub mod rows;

pub use error::{ModelError, Result};
pub use indicator::Indicator;
pub use options::{
    ArchiveSource, ConfigOverrides, DuplicateKeyPolicy, IndicatorSource, OutputPaths,
    PipelineConfig, SourceOverride, TemperatureSources, YearWindow,
};
pub use rows::{CountryYear, GlobalMonthlyRow, IndicatorRow, MasterRow, TemperatureRow};
