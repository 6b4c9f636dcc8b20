//! CLI argument definitions for the climate merge.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use climate_model::options::DEFAULT_DATA_DIR;
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "climate-merge",
    version,
    about = "Build the country-year climate master table",
    long_about = "Normalize five annual OWID-style indicator files, attach annual \
                  temperature anomalies and write a single country-year master table.\n\n\
                  Also exports the global monthly temperature-anomaly series when its \
                  archive is present."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Merge the indicator sources and write the master table.
    Run(RunArgs),

    /// Show where each source would be read from.
    Sources(SourcesArgs),
}

#[derive(Parser)]
pub struct RunArgs {
    /// Directory containing the indicator files and temperature archives.
    #[arg(value_name = "DATA_DIR", default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    /// Master table destination (default: <DATA_DIR>/core_merged.csv).
    #[arg(long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Global monthly series destination (default: <DATA_DIR>/global_temp_monthly.csv).
    #[arg(long = "global-output", value_name = "FILE")]
    pub global_output: Option<PathBuf>,

    /// First year kept (inclusive).
    #[arg(long = "start-year", value_name = "YEAR")]
    pub start_year: Option<i32>,

    /// Last year kept (inclusive).
    #[arg(long = "end-year", value_name = "YEAR")]
    pub end_year: Option<i32>,

    /// JSON file overriding years, output names, candidate file names and
    /// value columns. Command-line flags take precedence.
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Fail when a join key occurs more than once in a source.
    #[arg(long = "reject-duplicate-keys")]
    pub reject_duplicate_keys: bool,
}

#[derive(Parser)]
pub struct SourcesArgs {
    /// Directory containing the indicator files and temperature archives.
    #[arg(value_name = "DATA_DIR", default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    /// JSON config file with candidate overrides.
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
