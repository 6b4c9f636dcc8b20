//! Library components of the `climate-merge` command.

pub mod config;
pub mod logging;
pub mod pipeline;
pub mod types;
