use anyhow::Result;
use comfy_table::{Cell, Color, Table};

use climate_cli::config::{RunOverrides, build_config};
use climate_cli::pipeline::{describe_sources, run_pipeline};
use climate_cli::types::RunResult;

use crate::cli::{RunArgs, SourcesArgs};
use crate::summary::apply_table_style;

pub fn run_merge(args: &RunArgs) -> Result<RunResult> {
    let overrides = RunOverrides {
        config_file: args.config.clone(),
        merged_output: args.output.clone(),
        global_monthly_output: args.global_output.clone(),
        start_year: args.start_year,
        end_year: args.end_year,
        reject_duplicate_keys: args.reject_duplicate_keys,
    };
    let config = build_config(&args.data_dir, &overrides)?;
    run_pipeline(&config)
}

pub fn run_sources(args: &SourcesArgs) -> Result<()> {
    let overrides = RunOverrides {
        config_file: args.config.clone(),
        ..RunOverrides::default()
    };
    let config = build_config(&args.data_dir, &overrides)?;

    let mut table = Table::new();
    table.set_header(vec!["Source", "Required", "Candidates", "Resolved"]);
    apply_table_style(&mut table);
    for listing in describe_sources(&config) {
        let resolved = match &listing.resolved {
            Some(path) => Cell::new(path.display()).fg(Color::Green),
            None if listing.required => Cell::new("missing").fg(Color::Red),
            None => Cell::new("absent").fg(Color::DarkGrey),
        };
        table.add_row(vec![
            Cell::new(listing.label),
            Cell::new(if listing.required { "yes" } else { "no" }),
            Cell::new(listing.candidates.join("\n")),
            resolved,
        ]);
    }
    println!("Data directory: {}", config.data_dir.display());
    println!("{table}");
    Ok(())
}
