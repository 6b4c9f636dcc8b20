use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use climate_cli::types::{RunResult, SourceOutcome};

pub fn print_summary(result: &RunResult) {
    println!(
        "Wrote {} with {} rows and {} countries.",
        result.merged_path.display(),
        result.rows,
        result.countries
    );
    println!("Columns: {}", result.columns.join(", "));
    if result.global_monthly.is_loaded() {
        println!("Global monthly: {}", result.global_monthly_path.display());
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Source"),
        header_cell("File"),
        header_cell("Value column"),
        header_cell("Rows"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);

    for source in &result.sources {
        table.add_row(vec![
            Cell::new(source.indicator.label())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(source.path.display()),
            Cell::new(&source.value_column),
            Cell::new(source.rows),
        ]);
    }
    table.add_row(optional_row("temperature", &result.temperature));
    table.add_row(optional_row("global_monthly", &result.global_monthly));
    table.add_row(vec![
        Cell::new("MASTER")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(result.merged_path.display()),
        dim_cell("-"),
        Cell::new(result.rows).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
    println!("Finished in {} ms", result.duration_ms);
}

fn optional_row(label: &str, outcome: &SourceOutcome<usize>) -> Vec<Cell> {
    let label_cell = Cell::new(label).fg(Color::Blue);
    match outcome {
        SourceOutcome::Loaded(rows) => vec![
            label_cell,
            Cell::new("loaded").fg(Color::Green),
            dim_cell("-"),
            Cell::new(rows),
        ],
        SourceOutcome::Absent => vec![label_cell, dim_cell("absent"), dim_cell("-"), dim_cell("-")],
        SourceOutcome::Skipped { reason } => vec![
            label_cell,
            Cell::new(format!("skipped: {reason}")).fg(Color::Yellow),
            dim_cell("-"),
            dim_cell("-"),
        ],
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
