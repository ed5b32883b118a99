use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use bizmerge_cli::pipeline::{MergeOutcome, SourceSummary};
use bizmerge_validate::ValidationReport;

pub fn print_merge_summary(outcome: &MergeOutcome) {
    println!(
        "Merged data has been written to {}",
        outcome.output.display()
    );
    println!("{}", merge_table(outcome));
}

pub fn print_check_report(report: &ValidationReport) {
    for line in report.lines() {
        println!("{line}");
    }
}

pub fn merge_table(outcome: &MergeOutcome) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Source"),
        header_cell("File"),
        header_cell("Read"),
        header_cell("Kept"),
        header_cell("Discarded"),
        header_cell("Matched"),
        header_cell("Appended"),
    ]);
    apply_table_style(&mut table);
    for column in 2..7 {
        align_column(&mut table, column, CellAlignment::Right);
    }
    table.add_row(source_row(
        &outcome.primary,
        count_cell(outcome.merge.matched),
        dim_cell("-"),
    ));
    table.add_row(source_row(
        &outcome.secondary,
        dim_cell("-"),
        count_cell(outcome.merge.unmatched_secondary),
    ));
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(outcome.output.display().to_string()),
        dim_cell("-"),
        dim_cell("-"),
        dim_cell("-"),
        dim_cell("-"),
        Cell::new(outcome.rows_written).add_attribute(Attribute::Bold),
    ]);
    table
}

fn source_row(summary: &SourceSummary, matched: Cell, appended: Cell) -> Vec<Cell> {
    vec![
        Cell::new(&summary.prefix),
        Cell::new(summary.path.display().to_string()),
        Cell::new(summary.stats.rows_read),
        Cell::new(summary.stats.rows_kept),
        discarded_cell(summary.stats.rows_discarded),
        matched,
        appended,
    ]
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
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

fn dim_cell(value: &str) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn count_cell(count: usize) -> Cell {
    Cell::new(count)
}

fn discarded_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Yellow)
    } else {
        dim_cell("0")
    }
}
