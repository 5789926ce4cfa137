use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::RunResult;

pub fn print_summary(result: &RunResult) {
    println!("Source: {} ({})", result.source.display(), result.encoding);
    match &result.outputs {
        Some(paths) => {
            println!("Packages: {}", paths.packages.display());
            println!("Components: {}", paths.components.display());
        }
        None => println!("Dry run: no tables written"),
    }
    if let Some(path) = &result.report_path {
        println!("Report: {}", path.display());
    }
    println!("{}", summary_table(result));
    if !result.report.forms.is_empty() {
        println!("{}", form_table(result));
    }
}

/// Run counts, one metric per row.
pub fn summary_table(result: &RunResult) -> Table {
    let report = &result.report;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Count")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);

    table.add_row(vec![Cell::new("Source rows"), Cell::new(result.source_rows)]);
    table.add_row(vec![Cell::new("Packages"), Cell::new(report.packages)]);
    table.add_row(vec![Cell::new("Components"), Cell::new(report.components)]);
    table.add_row(vec![Cell::new("Combinations"), Cell::new(report.combos)]);
    table.add_row(vec![
        Cell::new("Without form"),
        count_cell(report.without_form, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Without dose summary"),
        count_cell(report.without_summary, Color::Yellow),
    ]);
    for (column, count) in &report.identifier_overflows {
        table.add_row(vec![
            Cell::new(format!("{column} overflows")),
            count_cell(*count, Color::Red),
        ]);
    }
    table.add_row(vec![
        Cell::new("Label column").add_attribute(Attribute::Bold),
        dim_cell(&report.label_column),
    ]);
    table
}

/// Package count per detected form.
pub fn form_table(result: &RunResult) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Form"), header_cell("Packages")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (form, count) in &result.report.forms {
        table.add_row(vec![Cell::new(form), Cell::new(count)]);
    }
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
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

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
