use std::path::Path;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use survey_model::UNRESOLVED_LABEL;

use crate::types::GenerateResult;

/// Rows of the question list shown before the group table.
const PREVIEW_ROWS: usize = 5;

pub fn print_summary(result: &GenerateResult) {
    println!("Catalog: {}", result.catalog);
    if result.dry_run {
        println!("Output: dry run, nothing written");
    } else {
        println!("Output: {}", result.output_dir.display());
        print_output_path("Template", result.outputs.wide.as_deref());
        print_output_path("Question list", result.outputs.tall.as_deref());
    }

    if result.template.is_empty() {
        println!("No columns generated.");
        return;
    }

    print_preview(result);

    let mut table = Table::new();
    table.set_header(vec![header_cell("Group"), header_cell("Columns")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (group, count) in result.template.group_counts() {
        let group_cell = if group == UNRESOLVED_LABEL {
            Cell::new(group).fg(Color::Yellow)
        } else {
            Cell::new(group)
        };
        table.add_row(vec![group_cell, Cell::new(count)]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(result.stats.total()).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    if result.stats.unmatched > 0 {
        eprintln!(
            "warning: {} column(s) matched no group and were placed under {UNRESOLVED_LABEL}",
            result.stats.unmatched
        );
    }
    if !result.cross_product {
        println!("Product cross-product: not available for this catalog");
    }
}

fn print_preview(result: &GenerateResult) {
    let rows = result.template.tall_rows();
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("No."),
        header_cell("Group"),
        header_cell("Question"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for row in rows.iter().take(PREVIEW_ROWS) {
        table.add_row(vec![
            Cell::new(row.number),
            Cell::new(&row.group),
            Cell::new(&row.question),
        ]);
    }
    if rows.len() > PREVIEW_ROWS {
        table.add_row(vec![
            dim_cell("..."),
            dim_cell(""),
            dim_cell(format!("{} more", rows.len() - PREVIEW_ROWS)),
        ]);
    }
    println!("{table}");
}

fn print_output_path(label: &str, path: Option<&Path>) {
    if let Some(path) = path {
        println!("{label}: {}", path.display());
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
        .set_width(80);
}

pub fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

pub fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
