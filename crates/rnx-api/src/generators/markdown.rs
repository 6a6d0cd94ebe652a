use std::fmt::Write;

use crate::catalog::Catalog;
use crate::model::DocumentedEntry;

const TYPES_HEADER: [&str; 3] = ["Category", "Type Name", "Description"];
const FUNCTIONS_HEADER: [&str; 3] = ["Category", "Function", "Description"];

/// Render the catalog as Markdown tables, types first.
///
/// Both collections are sorted first; empty ones are left out.
pub fn render_tables(catalog: &Catalog) -> String {
    let mut catalog = catalog.clone();
    catalog.sort();

    [
        render_table(&TYPES_HEADER, &catalog.types),
        render_table(&FUNCTIONS_HEADER, &catalog.functions),
    ]
    .into_iter()
    .filter(|table| !table.is_empty())
    .collect::<Vec<_>>()
    .join("\n\n")
}

/// Render `entries` in order as an aligned Markdown table.
pub fn render_table(header: &[&str; 3], entries: &[DocumentedEntry]) -> String {
    if entries.is_empty() {
        return String::new();
    }

    let rows: Vec<[&str; 3]> = entries
        .iter()
        .map(|entry| {
            [
                entry.category.as_str(),
                entry.identifier.as_str(),
                entry.description.as_str(),
            ]
        })
        .collect();

    let mut widths = header.map(|cell| cell_width(cell).max(3));
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell_width(cell));
        }
    }

    let mut output = String::new();
    write_row(&mut output, header, &widths);
    output.push('\n');
    let delimiters = widths.map(|width| "-".repeat(width));
    write_row(&mut output, &delimiters.each_ref().map(String::as_str), &widths);
    for row in &rows {
        output.push('\n');
        write_row(&mut output, row, &widths);
    }
    output
}

fn write_row(buffer: &mut String, cells: &[&str; 3], widths: &[usize; 3]) {
    buffer.push('|');
    for (cell, width) in cells.iter().zip(widths) {
        let padding = width - cell_width(cell);
        let _ = write!(buffer, " {}{} |", cell, " ".repeat(padding));
    }
}

fn cell_width(cell: &str) -> usize {
    cell.chars().count()
}
