//! Table and profile rendering for the terminal.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use roster_model::Value;

/// Print the dataset as a bordered table, indices first.
pub fn print_table(table: &roster_model::Table, limit: Option<usize>) {
    let mut out = Table::new();
    let mut header = vec![header_cell("#")];
    header.extend(table.columns.iter().map(|column| header_cell(column)));
    out.set_header(header);
    apply_table_style(&mut out);
    align_column(&mut out, 0, CellAlignment::Right);

    let shown = limit.unwrap_or(table.row_count()).min(table.row_count());
    for index in 0..shown {
        let mut cells = vec![dim_cell(index)];
        for column in &table.columns {
            cells.push(value_cell(&table.value(index, column)));
        }
        out.add_row(cells);
    }
    println!("{out}");
    if shown < table.row_count() {
        println!("... {shown} of {} rows shown", table.row_count());
    }
}

/// Print one profile line per column: inferred kind, presence counts, and
/// numeric aggregates where they apply. This is the read-only view a chart
/// layer would consume.
pub fn print_profile(table: &roster_model::Table) {
    let mut out = Table::new();
    out.set_header(vec![
        header_cell("Column"),
        header_cell("Kind"),
        header_cell("Present"),
        header_cell("Missing"),
        header_cell("Unique"),
        header_cell("Min"),
        header_cell("Mean"),
        header_cell("Max"),
    ]);
    apply_table_style(&mut out);
    for index in 2..=7 {
        align_column(&mut out, index, CellAlignment::Right);
    }

    for column in &table.columns {
        let profile = ColumnProfile::scan(table, column);
        out.add_row(vec![
            Cell::new(column).add_attribute(Attribute::Bold),
            Cell::new(profile.kind),
            Cell::new(profile.present),
            missing_cell(profile.missing),
            Cell::new(profile.unique),
            numeric_cell(profile.min),
            numeric_cell(profile.mean),
            numeric_cell(profile.max),
        ]);
    }
    println!("{out}");
}

struct ColumnProfile {
    kind: &'static str,
    present: usize,
    missing: usize,
    unique: usize,
    min: Option<f64>,
    mean: Option<f64>,
    max: Option<f64>,
}

impl ColumnProfile {
    fn scan(table: &roster_model::Table, column: &str) -> Self {
        let mut present = 0usize;
        let mut missing = 0usize;
        let mut numbers: Vec<f64> = Vec::new();
        let mut uniques = std::collections::BTreeSet::new();
        for row in &table.rows {
            let value = row.get(column).cloned().unwrap_or(Value::Null);
            if value.is_null() {
                missing += 1;
                continue;
            }
            present += 1;
            uniques.insert(value.to_string());
            if let Some(number) = value.as_f64() {
                numbers.push(number);
            }
        }

        let kind = if present == 0 {
            "empty"
        } else if numbers.len() == present {
            "numeric"
        } else {
            "text"
        };
        let (min, mean, max) = if kind == "numeric" {
            let min = numbers.iter().copied().fold(f64::INFINITY, f64::min);
            let max = numbers.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let mean = numbers.iter().sum::<f64>() / numbers.len() as f64;
            (Some(min), Some(mean), Some(max))
        } else {
            (None, None, None)
        };
        Self {
            kind,
            present,
            missing,
            unique: uniques.len(),
            min,
            mean,
            max,
        }
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(160);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn value_cell(value: &Value) -> Cell {
    if value.is_null() {
        dim_cell("-")
    } else {
        Cell::new(value.to_string())
    }
}

fn missing_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Yellow)
    } else {
        dim_cell(count)
    }
}

fn numeric_cell(value: Option<f64>) -> Cell {
    match value {
        Some(number) => Cell::new(format!("{number:.2}")),
        None => dim_cell("-"),
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
