use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use tracing::debug;

use roster_model::{Result, RosterError, Row, Table, Value};

/// Read the first sheet of an `.xlsx`/`.xls` workbook into a typed table.
///
/// The first row is the header row. Whole-number cells surface as integers
/// so a spreadsheet and a CSV rendition of the same data load identically.
pub fn read_workbook_table(path: &Path) -> Result<Table> {
    let mut workbook = open_workbook_auto(path)
        .map_err(|error| RosterError::Read(format!("{}: {error}", path.display())))?;
    let sheet_names = workbook.sheet_names().to_owned();
    let Some(sheet_name) = sheet_names.first() else {
        return Err(RosterError::Read(format!(
            "{}: workbook has no sheets",
            path.display()
        )));
    };
    let range = workbook
        .worksheet_range(sheet_name)
        .map_err(|error| RosterError::Read(format!("{}: {error}", path.display())))?;

    let mut sheet_rows = range.rows();
    let Some(header) = sheet_rows.next() else {
        return Err(RosterError::Read(format!(
            "{}: sheet `{sheet_name}` has no header row",
            path.display()
        )));
    };
    let columns: Vec<String> = header
        .iter()
        .map(|cell| cell_text(cell).trim().to_string())
        .collect();

    let mut rows: Vec<Row> = Vec::new();
    for sheet_row in sheet_rows {
        if sheet_row.iter().all(|cell| matches!(cell, Data::Empty)) {
            continue;
        }
        let mut row = Row::new();
        for (idx, column) in columns.iter().enumerate() {
            let value = sheet_row.get(idx).map_or(Value::Null, convert_cell);
            row.insert(column.clone(), value);
        }
        rows.push(row);
    }

    debug!(
        path = %path.display(),
        sheet = %sheet_name,
        columns = columns.len(),
        rows = rows.len(),
        "workbook table read"
    );
    Ok(Table { columns, rows })
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn convert_cell(cell: &Data) -> Value {
    match cell {
        Data::Empty | Data::Error(_) => Value::Null,
        Data::Int(int) => Value::Int(*int),
        Data::Float(float) => float_value(*float),
        Data::Bool(flag) => Value::Str(flag.to_string()),
        Data::String(text) => Value::parse(text),
        Data::DateTime(datetime) => float_value(datetime.as_f64()),
        Data::DateTimeIso(text) | Data::DurationIso(text) => Value::Str(text.clone()),
    }
}

/// Spreadsheets store every number as a float; surface whole numbers as
/// integers, matching what the value parser does with text input.
fn float_value(float: f64) -> Value {
    if float.fract() == 0.0 && float.abs() < i64::MAX as f64 {
        Value::Int(float as i64)
    } else {
        Value::Float(float)
    }
}
