use std::path::Path;

use rust_xlsxwriter::Workbook;
use tracing::debug;

use roster_model::{Result, RosterError, Table, Value};

/// Write the table as a single-sheet workbook: header row, then data rows.
///
/// Numbers are written as numbers, text as text; absent cells are left
/// unwritten so they read back as empty. The workbook format is xlsx
/// regardless of the target file name's extension.
pub fn write_workbook_table(path: &Path, table: &Table) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col_idx, column) in table.columns.iter().enumerate() {
        worksheet
            .write_string(0, col_idx as u16, column.as_str())
            .map_err(|error| write_error(path, &error))?;
    }
    for (row_idx, row) in table.rows.iter().enumerate() {
        let sheet_row = (row_idx + 1) as u32;
        for (col_idx, column) in table.columns.iter().enumerate() {
            let sheet_col = col_idx as u16;
            match row.get(column) {
                None | Some(Value::Null) => {}
                Some(Value::Int(int)) => {
                    worksheet
                        .write_number(sheet_row, sheet_col, *int as f64)
                        .map_err(|error| write_error(path, &error))?;
                }
                Some(Value::Float(float)) => {
                    worksheet
                        .write_number(sheet_row, sheet_col, *float)
                        .map_err(|error| write_error(path, &error))?;
                }
                Some(Value::Str(text)) => {
                    worksheet
                        .write_string(sheet_row, sheet_col, text.as_str())
                        .map_err(|error| write_error(path, &error))?;
                }
            }
        }
    }

    workbook
        .save(path)
        .map_err(|error| write_error(path, &error))?;
    debug!(path = %path.display(), rows = table.row_count(), "workbook written");
    Ok(())
}

fn write_error(path: &Path, error: &dyn std::fmt::Display) -> RosterError {
    RosterError::Write(format!("{}: {error}", path.display()))
}
