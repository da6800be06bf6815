use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use roster_model::{Result, RosterError, Row, Table, Value};

fn clean_cell(raw: &str) -> &str {
    raw.trim().trim_matches('\u{feff}')
}

/// Read a delimited-text file into a typed table.
///
/// The first non-blank record is the header row; every later record becomes
/// a row, each cell run through the value parser. Records shorter than the
/// header leave the trailing cells absent.
pub fn read_csv_table(path: &Path) -> Result<Table> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|error| RosterError::Read(format!("{}: {error}", path.display())))?;

    let mut columns: Option<Vec<String>> = None;
    let mut rows: Vec<Row> = Vec::new();
    for record in reader.records() {
        let record =
            record.map_err(|error| RosterError::Read(format!("{}: {error}", path.display())))?;
        if record.iter().all(|cell| clean_cell(cell).is_empty()) {
            continue;
        }
        match &columns {
            None => {
                columns = Some(record.iter().map(|cell| clean_cell(cell).to_string()).collect());
            }
            Some(header) => {
                let mut row = Row::new();
                for (idx, column) in header.iter().enumerate() {
                    let cell = record.get(idx).unwrap_or("");
                    row.insert(column.clone(), Value::parse(clean_cell(cell)));
                }
                rows.push(row);
            }
        }
    }

    let Some(columns) = columns else {
        return Err(RosterError::Read(format!(
            "{}: file has no header row",
            path.display()
        )));
    };
    debug!(
        path = %path.display(),
        columns = columns.len(),
        rows = rows.len(),
        "csv table read"
    );
    Ok(Table { columns, rows })
}
