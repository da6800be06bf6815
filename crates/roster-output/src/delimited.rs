use std::path::Path;

use csv::WriterBuilder;
use tracing::debug;

use roster_model::{Result, RosterError, Table};

/// Write the table as comma-separated text: one header record, then one
/// record per row in column order. Absent cells become empty fields.
pub fn write_csv_table(path: &Path, table: &Table) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .from_path(path)
        .map_err(|error| write_error(path, &error))?;
    writer
        .write_record(&table.columns)
        .map_err(|error| write_error(path, &error))?;
    for row in &table.rows {
        let record: Vec<String> = table
            .columns
            .iter()
            .map(|column| row.get(column).map(ToString::to_string).unwrap_or_default())
            .collect();
        writer
            .write_record(&record)
            .map_err(|error| write_error(path, &error))?;
    }
    writer.flush().map_err(|error| write_error(path, &error))?;
    debug!(path = %path.display(), rows = table.row_count(), "csv table written");
    Ok(())
}

fn write_error(path: &Path, error: &dyn std::fmt::Display) -> RosterError {
    RosterError::Write(format!("{}: {error}", path.display()))
}
