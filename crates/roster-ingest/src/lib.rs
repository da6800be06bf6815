use std::path::Path;

use roster_model::{Result, RosterError, Table};

pub mod csv_table;
pub mod format;
pub mod workbook;

pub use csv_table::read_csv_table;
pub use format::FileFormat;
pub use workbook::read_workbook_table;

/// Read a table from `path`, choosing the reader by file extension.
pub fn read_table(path: &Path) -> Result<Table> {
    match FileFormat::from_path(path) {
        Some(FileFormat::Csv) => read_csv_table(path),
        Some(FileFormat::Workbook) => read_workbook_table(path),
        None => Err(RosterError::Read(format!(
            "{}: unrecognized file extension",
            path.display()
        ))),
    }
}
