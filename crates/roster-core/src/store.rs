use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use roster_ingest::{FileFormat, read_table};
use roster_model::{Result, RosterError, Row, Table};
use roster_output::{write_csv_table, write_workbook_table};
use roster_transform::clean_table;
use roster_validate::validate_row;

/// Directory that `save` writes into when none is configured.
pub const DEFAULT_DATA_DIR: &str = "data";

/// Owns the in-memory table and the persistence bookkeeping around it.
///
/// The store is the single mutation path for the dataset: every edit
/// validates first, applies second, and persists immediately. Collaborators
/// only ever read the table through [`DatasetStore::table`].
#[derive(Debug)]
pub struct DatasetStore {
    table: Table,
    data_dir: PathBuf,
    file_name: Option<String>,
}

impl DatasetStore {
    pub fn new() -> Self {
        Self::with_data_dir(DEFAULT_DATA_DIR)
    }

    /// A store that saves under `data_dir` instead of the default directory.
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            table: Table::default(),
            data_dir: data_dir.into(),
            file_name: None,
        }
    }

    /// Read-only view of the current table.
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// The current column list, in file order.
    pub fn columns(&self) -> &[String] {
        &self.table.columns
    }

    /// Replace the table with the contents of `path` and remember the file's
    /// base name for later saves.
    pub fn load(&mut self, path: &Path) -> Result<()> {
        let table = read_table(path)?;
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .map(ToString::to_string)
            .ok_or_else(|| {
                RosterError::Read(format!("{}: path has no file name", path.display()))
            })?;
        info!(
            path = %path.display(),
            columns = table.columns.len(),
            rows = table.row_count(),
            "dataset loaded"
        );
        self.table = table;
        self.file_name = Some(file_name);
        Ok(())
    }

    /// Validate `row` and append it as the last row, then persist.
    ///
    /// Fails before touching the table: with a validation error when no
    /// dataset is loaded, when the row names an unknown column, or when a
    /// constraint is violated.
    pub fn add_row(&mut self, row: Row) -> Result<PathBuf> {
        self.ensure_loaded()?;
        self.check_known_columns(&row)?;
        validate_row(&row).map_err(|violation| RosterError::Validation(violation.to_string()))?;
        self.table.push_row(row);
        debug!(rows = self.table.row_count(), "row appended");
        self.save()
    }

    /// Overwrite only the columns present in `patch` for the row at `index`,
    /// then persist. Only the submitted columns are validated.
    pub fn update_row(&mut self, index: usize, patch: Row) -> Result<PathBuf> {
        self.ensure_loaded()?;
        if index >= self.table.row_count() {
            return Err(RosterError::Index(index));
        }
        self.check_known_columns(&patch)?;
        validate_row(&patch).map_err(|violation| RosterError::Validation(violation.to_string()))?;
        let row = &mut self.table.rows[index];
        for (column, value) in patch {
            row.insert(column, value);
        }
        debug!(index, "row updated");
        self.save()
    }

    /// Remove the row at `index`, then persist. Later rows shift down so
    /// indices stay a dense 0-based sequence.
    pub fn delete_row(&mut self, index: usize) -> Result<PathBuf> {
        self.ensure_loaded()?;
        if index >= self.table.row_count() {
            return Err(RosterError::Index(index));
        }
        self.table.rows.remove(index);
        debug!(index, rows = self.table.row_count(), "row deleted");
        self.save()
    }

    /// Run the cleaning pipeline over the table, swap the result in, and
    /// persist it.
    pub fn clean(&mut self) -> Result<PathBuf> {
        self.ensure_loaded()?;
        self.table = clean_table(&self.table);
        self.save()
    }

    /// Persist the table under the storage directory, named after the
    /// originally loaded file. The format follows that file's extension;
    /// an unrecognized extension falls back to CSV with `.csv` appended.
    /// Returns the written path.
    pub fn save(&self) -> Result<PathBuf> {
        let Some(file_name) = &self.file_name else {
            return Err(RosterError::Write(
                "no dataset loaded; nothing to save".to_string(),
            ));
        };
        fs::create_dir_all(&self.data_dir).map_err(|error| {
            RosterError::Write(format!("{}: {error}", self.data_dir.display()))
        })?;
        let target = self.data_dir.join(file_name);
        let target = match FileFormat::from_path(&target) {
            Some(FileFormat::Csv) => {
                write_csv_table(&target, &self.table)?;
                target
            }
            Some(FileFormat::Workbook) => {
                write_workbook_table(&target, &self.table)?;
                target
            }
            None => {
                let fallback = self.data_dir.join(format!("{file_name}.csv"));
                write_csv_table(&fallback, &self.table)?;
                fallback
            }
        };
        info!(path = %target.display(), rows = self.table.row_count(), "dataset saved");
        Ok(target)
    }

    fn ensure_loaded(&self) -> Result<()> {
        if self.table.is_empty() {
            return Err(RosterError::Validation("no dataset loaded".to_string()));
        }
        Ok(())
    }

    fn check_known_columns(&self, row: &Row) -> Result<()> {
        for column in row.keys() {
            if !self.table.has_column(column) {
                return Err(RosterError::Validation(format!(
                    "unknown column '{column}'"
                )));
            }
        }
        Ok(())
    }
}

impl Default for DatasetStore {
    fn default() -> Self {
        Self::new()
    }
}
