use std::path::Path;

/// Input/output file format, selected by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// Comma-separated text (`.csv`).
    Csv,
    /// Spreadsheet workbook (`.xlsx` or legacy `.xls`).
    Workbook,
}

impl FileFormat {
    /// Detect the format from the path's extension, if recognized.
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "csv" => Some(FileFormat::Csv),
            "xlsx" | "xls" => Some(FileFormat::Workbook),
            _ => None,
        }
    }
}
