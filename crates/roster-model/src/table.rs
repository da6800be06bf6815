use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::Value;

/// One table row: column name to value. Column order lives on the table.
pub type Row = BTreeMap<String, Value>;

/// Build a row by running each raw text entry through the value parser.
pub fn row_from_entries<I, K, V>(entries: I) -> Row
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: AsRef<str>,
{
    entries
        .into_iter()
        .map(|(column, raw)| (column.into(), Value::parse(raw.as_ref())))
        .collect()
}

/// The in-memory dataset: an ordered column list and ordered rows.
///
/// The column set is whatever the loaded file declares. Rows may omit
/// columns; readers treat a missing key as an absent value. Row indices are
/// the dense 0-based positions in `rows`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|column| column == name)
    }

    /// Append a row, keeping only known columns.
    pub fn push_row(&mut self, row: Row) {
        let mut aligned = Row::new();
        for column in &self.columns {
            if let Some(value) = row.get(column) {
                aligned.insert(column.clone(), value.clone());
            }
        }
        self.rows.push(aligned);
    }

    /// The value at (`index`, `column`), absent when the cell is missing.
    pub fn value(&self, index: usize, column: &str) -> Value {
        self.rows
            .get(index)
            .and_then(|row| row.get(column))
            .cloned()
            .unwrap_or(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> Table {
        let mut table = Table::new(vec!["A".to_string(), "B".to_string()]);
        table.push_row(row_from_entries([("A", "1"), ("B", "x")]));
        table.push_row(row_from_entries([("A", "2"), ("B", "")]));
        table
    }

    #[test]
    fn push_row_drops_unknown_columns() {
        let mut table = sample_table();
        table.push_row(row_from_entries([("A", "3"), ("C", "stray")]));
        let last = table.rows.last().expect("pushed row");
        assert_eq!(last.get("A"), Some(&Value::Int(3)));
        assert!(!last.contains_key("C"));
    }

    #[test]
    fn value_reads_cells_and_absences() {
        let table = sample_table();
        assert_eq!(table.value(0, "B"), Value::Str("x".to_string()));
        assert_eq!(table.value(1, "B"), Value::Null);
        assert_eq!(table.value(9, "A"), Value::Null, "out of range reads absent");
    }

    #[test]
    fn row_from_entries_types_cells() {
        let row = row_from_entries([("Age", "22"), ("Fare", "7.25"), ("Name", "Braund")]);
        assert_eq!(row.get("Age"), Some(&Value::Int(22)));
        assert_eq!(row.get("Fare"), Some(&Value::Float(7.25)));
        assert_eq!(row.get("Name"), Some(&Value::Str("Braund".to_string())));
    }
}
