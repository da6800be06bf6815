use std::fs;

use roster_ingest::{read_csv_table, read_workbook_table};
use roster_model::{Table, Value, row_from_entries};
use roster_output::{write_csv_table, write_workbook_table};

fn sample_table() -> Table {
    let mut table = Table::new(vec![
        "PassengerId".to_string(),
        "Name".to_string(),
        "Age".to_string(),
        "Fare".to_string(),
    ]);
    table.push_row(row_from_entries([
        ("PassengerId", "1"),
        ("Name", "Braund"),
        ("Age", "22"),
        ("Fare", "7.25"),
    ]));
    table.push_row(row_from_entries([
        ("PassengerId", "2"),
        ("Name", "Cumings"),
        ("Age", ""),
        ("Fare", "71.2833"),
    ]));
    table
}

#[test]
fn csv_writer_emits_header_and_empty_fields() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("out.csv");
    write_csv_table(&path, &sample_table()).expect("write csv");

    let contents = fs::read_to_string(&path).expect("read back");
    let mut lines = contents.lines();
    assert_eq!(lines.next(), Some("PassengerId,Name,Age,Fare"));
    assert_eq!(lines.next(), Some("1,Braund,22,7.25"));
    assert_eq!(lines.next(), Some("2,Cumings,,71.2833"));
}

#[test]
fn csv_output_loads_back_identically() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("out.csv");
    let table = sample_table();
    write_csv_table(&path, &table).expect("write csv");

    let loaded = read_csv_table(&path).expect("read back");
    assert_eq!(loaded, table);
}

#[test]
fn workbook_output_loads_back_with_types() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("out.xlsx");
    let table = sample_table();
    write_workbook_table(&path, &table).expect("write workbook");

    let loaded = read_workbook_table(&path).expect("read back");
    assert_eq!(loaded.columns, table.columns);
    assert_eq!(loaded.row_count(), 2);
    assert_eq!(loaded.value(0, "PassengerId"), Value::Int(1));
    assert_eq!(loaded.value(0, "Fare"), Value::Float(7.25));
    assert_eq!(loaded.value(1, "Age"), Value::Null);
    assert_eq!(loaded.value(1, "Name"), Value::Str("Cumings".to_string()));
}
