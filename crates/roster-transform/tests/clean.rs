use roster_model::{Table, Value, row_from_entries};
use roster_transform::clean_table;

fn titanic_columns() -> Vec<String> {
    [
        "PassengerId",
        "Survived",
        "Pclass",
        "Name",
        "Sex",
        "Age",
        "SibSp",
        "Parch",
        "Ticket",
        "Fare",
        "Cabin",
        "Embarked",
    ]
    .iter()
    .map(|column| (*column).to_string())
    .collect()
}

fn row(cells: &[(&str, &str)]) -> roster_model::Row {
    row_from_entries(cells.iter().map(|(column, raw)| (*column, *raw)))
}

#[test]
fn drops_rows_missing_identity_values() {
    let mut table = Table::new(titanic_columns());
    table.push_row(row(&[("PassengerId", "1"), ("Survived", "0")]));
    table.push_row(row(&[("PassengerId", ""), ("Survived", "1")]));
    table.push_row(row(&[("PassengerId", "3"), ("Survived", "")]));

    let cleaned = clean_table(&table);
    assert_eq!(cleaned.row_count(), 1);
    assert_eq!(cleaned.value(0, "PassengerId"), Value::Str("1".to_string()));
}

#[test]
fn zero_fills_counts_and_sentinel_fills_text() {
    let mut table = Table::new(titanic_columns());
    table.push_row(row(&[
        ("PassengerId", "1"),
        ("Survived", "0"),
        ("Name", "Braund"),
    ]));

    let cleaned = clean_table(&table);
    assert_eq!(cleaned.value(0, "SibSp"), Value::Int(0));
    assert_eq!(cleaned.value(0, "Parch"), Value::Int(0));
    assert_eq!(cleaned.value(0, "Cabin"), Value::Str("no_info".to_string()));
    assert_eq!(cleaned.value(0, "Ticket"), Value::Str("no_info".to_string()));
    assert_eq!(cleaned.value(0, "Name"), Value::Str("Braund".to_string()));
}

#[test]
fn median_fills_age_then_truncates() {
    let mut table = Table::new(titanic_columns());
    table.push_row(row(&[("PassengerId", "1"), ("Survived", "0"), ("Age", "20")]));
    table.push_row(row(&[("PassengerId", "2"), ("Survived", "1"), ("Age", "25")]));
    table.push_row(row(&[("PassengerId", "3"), ("Survived", "1"), ("Age", "")]));

    let cleaned = clean_table(&table);
    // median of [20, 25] interpolates to 22.5, truncated to 22 by coercion.
    assert_eq!(cleaned.value(2, "Age"), Value::Int(22));
    assert_eq!(cleaned.value(0, "Age"), Value::Int(20));
}

#[test]
fn mode_fills_embarked_with_first_seen_tie_break() {
    let mut table = Table::new(titanic_columns());
    table.push_row(row(&[
        ("PassengerId", "1"),
        ("Survived", "0"),
        ("Embarked", "C"),
    ]));
    table.push_row(row(&[
        ("PassengerId", "2"),
        ("Survived", "0"),
        ("Embarked", "S"),
    ]));
    table.push_row(row(&[("PassengerId", "3"), ("Survived", "0"), ("Embarked", "")]));

    let cleaned = clean_table(&table);
    // C and S tie at one occurrence each; C was seen first.
    assert_eq!(cleaned.value(2, "Embarked"), Value::Str("C".to_string()));
}

#[test]
fn dedupes_by_passenger_id_keeping_first() {
    let mut table = Table::new(titanic_columns());
    table.push_row(row(&[
        ("PassengerId", "7"),
        ("Survived", "0"),
        ("Name", "first"),
    ]));
    table.push_row(row(&[
        ("PassengerId", "7"),
        ("Survived", "1"),
        ("Name", "second"),
    ]));
    table.push_row(row(&[
        ("PassengerId", "8"),
        ("Survived", "1"),
        ("Name", "third"),
    ]));

    let cleaned = clean_table(&table);
    assert_eq!(cleaned.row_count(), 2);
    assert_eq!(cleaned.value(0, "Name"), Value::Str("first".to_string()));
    assert_eq!(cleaned.value(1, "Name"), Value::Str("third".to_string()));
}

#[test]
fn normalizes_case_and_clamps_magnitudes() {
    let mut table = Table::new(titanic_columns());
    table.push_row(row(&[
        ("PassengerId", "1"),
        ("Survived", "0"),
        ("Sex", "  Male "),
        ("Embarked", "s"),
        ("Fare", "-7.25"),
        ("SibSp", "-2"),
    ]));

    let cleaned = clean_table(&table);
    assert_eq!(cleaned.value(0, "Sex"), Value::Str("male".to_string()));
    assert_eq!(cleaned.value(0, "Embarked"), Value::Str("S".to_string()));
    assert_eq!(cleaned.value(0, "Fare"), Value::Float(7.25));
    assert_eq!(cleaned.value(0, "SibSp"), Value::Int(2));
}

#[test]
fn passenger_id_becomes_text() {
    let mut table = Table::new(titanic_columns());
    table.push_row(row(&[("PassengerId", "42"), ("Survived", "1")]));

    let cleaned = clean_table(&table);
    assert_eq!(cleaned.value(0, "PassengerId"), Value::Str("42".to_string()));
}

#[test]
fn cleaning_is_idempotent() {
    let mut table = Table::new(titanic_columns());
    table.push_row(row(&[
        ("PassengerId", "1"),
        ("Survived", "0"),
        ("Pclass", "3"),
        ("Name", "Braund, Mr. Owen"),
        ("Sex", "MALE"),
        ("Age", "22"),
        ("Fare", "-7.25"),
        ("Embarked", "s"),
    ]));
    table.push_row(row(&[
        ("PassengerId", "2"),
        ("Survived", "1"),
        ("Pclass", ""),
        ("Sex", "female"),
        ("Age", ""),
        ("Fare", "71.2833"),
        ("Embarked", ""),
    ]));
    table.push_row(row(&[("PassengerId", ""), ("Survived", "1")]));
    table.push_row(row(&[
        ("PassengerId", "1"),
        ("Survived", "0"),
        ("Sex", "male"),
    ]));

    let once = clean_table(&table);
    let twice = clean_table(&once);
    assert_eq!(twice, once);
}

#[test]
fn skips_columns_the_table_does_not_have() {
    let mut table = Table::new(vec!["Alpha".to_string(), "Beta".to_string()]);
    table.push_row(row(&[("Alpha", "1"), ("Beta", "")]));

    let cleaned = clean_table(&table);
    assert_eq!(cleaned.row_count(), 1);
    assert_eq!(cleaned.value(0, "Beta"), Value::Null);
}
