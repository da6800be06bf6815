//! The fixed cleaning pipeline.
//!
//! Nine passes over a copied table, in an order later passes rely on:
//! identity rows are dropped before any fill statistic is computed, fills
//! run before deduplication and case normalization, and type coercion and
//! the sign clamp come last. Running the pipeline on its own output changes
//! nothing.

use std::collections::BTreeSet;

use tracing::debug;

use roster_model::{Table, Value, columns};

use crate::stats::{median, mode};

const IDENTITY_COLUMNS: [&str; 2] = [columns::PASSENGER_ID, columns::SURVIVED];
const COUNT_COLUMNS: [&str; 2] = [columns::SIBSP, columns::PARCH];
const CONTINUOUS_COLUMNS: [&str; 2] = [columns::AGE, columns::FARE];
const CATEGORICAL_COLUMNS: [&str; 2] = [columns::PCLASS, columns::EMBARKED];
const TEXT_COLUMNS: [&str; 5] = [
    columns::NAME,
    columns::SEX,
    columns::CABIN,
    columns::EMBARKED,
    columns::TICKET,
];
const MAGNITUDE_COLUMNS: [&str; 3] = [columns::FARE, columns::SIBSP, columns::PARCH];

const NO_INFO: &str = "no_info";

/// Run the full cleaning pipeline over a copy of `table`.
///
/// Every pass skips columns the table does not have.
pub fn clean_table(table: &Table) -> Table {
    let mut cleaned = table.clone();
    let rows_in = cleaned.row_count();

    drop_incomplete_identity(&mut cleaned);
    zero_fill_counts(&mut cleaned);
    median_fill_continuous(&mut cleaned);
    mode_fill_categorical(&mut cleaned);
    sentinel_fill_text(&mut cleaned);
    dedupe_by_passenger_id(&mut cleaned);
    normalize_case(&mut cleaned);
    coerce_types(&mut cleaned);
    clamp_to_absolute(&mut cleaned);

    debug!(
        rows_in,
        rows_out = cleaned.row_count(),
        "cleaning pipeline complete"
    );
    cleaned
}

/// Step 1: rows missing an identity value cannot be curated; drop them.
fn drop_incomplete_identity(table: &mut Table) {
    let mut identity: Vec<String> = Vec::new();
    for column in IDENTITY_COLUMNS {
        if table.has_column(column) {
            identity.push(column.to_string());
        }
    }
    if identity.is_empty() {
        return;
    }
    table.rows.retain(|row| {
        identity
            .iter()
            .all(|column| row.get(column).is_some_and(|value| !value.is_null()))
    });
}

/// Step 2: absent companion counts mean zero companions.
fn zero_fill_counts(table: &mut Table) {
    for column in COUNT_COLUMNS {
        fill_absent(table, column, || Value::Int(0));
    }
}

/// Step 3: fill absent continuous values with the column median, computed
/// over the rows that survived step 1 and before anything else touches the
/// column.
fn median_fill_continuous(table: &mut Table) {
    for column in CONTINUOUS_COLUMNS {
        if !table.has_column(column) {
            continue;
        }
        let samples: Vec<f64> = table
            .rows
            .iter()
            .filter_map(|row| row.get(column).and_then(Value::as_f64))
            .collect();
        let Some(fill) = median(&samples) else {
            continue;
        };
        fill_absent(table, column, || Value::Float(fill));
    }
}

/// Step 4: fill absent categorical values with the column mode.
fn mode_fill_categorical(table: &mut Table) {
    for column in CATEGORICAL_COLUMNS {
        if !table.has_column(column) {
            continue;
        }
        let fill = mode(
            table
                .rows
                .iter()
                .filter_map(|row| row.get(column))
                .filter(|value| !value.is_null()),
        );
        let Some(fill) = fill else {
            continue;
        };
        fill_absent(table, column, || fill.clone());
    }
}

/// Step 5: any text cell still absent gets the sentinel string.
fn sentinel_fill_text(table: &mut Table) {
    for column in TEXT_COLUMNS {
        fill_absent(table, column, || Value::Str(NO_INFO.to_string()));
    }
}

/// Step 6: keep the first row for each PassengerId, in current row order.
fn dedupe_by_passenger_id(table: &mut Table) {
    if !table.has_column(columns::PASSENGER_ID) {
        return;
    }
    let mut seen = BTreeSet::new();
    table.rows.retain(|row| {
        let key = row
            .get(columns::PASSENGER_ID)
            .map(ToString::to_string)
            .unwrap_or_default();
        seen.insert(key)
    });
}

/// Step 7: canonical case for the two enumerated text columns.
fn normalize_case(table: &mut Table) {
    rewrite_column(table, columns::SEX, |value| {
        Value::Str(value.to_string().trim().to_lowercase())
    });
    rewrite_column(table, columns::EMBARKED, |value| {
        Value::Str(value.to_string().trim().to_uppercase())
    });
}

/// Step 8: ages become whole years, PassengerId becomes text.
fn coerce_types(table: &mut Table) {
    rewrite_column(table, columns::AGE, |value| match value {
        Value::Float(age) => Value::Int(*age as i64),
        other => other.clone(),
    });
    rewrite_column(table, columns::PASSENGER_ID, |value| {
        Value::Str(value.to_string())
    });
}

/// Step 9: magnitudes cannot be negative; take absolute values.
fn clamp_to_absolute(table: &mut Table) {
    for column in MAGNITUDE_COLUMNS {
        rewrite_column(table, column, |value| match value {
            Value::Int(int) => Value::Int(int.abs()),
            Value::Float(float) => Value::Float(float.abs()),
            other => other.clone(),
        });
    }
}

/// Replace absent cells of `column` with `fill`'s result, row by row.
fn fill_absent<F>(table: &mut Table, column: &str, fill: F)
where
    F: Fn() -> Value,
{
    if !table.has_column(column) {
        return;
    }
    for row in &mut table.rows {
        if row.get(column).is_none_or(Value::is_null) {
            row.insert(column.to_string(), fill());
        }
    }
}

/// Rewrite every present, non-absent cell of `column`.
fn rewrite_column<F>(table: &mut Table, column: &str, rewrite: F)
where
    F: Fn(&Value) -> Value,
{
    if !table.has_column(column) {
        return;
    }
    for row in &mut table.rows {
        if let Some(value) = row.get_mut(column)
            && !value.is_null()
        {
            *value = rewrite(value);
        }
    }
}
