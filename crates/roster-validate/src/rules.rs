//! The fixed per-column rule set applied before any row insert or update.
//!
//! Only columns present in the candidate row are checked, so a partial
//! update is validated exactly like an insert: against what it submits,
//! nothing more. Checks run in a fixed column order and stop at the first
//! violation.

use std::fmt;

use roster_model::{Row, Value, columns};

/// A violated constraint; the message names the failing column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub column: &'static str,
    pub message: String,
}

impl Violation {
    fn new(column: &'static str, message: String) -> Self {
        Self { column, message }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

const MAX_AGE: f64 = 146.0;

/// Check a candidate row against the rule set.
///
/// Returns the first violation in rule order, or `Ok` when every submitted
/// column satisfies its constraint. Never mutates the row.
pub fn validate_row(row: &Row) -> Result<(), Violation> {
    if let Some(value) = row.get(columns::SURVIVED) {
        check_membership(columns::SURVIVED, value, &["0", "1"])?;
    }
    if let Some(value) = row.get(columns::PCLASS) {
        check_membership(columns::PCLASS, value, &["1", "2", "3"])?;
    }
    if let Some(value) = row.get(columns::SEX) {
        check_sex(value)?;
    }
    if let Some(value) = row.get(columns::AGE) {
        check_age(value)?;
    }
    for column in [columns::SIBSP, columns::PARCH, columns::FARE] {
        if let Some(value) = row.get(column) {
            check_non_negative(column, value)?;
        }
    }
    Ok(())
}

fn check_membership(
    column: &'static str,
    value: &Value,
    allowed: &[&str],
) -> Result<(), Violation> {
    let form = value.to_string();
    if allowed.contains(&form.as_str()) {
        return Ok(());
    }
    let choices = allowed.join(" or ");
    Err(Violation::new(
        column,
        format!("column '{column}' accepts only {choices}"),
    ))
}

fn check_sex(value: &Value) -> Result<(), Violation> {
    let form = value.to_string().trim().to_lowercase();
    if form == "male" || form == "female" {
        return Ok(());
    }
    Err(Violation::new(
        columns::SEX,
        format!("column '{}' accepts only 'male' or 'female'", columns::SEX),
    ))
}

fn check_age(value: &Value) -> Result<(), Violation> {
    let Some(age) = value.as_f64() else {
        return Err(Violation::new(
            columns::AGE,
            format!("column '{}' must be numeric", columns::AGE),
        ));
    };
    if age > 0.0 && age <= MAX_AGE {
        return Ok(());
    }
    Err(Violation::new(
        columns::AGE,
        format!(
            "column '{}' must be greater than 0 and at most {MAX_AGE}",
            columns::AGE
        ),
    ))
}

fn check_non_negative(column: &'static str, value: &Value) -> Result<(), Violation> {
    let Some(number) = value.as_f64() else {
        return Err(Violation::new(
            column,
            format!("column '{column}' must be numeric"),
        ));
    };
    if number >= 0.0 {
        return Ok(());
    }
    Err(Violation::new(
        column,
        format!("column '{column}' cannot be negative"),
    ))
}
