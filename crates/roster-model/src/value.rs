use std::fmt;

use serde::{Deserialize, Serialize};

/// A single cell value with the dynamic typing of the source file.
///
/// `Null` is an absent cell, distinct from an empty string or zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum Value {
    Null,
    Int(i64),
    Float(f64),
    Str(String),
}

impl Value {
    /// Convert raw form input into a typed value.
    ///
    /// Whitespace is trimmed first; an empty result is [`Value::Null`].
    /// Otherwise an integer parse is attempted, then a float parse, and
    /// anything else keeps the trimmed text unchanged. Never fails.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Value::Null;
        }
        if let Ok(int) = trimmed.parse::<i64>() {
            return Value::Int(int);
        }
        if let Ok(float) = trimmed.parse::<f64>() {
            return Value::Float(float);
        }
        Value::Str(trimmed.to_string())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Numeric view of the value. Strings never coerce, even numeric-looking
    /// ones; they were already given their chance in [`Value::parse`].
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(int) => Some(*int as f64),
            Value::Float(float) => Some(*float),
            Value::Null | Value::Str(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Int(int) => write!(f, "{int}"),
            Value::Float(float) => f.write_str(&format_numeric(*float)),
            Value::Str(text) => f.write_str(text),
        }
    }
}

/// Formats a floating-point number as a string without trailing zeros.
///
/// `1.0` renders as `"1"` and `1.50` as `"1.5"`, so a whole-number float and
/// the equal integer share a string form.
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
