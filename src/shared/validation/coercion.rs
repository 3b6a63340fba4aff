//! Coercion of raw query-string values into loosely typed values.
//!
//! Query strings only carry text, so before a schema checks a field the raw
//! value is coerced: numeric-looking strings become numbers, `"true"` and
//! `"false"` become booleans, anything else stays a string.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum QueryValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl QueryValue {
    pub fn kind(&self) -> &'static str {
        match self {
            QueryValue::Bool(_) => "boolean",
            QueryValue::Number(_) => "number",
            QueryValue::Text(_) => "string",
        }
    }
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryValue::Bool(b) => write!(f, "{}", b),
            QueryValue::Number(n) => write!(f, "{}", n),
            QueryValue::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Coerce a single raw value
pub fn coerce(raw: &str) -> QueryValue {
    match raw {
        "true" => return QueryValue::Bool(true),
        "false" => return QueryValue::Bool(false),
        _ => {}
    }

    let trimmed = raw.trim();
    if !trimmed.is_empty() && looks_numeric(trimmed) {
        if let Ok(n) = trimmed.parse::<f64>() {
            if n.is_finite() {
                return QueryValue::Number(n);
            }
        }
    }

    QueryValue::Text(raw.to_string())
}

// `f64::from_str` also accepts "inf", "NaN" and "infinity"; only plain decimals count
fn looks_numeric(s: &str) -> bool {
    let digits = s.strip_prefix(['-', '+']).unwrap_or(s);
    !digits.is_empty()
        && digits.chars().any(|c| c.is_ascii_digit())
        && digits
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '-' | '+'))
}

/// Expect a boolean, failing with a message naming what was received
pub fn expect_bool(value: &QueryValue) -> Result<bool, String> {
    match value {
        QueryValue::Bool(b) => Ok(*b),
        other => Err(format!("Expected boolean, received {}", other.kind())),
    }
}

/// Expect an integer inside `min..=max`
pub fn expect_int_in_range(value: &QueryValue, min: i64, max: Option<i64>) -> Result<i64, String> {
    let n = match value {
        QueryValue::Number(n) => *n,
        other => return Err(format!("Expected number, received {}", other.kind())),
    };

    if n.fract() != 0.0 {
        return Err("Expected integer, received float".to_string());
    }
    if n < min as f64 {
        return Err(format!("Number must be greater than or equal to {}", min));
    }
    if let Some(max) = max {
        if n > max as f64 {
            return Err(format!("Number must be less than or equal to {}", max));
        }
    }

    Ok(n as i64)
}
