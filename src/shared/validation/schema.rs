//! Declarative parameter schemas.
//!
//! A `Schema` is a static table of fields and the rule each must satisfy.
//! `Schema::parse` checks every field and either returns the typed values or
//! a `ValidationErrors` listing every failing field. Malformed input never
//! panics.

use std::collections::BTreeMap;
use std::fmt;

use super::coercion::{coerce, expect_bool, expect_int_in_range};
use super::{RawParams, ValidationErrors};
use crate::log_debug;

#[derive(Clone, Copy)]
pub enum FieldKind {
    /// `"true"` / `"false"`
    Boolean,
    /// Whole number inside `min..=max`
    Integer { min: i64, max: Option<i64> },
    /// One of a closed set of strings, matched exactly
    OneOf(&'static [&'static str]),
    /// Free text accepted by `check`
    Matches {
        check: fn(&str) -> bool,
        message: &'static str,
    },
}

impl fmt::Debug for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Boolean => write!(f, "Boolean"),
            FieldKind::Integer { min, max } => write!(f, "Integer({}..={:?})", min, max),
            FieldKind::OneOf(allowed) => write!(f, "OneOf({:?})", allowed),
            FieldKind::Matches { message, .. } => write!(f, "Matches({:?})", message),
        }
    }
}

impl FieldKind {
    fn check(&self, raw: &str) -> Result<FieldValue, String> {
        match self {
            FieldKind::Boolean => expect_bool(&coerce(raw)).map(FieldValue::Bool),
            FieldKind::Integer { min, max } => {
                expect_int_in_range(&coerce(raw), *min, *max).map(FieldValue::Int)
            }
            FieldKind::OneOf(allowed) => {
                if allowed.contains(&raw) {
                    Ok(FieldValue::Text(raw.to_string()))
                } else {
                    let expected = allowed
                        .iter()
                        .map(|v| format!("'{}'", v))
                        .collect::<Vec<_>>()
                        .join(" | ");
                    Err(format!(
                        "Invalid enum value. Expected {}, received '{}'",
                        expected, raw
                    ))
                }
            }
            FieldKind::Matches { check, message } => {
                if check(raw) {
                    Ok(FieldValue::Text(raw.to_string()))
                } else {
                    Err((*message).to_string())
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
        }
    }

    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Bool(bool),
    Int(i64),
    Text(String),
}

#[derive(Debug, Clone, Copy)]
pub struct Schema {
    pub name: &'static str,
    /// Top-level message of the error payload
    pub error: &'static str,
    pub fields: &'static [FieldSpec],
}

/// Values that passed a schema, keyed by field name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedParams {
    values: BTreeMap<&'static str, FieldValue>,
}

impl ParsedParams {
    pub fn bool(&self, name: &str) -> Option<bool> {
        match self.values.get(name) {
            Some(FieldValue::Bool(b)) => Some(*b),
            _ => None,
        }
    }

    pub fn int(&self, name: &str) -> Option<i64> {
        match self.values.get(name) {
            Some(FieldValue::Int(n)) => Some(*n),
            _ => None,
        }
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        match self.values.get(name) {
            Some(FieldValue::Text(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Schema {
    pub fn parse(&self, raw: &RawParams) -> Result<ParsedParams, ValidationErrors> {
        let mut errors = ValidationErrors::new(self.error);
        let mut parsed = ParsedParams::default();

        for field in self.fields {
            match raw.get(field.name) {
                None if field.required => errors.add(field.name, "Required"),
                None => {}
                Some(value) => match field.kind.check(value) {
                    Ok(v) => {
                        parsed.values.insert(field.name, v);
                    }
                    Err(message) => errors.add(field.name, message),
                },
            }
        }

        for key in raw.keys() {
            if !self.fields.iter().any(|f| f.name == key) {
                log_debug!("{}: ignoring unknown parameter '{}'", self.name, key);
            }
        }

        errors.into_result(parsed)
    }

    /// Validate a single value against the named field
    pub fn parse_single(&self, field: &str, value: &str) -> Result<ParsedParams, ValidationErrors> {
        let mut raw = RawParams::new();
        raw.insert(field.to_string(), value.to_string());
        self.parse(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLORS: &[&str] = &["red", "green"];

    fn three_chars(s: &str) -> bool {
        s.len() == 3
    }

    const TEST_SCHEMA: Schema = Schema {
        name: "test",
        error: "Invalid parameters",
        fields: &[
            FieldSpec::optional("flag", FieldKind::Boolean),
            FieldSpec::optional(
                "size",
                FieldKind::Integer {
                    min: 1,
                    max: Some(10),
                },
            ),
            FieldSpec::optional("color", FieldKind::OneOf(COLORS)),
            FieldSpec::required(
                "code",
                FieldKind::Matches {
                    check: three_chars,
                    message: "Code must have three characters",
                },
            ),
        ],
    };

    fn params(pairs: &[(&str, &str)]) -> RawParams {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_parses_typed_values() {
        let parsed = TEST_SCHEMA
            .parse(&params(&[
                ("flag", "true"),
                ("size", "4"),
                ("color", "red"),
                ("code", "abc"),
                ("unknown", "ignored"),
            ]))
            .unwrap();

        assert_eq!(parsed.bool("flag"), Some(true));
        assert_eq!(parsed.int("size"), Some(4));
        assert_eq!(parsed.text("color"), Some("red"));
        assert_eq!(parsed.text("code"), Some("abc"));
        assert_eq!(parsed.len(), 4);
    }

    #[test]
    fn test_reports_every_failing_field() {
        let errors = TEST_SCHEMA
            .parse(&params(&[("flag", "maybe"), ("size", "11"), ("color", "blue")]))
            .unwrap_err();

        assert_eq!(errors.error, "Invalid parameters");
        assert!(errors.has_field("flag"));
        assert!(errors.has_field("size"));
        assert!(errors.has_field("color"));
        assert_eq!(errors.field("code"), Some(&["Required".to_string()][..]));
    }

    #[test]
    fn test_enum_message_lists_options() {
        let errors = TEST_SCHEMA
            .parse(&params(&[("color", "blue"), ("code", "abc")]))
            .unwrap_err();
        assert_eq!(
            errors.field("color").unwrap()[0],
            "Invalid enum value. Expected 'red' | 'green', received 'blue'"
        );
    }
}
