use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Structured validation failure returned at the HTTP boundary.
///
/// Serialises as `{ "error": "...", "details": { "field": ["message", ...] } }`
/// so every failing field is reported in one response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors {
    pub error: String,
    pub details: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: BTreeMap::new(),
        }
    }

    /// Record a failure for `field`; a field may collect several messages
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.details
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn with_field(mut self, field: &str, message: impl Into<String>) -> Self {
        self.add(field, message);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.details.is_empty()
    }

    pub fn field(&self, field: &str) -> Option<&[String]> {
        self.details.get(field).map(Vec::as_slice)
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.details.contains_key(field)
    }

    /// Ok(value) when nothing was recorded, otherwise the collected errors
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;
        let mut first = true;
        for (field, messages) in &self.details {
            let sep = if first { ": " } else { "; " };
            first = false;
            write!(f, "{}{} ({})", sep, field, messages.join(", "))?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}
