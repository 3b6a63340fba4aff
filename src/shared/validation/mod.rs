//! Boundary validation shared across modules: value coercion for raw query
//! strings, declarative schemas and the structured error payload they report.

pub mod coercion;
pub mod schema;
pub mod validation_errors;

pub use coercion::{coerce, QueryValue};
pub use schema::{FieldKind, FieldSpec, FieldValue, ParsedParams, Schema};
pub use validation_errors::ValidationErrors;

use std::collections::HashMap;

/// Raw key/value pairs as they arrive from a query string
pub type RawParams = HashMap<String, String>;
