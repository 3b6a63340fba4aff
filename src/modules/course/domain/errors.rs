use serde::Serialize;
use thiserror::Error;

/// Rejected construction of a value object or aggregate
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "detail")]
pub enum DomainError {
    #[error("Amount must be a non-negative number, got {0}")]
    InvalidAmount(f64),

    #[error("Currency code cannot be empty")]
    InvalidCurrency,

    #[error("Cannot combine {expected} with {found}")]
    CurrencyMismatch { expected: String, found: String },

    #[error("Multiplication factor must be non-negative, got {0}")]
    InvalidFactor(f64),

    #[error("Duration cannot be negative, got {0}")]
    NegativeDuration(f64),

    #[error("Unknown duration unit '{0}' (expected minutes, hours or days)")]
    InvalidUnit(String),

    #[error("Duration of {0} minutes is too large")]
    DurationOutOfRange(f64),

    #[error("Invalid slug '{0}': use lowercase letters, digits and single hyphens")]
    InvalidSlug(String),

    #[error("Invalid title: {0}")]
    InvalidTitle(String),

    #[error("Invalid instructor: {0}")]
    InvalidInstructor(String),

    #[error("Invalid course id '{0}'")]
    InvalidCourseId(String),

    #[error("Unknown difficulty '{0}'")]
    InvalidDifficulty(String),
}

/// Storage or transport fault raised by a repository adapter
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail")]
pub enum RepositoryError {
    #[error("Storage connection failed: {0}")]
    Connection(String),

    #[error("Storage query failed: {0}")]
    Query(String),

    #[error("Slug '{0}' is already used by another course")]
    DuplicateSlug(String),

    #[error("Stored record {id} is invalid: {reason}")]
    CorruptRecord { id: String, reason: String },

    #[error("Background task failed: {0}")]
    TaskJoin(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
