use serde::Serialize;
use thiserror::Error;

use crate::modules::course::domain::errors::{DomainError, RepositoryError};
use crate::shared::validation::ValidationErrors;

#[derive(Error, Debug, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(ValidationErrors),

    #[error("Domain error: {0}")]
    DomainError(DomainError),

    #[error("Repository error: {0}")]
    RepositoryError(RepositoryError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl AppError {
    /// HTTP-equivalent status for the boundary layer
    pub fn status_code(&self) -> u16 {
        match self {
            AppError::ValidationError(_) => 400,
            AppError::DomainError(_) => 422,
            AppError::NotFound(_) => 404,
            AppError::Conflict(_) => 409,
            AppError::ServiceUnavailable(_) => 503,
            AppError::RepositoryError(_)
            | AppError::ConfigError(_)
            | AppError::InternalError(_) => 500,
        }
    }

    /// Whether the caller can fix the request and try again
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code())
    }
}

impl From<ValidationErrors> for AppError {
    fn from(err: ValidationErrors) -> Self {
        AppError::ValidationError(err)
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        AppError::DomainError(err)
    }
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::DuplicateSlug(slug) => {
                AppError::Conflict(format!("A course with slug '{}' already exists", slug))
            }
            other => AppError::RepositoryError(other),
        }
    }
}

impl From<diesel::r2d2::PoolError> for AppError {
    fn from(err: diesel::r2d2::PoolError) -> Self {
        AppError::ServiceUnavailable(format!("Database pool error: {}", err))
    }
}

impl From<std::num::ParseIntError> for AppError {
    fn from(err: std::num::ParseIntError) -> Self {
        AppError::ConfigError(format!("Invalid number: {}", err))
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_slug_becomes_conflict() {
        let err: AppError = RepositoryError::DuplicateSlug("rust-101".to_string()).into();
        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(err.status_code(), 409);
    }

    #[test]
    fn test_storage_faults_are_server_errors() {
        let err: AppError = RepositoryError::Connection("refused".to_string()).into();
        assert_eq!(err.status_code(), 500);
        assert!(!err.is_client_error());
    }

    #[test]
    fn test_serializes_with_type_tag() {
        let err = AppError::NotFound("Course abc".to_string());
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["type"], "NotFound");
        assert_eq!(json["message"], "Course abc");
    }
}
