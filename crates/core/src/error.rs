// Central Error Type for the Application

use crate::domain::DomainError;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Caller input was rejected: unknown field names, wrong field count,
    /// over-long filter values, undecodable request bodies
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Status code carried in the response envelope (and on the HTTP response)
    pub fn status_code(&self) -> u16 {
        match self {
            AppError::InvalidArgument(_) => 400,
            AppError::NotFound(_) => 404,
            _ => 500,
        }
    }

    /// Message that is safe to hand back to a caller.
    ///
    /// Client errors echo their detail; server-side failures are reduced to a
    /// generic message so driver or SQL text never reaches the response body.
    pub fn public_message(&self) -> String {
        match self {
            AppError::InvalidArgument(msg) | AppError::NotFound(msg) => msg.clone(),
            AppError::Database(_) => "database error".to_string(),
            _ => "internal server error".to_string(),
        }
    }
}

/// Every domain rule violation is a caller mistake
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        AppError::InvalidArgument(err.to_string())
    }
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::InvalidArgument("x".into()).status_code(), 400);
        assert_eq!(AppError::NotFound("x".into()).status_code(), 404);
        assert_eq!(AppError::Database("x".into()).status_code(), 500);
        assert_eq!(AppError::Internal("x".into()).status_code(), 500);
    }

    #[test]
    fn test_domain_errors_become_invalid_argument() {
        let err = AppError::from(DomainError::UnknownSortField("salary".into()));

        assert!(matches!(err, AppError::InvalidArgument(_)));
        assert_eq!(err.status_code(), 400);
        assert!(err.public_message().contains("salary"));
    }

    #[test]
    fn test_database_detail_is_not_exposed() {
        let err = AppError::Database("UNIQUE constraint failed: jobs.id (2067)".into());
        assert_eq!(err.public_message(), "database error");
        assert!(err.to_string().contains("UNIQUE"));
    }
}
