// Domain Error Types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Unknown sort field '{0}' (expected create_time, deadline or require_person)")]
    UnknownSortField(String),

    #[error("Unknown sort order '{0}' (expected asc or desc)")]
    UnknownSortOrder(String),

    #[error("Unknown field '{0}'")]
    UnknownField(String),

    #[error("Exactly one field must be requested, got {0}")]
    FieldCount(usize),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

pub type Result<T> = std::result::Result<T, DomainError>;
