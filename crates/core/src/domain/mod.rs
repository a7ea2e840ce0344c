// Domain Layer - Pure business logic and entities

pub mod error;
pub mod job;
pub mod query;

// Re-exports
pub use error::DomainError;
pub use job::{
    Job, JobDraft, JobFields, JobId, DEFAULT_ADDRESS, DEFAULT_DEADLINE, DEFAULT_EDUCATION,
    DEFAULT_EXPERIENCE, DEFAULT_REQUIRE_PERSON,
};
pub use query::{DistinctField, FieldValue, JobFilter, SortField, SortOrder};
