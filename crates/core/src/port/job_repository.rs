// Job Repository Port (Interface)

use crate::domain::{DistinctField, FieldValue, Job, JobDraft, JobFilter, JobId, SortField, SortOrder};
use crate::error::Result;
use async_trait::async_trait;

/// Record store operations for Job persistence.
///
/// Implementations run every call on an open transaction; see
/// [`crate::port::TransactionalJobRepository`]. Multi-row selects return a
/// deterministic order: sorted selects break ties on `id` ascending, all
/// others list newest `create_time` first, then `id` ascending.
#[async_trait]
pub trait JobRepository: Send {
    /// Insert a new job, assigning `id` (if absent) and `create_time`
    async fn insert(&mut self, draft: &JobDraft) -> Result<Job>;

    /// Replace every editable column of an existing job
    async fn update(&mut self, job: &Job) -> Result<Option<Job>>;

    /// Delete by ID in a single statement; returns the removed job, if any
    async fn delete_by_id(&mut self, id: &JobId) -> Result<Option<Job>>;

    /// Find job by ID
    async fn select_by_id(&mut self, id: &JobId) -> Result<Option<Job>>;

    async fn select_by_company(&mut self, company: &str) -> Result<Vec<Job>>;

    async fn select_by_address(&mut self, address: &str) -> Result<Vec<Job>>;

    async fn select_by_type(&mut self, job_type: &str) -> Result<Vec<Job>>;

    /// Substring match on name; wildcard characters match literally
    async fn select_by_name_like(&mut self, fragment: &str) -> Result<Vec<Job>>;

    /// AND of the supplied predicates; an empty filter selects everything
    async fn select_by_fields(&mut self, filter: &JobFilter) -> Result<Vec<Job>>;

    /// All jobs ordered by `field`
    async fn select_ordered(&mut self, field: SortField, order: SortOrder) -> Result<Vec<Job>>;

    /// Distinct values of a single column, ascending
    async fn select_distinct(&mut self, field: DistinctField) -> Result<Vec<FieldValue>>;
}
