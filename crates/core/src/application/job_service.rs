// Job Service - validation and orchestration over the DAO

use crate::application::job_dao::JobDao;
use crate::domain::{
    DistinctField, FieldValue, Job, JobDraft, JobFields, JobFilter, JobId, SortField, SortOrder,
};
use crate::error::{AppError, Result};
use crate::port::TransactionalJobRepository;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info, warn};

/// Full-record replacement keyed by id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateJobRequest {
    pub id: JobId,
    #[serde(flatten)]
    pub fields: JobFields,
}

/// Job Service
#[derive(Clone)]
pub struct JobService {
    dao: JobDao,
}

impl JobService {
    pub fn new(store: Arc<dyn TransactionalJobRepository>) -> Self {
        Self {
            dao: JobDao::new(store),
        }
    }

    /// All jobs, newest first
    pub async fn list_jobs(&self) -> Result<Vec<Job>> {
        self.dao
            .get_ordered_jobs(SortField::CreateTime, SortOrder::Desc)
            .await
            .inspect_err(|e| error!(error = %e, "list_jobs failed"))
    }

    pub async fn get_job(&self, id: JobId) -> Result<Job> {
        self.dao
            .select_job_by_id(id)
            .await
            .and_then(|job| job.ok_or_else(|| not_found(&id)))
            .inspect_err(|e| error!(job_id = %id, error = %e, "get_job failed"))
    }

    pub async fn create_job(&self, fields: JobFields) -> Result<Job> {
        let job = self
            .dao
            .create_job(JobDraft::new(fields))
            .await
            .inspect_err(|e| error!(error = %e, "create_job failed"))?;

        info!(job_id = %job.id, "Job created");
        Ok(job)
    }

    /// Look up the stored job, overwrite its editable fields with the
    /// request's values, and persist. `id` and `create_time` are kept.
    pub async fn update_job(&self, req: UpdateJobRequest) -> Result<Job> {
        let id = req.id;
        let job = self
            .apply_update(req)
            .await
            .inspect_err(|e| error!(job_id = %id, error = %e, "update_job failed"))?;

        info!(job_id = %id, "Job updated");
        Ok(job)
    }

    async fn apply_update(&self, req: UpdateJobRequest) -> Result<Job> {
        let mut job = self
            .dao
            .select_job_by_id(req.id)
            .await?
            .ok_or_else(|| not_found(&req.id))?;

        job.apply(req.fields);

        self.dao
            .update_job(job)
            .await?
            .ok_or_else(|| not_found(&req.id))
    }

    /// Hard delete; deleting an unknown id is not an error
    pub async fn delete_job(&self, id: JobId) -> Result<Option<Job>> {
        let removed = self
            .dao
            .delete_job_by_id(id)
            .await
            .inspect_err(|e| error!(job_id = %id, error = %e, "delete_job failed"))?;

        info!(job_id = %id, found = removed.is_some(), "Job deleted");
        Ok(removed)
    }

    pub async fn filter_jobs(&self, filter: JobFilter) -> Result<Vec<Job>> {
        filter
            .validate()
            .map_err(AppError::from)
            .inspect_err(|e| warn!(error = %e, "filter_jobs rejected"))?;

        self.dao
            .select_job_by_fields(filter)
            .await
            .inspect_err(|e| error!(error = %e, "filter_jobs failed"))
    }

    /// Sort by a field named by the caller.
    ///
    /// Only `create_time`, `deadline` and `require_person` are accepted.
    pub async fn sort_jobs(&self, field: &str, order: SortOrder) -> Result<Vec<Job>> {
        let sort_field: SortField = field
            .parse()
            .map_err(AppError::from)
            .inspect_err(|e| warn!(field, error = %e, "sort_jobs rejected"))?;

        self.dao
            .get_ordered_jobs(sort_field, order)
            .await
            .inspect_err(|e| error!(field, error = %e, "sort_jobs failed"))
    }

    pub async fn search_by_name(&self, fragment: &str) -> Result<Vec<Job>> {
        self.dao
            .select_job_by_name(fragment.to_string())
            .await
            .inspect_err(|e| error!(error = %e, "search_by_name failed"))
    }

    /// Distinct values of exactly one field
    pub async fn distinct_values<S: AsRef<str>>(&self, fields: &[S]) -> Result<Vec<FieldValue>> {
        let field = DistinctField::from_requested(fields)
            .map_err(AppError::from)
            .inspect_err(|e| warn!(error = %e, "distinct_values rejected"))?;

        self.dao
            .get_distinct_field(field)
            .await
            .inspect_err(|e| error!(field = field.column(), error = %e, "distinct_values failed"))
    }

    pub async fn health_check(&self) -> Result<()> {
        self.dao.ping().await
    }
}

fn not_found(id: &JobId) -> AppError {
    AppError::NotFound(format!("Job {} not found", id))
}
