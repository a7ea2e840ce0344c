// SQLite record store handle

use crate::error::map_sqlx_error;
use crate::SqliteJobTransaction;
use async_trait::async_trait;
use jobboard_core::domain::{Job, JobFields};
use jobboard_core::error::{AppError, Result};
use jobboard_core::port::{IdProvider, JobRepositoryTransaction, TimeProvider, TransactionalJobRepository};
use sqlx::SqlitePool;
use std::sync::Arc;

/// Column list shared by every `SELECT` / `RETURNING`
pub(crate) const JOB_COLUMNS: &str = r#"id, name, company, education, address, experience,
    require_skill, require_person, original_url, "type", deadline, create_time"#;

/// Shared store handle; cloned into the service at startup
pub struct SqliteJobRepository {
    pool: SqlitePool,
    id_provider: Arc<dyn IdProvider>,
    time_provider: Arc<dyn TimeProvider>,
}

impl SqliteJobRepository {
    pub fn new(
        pool: SqlitePool,
        id_provider: Arc<dyn IdProvider>,
        time_provider: Arc<dyn TimeProvider>,
    ) -> Self {
        Self {
            pool,
            id_provider,
            time_provider,
        }
    }
}

#[async_trait]
impl TransactionalJobRepository for SqliteJobRepository {
    async fn begin_transaction(&self) -> Result<Box<dyn JobRepositoryTransaction>> {
        let tx = self.pool.begin().await.map_err(map_sqlx_error)?;
        Ok(Box::new(SqliteJobTransaction::new(
            tx,
            Arc::clone(&self.id_provider),
            Arc::clone(&self.time_provider),
        )))
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        Ok(())
    }
}

/// SQLite row representation
#[derive(Debug, sqlx::FromRow)]
pub(crate) struct JobRow {
    id: String,
    name: Option<String>,
    company: Option<String>,
    education: String,
    address: String,
    experience: String,
    require_skill: Option<String>,
    require_person: i64,
    original_url: String,
    #[sqlx(rename = "type")]
    job_type: Option<String>,
    deadline: String,
    create_time: i64, // epoch ms
}

impl JobRow {
    pub(crate) fn into_job(self) -> Result<Job> {
        let id = uuid::Uuid::parse_str(&self.id)
            .map_err(|e| AppError::Database(format!("Corrupt job id '{}': {}", self.id, e)))?;
        let create_time = chrono::DateTime::from_timestamp_millis(self.create_time)
            .ok_or_else(|| {
                AppError::Database(format!(
                    "Corrupt create_time {} for job {}",
                    self.create_time, id
                ))
            })?;

        Ok(Job {
            id,
            fields: JobFields {
                name: self.name,
                company: self.company,
                education: self.education,
                address: self.address,
                experience: self.experience,
                require_skill: self.require_skill,
                require_person: self.require_person,
                original_url: self.original_url,
                job_type: self.job_type,
                deadline: self.deadline,
            },
            create_time,
        })
    }
}

pub(crate) fn into_jobs(rows: Vec<JobRow>) -> Result<Vec<Job>> {
    rows.into_iter().map(JobRow::into_job).collect()
}
