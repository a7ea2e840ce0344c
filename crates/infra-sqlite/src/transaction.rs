// SQLite Transaction Implementation

use crate::error::map_sqlx_error;
use crate::job_repository::{into_jobs, JobRow, JOB_COLUMNS};
use async_trait::async_trait;
use jobboard_core::domain::{
    DistinctField, FieldValue, Job, JobDraft, JobFilter, JobId, SortField, SortOrder,
};
use jobboard_core::error::Result;
use jobboard_core::port::{IdProvider, JobRepository, TimeProvider, Transaction};
use sqlx::{QueryBuilder, Sqlite, Transaction as SqlxTransaction};
use std::sync::Arc;
use tracing::debug;

/// Tie-break for listings that are not explicitly sorted
const DEFAULT_ORDER: &str = " ORDER BY create_time DESC, id ASC";

pub struct SqliteJobTransaction {
    tx: SqlxTransaction<'static, Sqlite>,
    id_provider: Arc<dyn IdProvider>,
    time_provider: Arc<dyn TimeProvider>,
}

impl SqliteJobTransaction {
    pub fn new(
        tx: SqlxTransaction<'static, Sqlite>,
        id_provider: Arc<dyn IdProvider>,
        time_provider: Arc<dyn TimeProvider>,
    ) -> Self {
        Self {
            tx,
            id_provider,
            time_provider,
        }
    }

    async fn select_where_eq(&mut self, column: &str, value: &str) -> Result<Vec<Job>> {
        let sql = format!(
            r#"SELECT {} FROM jobs WHERE "{}" = ?{}"#,
            JOB_COLUMNS, column, DEFAULT_ORDER
        );
        let rows: Vec<JobRow> = sqlx::query_as(&sql)
            .bind(value)
            .fetch_all(&mut *self.tx)
            .await
            .map_err(map_sqlx_error)?;

        into_jobs(rows)
    }
}

#[async_trait]
impl Transaction for SqliteJobTransaction {
    async fn commit(self: Box<Self>) -> Result<()> {
        self.tx.commit().await.map_err(map_sqlx_error)?;
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> Result<()> {
        self.tx.rollback().await.map_err(map_sqlx_error)?;
        Ok(())
    }
}

#[async_trait]
impl JobRepository for SqliteJobTransaction {
    async fn insert(&mut self, draft: &JobDraft) -> Result<Job> {
        let id = draft.id.unwrap_or_else(|| self.id_provider.generate_id());
        let create_time = self.time_provider.now_millis();
        let f = &draft.fields;

        let sql = format!(
            r#"
            INSERT INTO jobs (
                id, name, company, education, address, experience,
                require_skill, require_person, original_url, "type", deadline, create_time
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING {}
            "#,
            JOB_COLUMNS
        );
        let row: JobRow = sqlx::query_as(&sql)
            .bind(id.to_string())
            .bind(&f.name)
            .bind(&f.company)
            .bind(&f.education)
            .bind(&f.address)
            .bind(&f.experience)
            .bind(&f.require_skill)
            .bind(f.require_person)
            .bind(&f.original_url)
            .bind(&f.job_type)
            .bind(&f.deadline)
            .bind(create_time)
            .fetch_one(&mut *self.tx)
            .await
            .map_err(map_sqlx_error)?;

        debug!(job_id = %id, "Inserted job row");
        row.into_job()
    }

    async fn update(&mut self, job: &Job) -> Result<Option<Job>> {
        let f = &job.fields;
        let sql = format!(
            r#"
            UPDATE jobs
            SET name = ?, company = ?, education = ?, address = ?, experience = ?,
                require_skill = ?, require_person = ?, original_url = ?, "type" = ?, deadline = ?
            WHERE id = ?
            RETURNING {}
            "#,
            JOB_COLUMNS
        );
        let row: Option<JobRow> = sqlx::query_as(&sql)
            .bind(&f.name)
            .bind(&f.company)
            .bind(&f.education)
            .bind(&f.address)
            .bind(&f.experience)
            .bind(&f.require_skill)
            .bind(f.require_person)
            .bind(&f.original_url)
            .bind(&f.job_type)
            .bind(&f.deadline)
            .bind(job.id.to_string())
            .fetch_optional(&mut *self.tx)
            .await
            .map_err(map_sqlx_error)?;

        row.map(JobRow::into_job).transpose()
    }

    async fn delete_by_id(&mut self, id: &JobId) -> Result<Option<Job>> {
        // Single write statement: no read lock is held that would need upgrading
        let sql = format!("DELETE FROM jobs WHERE id = ? RETURNING {}", JOB_COLUMNS);
        let row: Option<JobRow> = sqlx::query_as(&sql)
            .bind(id.to_string())
            .fetch_optional(&mut *self.tx)
            .await
            .map_err(map_sqlx_error)?;

        row.map(JobRow::into_job).transpose()
    }

    async fn select_by_id(&mut self, id: &JobId) -> Result<Option<Job>> {
        let sql = format!("SELECT {} FROM jobs WHERE id = ?", JOB_COLUMNS);
        let row: Option<JobRow> = sqlx::query_as(&sql)
            .bind(id.to_string())
            .fetch_optional(&mut *self.tx)
            .await
            .map_err(map_sqlx_error)?;

        row.map(JobRow::into_job).transpose()
    }

    async fn select_by_company(&mut self, company: &str) -> Result<Vec<Job>> {
        self.select_where_eq("company", company).await
    }

    async fn select_by_address(&mut self, address: &str) -> Result<Vec<Job>> {
        self.select_where_eq("address", address).await
    }

    async fn select_by_type(&mut self, job_type: &str) -> Result<Vec<Job>> {
        self.select_where_eq("type", job_type).await
    }

    async fn select_by_name_like(&mut self, fragment: &str) -> Result<Vec<Job>> {
        let sql = format!(
            r#"SELECT {} FROM jobs WHERE name LIKE ? ESCAPE '\'{}"#,
            JOB_COLUMNS, DEFAULT_ORDER
        );
        let rows: Vec<JobRow> = sqlx::query_as(&sql)
            .bind(format!("%{}%", escape_like(fragment)))
            .fetch_all(&mut *self.tx)
            .await
            .map_err(map_sqlx_error)?;

        into_jobs(rows)
    }

    async fn select_by_fields(&mut self, filter: &JobFilter) -> Result<Vec<Job>> {
        let mut qb: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("SELECT {} FROM jobs", JOB_COLUMNS));

        let predicates = [
            ("name", filter.name.clone()),
            ("company", filter.company.clone()),
            ("address", filter.address.clone()),
            ("type", filter.job_type.clone()),
            ("id", filter.id.map(|id| id.to_string())),
        ];

        let mut first = true;
        for (column, value) in predicates {
            let Some(value) = value else { continue };
            qb.push(if first { " WHERE " } else { " AND " });
            qb.push(format!(r#""{}" = "#, column));
            qb.push_bind(value);
            first = false;
        }
        qb.push(DEFAULT_ORDER);

        let rows: Vec<JobRow> = qb
            .build_query_as()
            .fetch_all(&mut *self.tx)
            .await
            .map_err(map_sqlx_error)?;

        into_jobs(rows)
    }

    async fn select_ordered(&mut self, field: SortField, order: SortOrder) -> Result<Vec<Job>> {
        let sql = format!(
            "SELECT {} FROM jobs ORDER BY {} {}, id ASC",
            JOB_COLUMNS,
            field.column(),
            order.keyword()
        );
        let rows: Vec<JobRow> = sqlx::query_as(&sql)
            .fetch_all(&mut *self.tx)
            .await
            .map_err(map_sqlx_error)?;

        into_jobs(rows)
    }

    async fn select_distinct(&mut self, field: DistinctField) -> Result<Vec<FieldValue>> {
        let sql = format!(
            r#"SELECT DISTINCT "{col}" FROM jobs ORDER BY "{col}" ASC"#,
            col = field.column()
        );

        if field.is_integer() {
            let values: Vec<i64> = sqlx::query_scalar(&sql)
                .fetch_all(&mut *self.tx)
                .await
                .map_err(map_sqlx_error)?;
            return Ok(values.into_iter().map(FieldValue::Integer).collect());
        }

        let values: Vec<Option<String>> = sqlx::query_scalar(&sql)
            .fetch_all(&mut *self.tx)
            .await
            .map_err(map_sqlx_error)?;
        Ok(values.into_iter().map(FieldValue::from).collect())
    }
}

/// Escape LIKE wildcards so the fragment matches literally
fn escape_like(fragment: &str) -> String {
    let mut escaped = String::with_capacity(fragment.len());
    for c in fragment.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
