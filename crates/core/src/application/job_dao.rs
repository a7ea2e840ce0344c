// Job Data Access Object - scoped transactions over the record store

use crate::domain::{
    DistinctField, FieldValue, Job, JobDraft, JobFilter, JobId, SortField, SortOrder,
};
use crate::error::Result;
use crate::port::{JobRepositoryTransaction, TransactionalJobRepository};
use futures::future::BoxFuture;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Transaction handle lent to a scoped operation
pub type TxRef<'t> = &'t mut (dyn JobRepositoryTransaction + 'static);

/// Runs every record store call inside its own transaction:
/// begin, run, then commit on success or roll back and re-raise on failure.
#[derive(Clone)]
pub struct JobDao {
    store: Arc<dyn TransactionalJobRepository>,
}

impl JobDao {
    pub fn new(store: Arc<dyn TransactionalJobRepository>) -> Self {
        Self { store }
    }

    /// Run `op` in a fresh transaction.
    ///
    /// The transaction is released on every path: committed, rolled back, or
    /// (if the future is dropped mid-flight) rolled back by the driver on drop.
    pub async fn scoped<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: for<'t> FnOnce(TxRef<'t>) -> BoxFuture<'t, Result<T>> + Send,
    {
        let mut tx = self.store.begin_transaction().await?;

        match op(&mut *tx).await {
            Ok(value) => {
                tx.commit().await?;
                debug!("transaction committed");
                Ok(value)
            }
            Err(err) => {
                warn!(error = %err, "Session rollback because of error");
                if let Err(rollback_err) = tx.rollback().await {
                    error!(error = %rollback_err, "Rollback failed");
                }
                Err(err)
            }
        }
    }

    pub async fn create_job(&self, draft: JobDraft) -> Result<Job> {
        self.scoped(move |tx| Box::pin(async move { tx.insert(&draft).await }))
            .await
    }

    pub async fn update_job(&self, job: Job) -> Result<Option<Job>> {
        self.scoped(move |tx| Box::pin(async move { tx.update(&job).await }))
            .await
    }

    /// Delete and hand back the removed record (`None` if it never existed)
    pub async fn delete_job_by_id(&self, id: JobId) -> Result<Option<Job>> {
        self.scoped(move |tx| Box::pin(async move { tx.delete_by_id(&id).await }))
            .await
    }

    pub async fn select_job_by_id(&self, id: JobId) -> Result<Option<Job>> {
        self.scoped(move |tx| Box::pin(async move { tx.select_by_id(&id).await }))
            .await
    }

    pub async fn select_job_by_name(&self, fragment: String) -> Result<Vec<Job>> {
        self.scoped(move |tx| Box::pin(async move { tx.select_by_name_like(&fragment).await }))
            .await
    }

    pub async fn select_job_by_company(&self, company: String) -> Result<Vec<Job>> {
        self.scoped(move |tx| Box::pin(async move { tx.select_by_company(&company).await }))
            .await
    }

    pub async fn select_job_by_address(&self, address: String) -> Result<Vec<Job>> {
        self.scoped(move |tx| Box::pin(async move { tx.select_by_address(&address).await }))
            .await
    }

    pub async fn select_job_by_type(&self, job_type: String) -> Result<Vec<Job>> {
        self.scoped(move |tx| Box::pin(async move { tx.select_by_type(&job_type).await }))
            .await
    }

    pub async fn select_job_by_fields(&self, filter: JobFilter) -> Result<Vec<Job>> {
        self.scoped(move |tx| Box::pin(async move { tx.select_by_fields(&filter).await }))
            .await
    }

    pub async fn get_ordered_jobs(&self, field: SortField, order: SortOrder) -> Result<Vec<Job>> {
        self.scoped(move |tx| Box::pin(async move { tx.select_ordered(field, order).await }))
            .await
    }

    pub async fn get_distinct_field(&self, field: DistinctField) -> Result<Vec<FieldValue>> {
        self.scoped(move |tx| Box::pin(async move { tx.select_distinct(field).await }))
            .await
    }

    /// Connectivity probe used by the health endpoint
    pub async fn ping(&self) -> Result<()> {
        self.store.ping().await
    }
}
