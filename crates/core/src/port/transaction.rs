// Transaction port for scoped operations

use crate::error::Result;
use crate::port::JobRepository;
use async_trait::async_trait;

/// Transaction trait for atomic multi-step operations
#[async_trait]
pub trait Transaction: Send {
    /// Commit the transaction
    async fn commit(self: Box<Self>) -> Result<()>;

    /// Rollback the transaction
    async fn rollback(self: Box<Self>) -> Result<()>;
}

/// Store handle that hands out transactions
#[async_trait]
pub trait TransactionalJobRepository: Send + Sync {
    /// Begin a new transaction
    async fn begin_transaction(&self) -> Result<Box<dyn JobRepositoryTransaction>>;

    /// Cheap connectivity probe (`SELECT 1`)
    async fn ping(&self) -> Result<()>;
}

/// JobRepository operations within a transaction.
///
/// Dropping an uncommitted transaction rolls it back.
pub trait JobRepositoryTransaction: Transaction + JobRepository {}

impl<T: Transaction + JobRepository> JobRepositoryTransaction for T {}
