// Jobboard Infrastructure - SQLite Adapter
// Implements: TransactionalJobRepository, JobRepository (per transaction)

mod connection;
mod error;
mod job_repository;
mod migration;
mod transaction;

pub use connection::create_pool;
pub use job_repository::SqliteJobRepository;
pub use migration::run_migrations;
pub use transaction::SqliteJobTransaction;
