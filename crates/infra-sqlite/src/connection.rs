// SQLite Connection Pool Setup

use crate::error::map_sqlx_error;
use jobboard_core::error::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

/// Create SQLite connection pool with WAL mode.
///
/// `database_url` may be `sqlite::memory:`, `sqlite://path/to.db` or a bare
/// file path; missing database files are created. In-memory databases are
/// pinned to a single long-lived connection so the data outlives idle
/// connection recycling.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(map_sqlx_error)?
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5))
        .create_if_missing(true);

    let in_memory = database_url.contains(":memory:");
    let mut pool_options = SqlitePoolOptions::new();
    pool_options = if in_memory {
        pool_options
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        pool_options.max_connections(max_connections.max(1))
    };

    info!(in_memory, max_connections, "Opening SQLite pool");
    let pool = pool_options
        .connect_with(options)
        .await
        .map_err(map_sqlx_error)?;

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_pool() {
        let pool = create_pool("sqlite::memory:", 10).await.unwrap();
        assert!(pool.acquire().await.is_ok());
    }

    #[tokio::test]
    async fn test_create_pool_creates_missing_file() {
        let path = std::env::temp_dir().join(format!("jobboard-pool-{}.db", uuid::Uuid::new_v4()));
        let url = format!("sqlite://{}", path.display());

        let pool = create_pool(&url, 2).await.unwrap();
        pool.close().await;

        assert!(path.exists());
        let _ = std::fs::remove_file(&path);
    }
}
