//! Shared fixtures: a migrated SQLite store wired into a JobService

#![allow(dead_code)]

use std::sync::Arc;

use jobboard_core::application::JobService;
use jobboard_core::port::id_provider::UuidProvider;
use jobboard_core::port::time_provider::SteppingTimeProvider;
use jobboard_core::port::{IdProvider, TimeProvider};
use jobboard_infra_sqlite::{create_pool, run_migrations, SqliteJobRepository};

/// 2023-11-14T22:13:20Z
pub const START_MILLIS: i64 = 1_700_000_000_000;

/// Service over a fresh in-memory database; each insert is one second
/// later than the previous one.
pub async fn memory_service() -> JobService {
    service_at("sqlite::memory:").await
}

pub async fn service_at(url: &str) -> JobService {
    service_with(
        url,
        Arc::new(UuidProvider),
        Arc::new(SteppingTimeProvider::new(START_MILLIS, 1_000)),
    )
    .await
}

pub async fn service_with(
    url: &str,
    id_provider: Arc<dyn IdProvider>,
    time_provider: Arc<dyn TimeProvider>,
) -> JobService {
    let pool = create_pool(url, 4).await.unwrap();
    run_migrations(&pool).await.unwrap();

    let store = SqliteJobRepository::new(pool, id_provider, time_provider);
    JobService::new(Arc::new(store))
}

/// `sqlite://` URL for a fresh file under the temp dir
pub fn temp_db_url(tag: &str) -> (std::path::PathBuf, String) {
    let path = std::env::temp_dir().join(format!("jobboard-{}-{}.db", tag, uuid::Uuid::new_v4()));
    let url = format!("sqlite://{}", path.display());
    (path, url)
}
