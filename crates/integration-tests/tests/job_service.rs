//! Job service integration tests
//!
//! Exercises JobService -> JobDao -> SQLite end to end.

mod common;

use std::sync::Arc;

use common::{memory_service, service_at, service_with, temp_db_url, START_MILLIS};
use jobboard_core::application::UpdateJobRequest;
use jobboard_core::domain::{
    FieldValue, JobFields, JobFilter, SortOrder, DEFAULT_ADDRESS, DEFAULT_DEADLINE,
    DEFAULT_EDUCATION, DEFAULT_EXPERIENCE, DEFAULT_REQUIRE_PERSON,
};
use jobboard_core::error::AppError;
use jobboard_core::port::id_provider::UuidProvider;
use jobboard_core::port::time_provider::{SteppingTimeProvider, SystemTimeProvider};

fn job(name: &str, company: &str, address: &str, openings: i64) -> JobFields {
    JobFields {
        address: address.to_string(),
        require_person: openings,
        ..JobFields::named(name, company)
    }
}

#[tokio::test]
async fn test_create_then_get_round_trip() {
    let service = memory_service().await;

    let created = service
        .create_job(JobFields::named("Backend Engineer", "Acme"))
        .await
        .unwrap();
    let fetched = service.get_job(created.id).await.unwrap();

    assert_eq!(fetched, created);
    assert_eq!(fetched.fields.education, DEFAULT_EDUCATION);
    assert_eq!(fetched.fields.address, DEFAULT_ADDRESS);
    assert_eq!(fetched.fields.experience, DEFAULT_EXPERIENCE);
    assert_eq!(fetched.fields.deadline, DEFAULT_DEADLINE);
    assert_eq!(fetched.fields.require_person, DEFAULT_REQUIRE_PERSON);
    assert_eq!(fetched.create_time.timestamp_millis(), START_MILLIS);
}

#[tokio::test]
async fn test_list_is_newest_first() {
    let service = memory_service().await;
    for name in ["first", "second", "third"] {
        service.create_job(JobFields::named(name, "Acme")).await.unwrap();
    }

    let names: Vec<_> = service
        .list_jobs()
        .await
        .unwrap()
        .into_iter()
        .map(|j| j.fields.name.unwrap())
        .collect();

    assert_eq!(names, ["third", "second", "first"]);
}

#[tokio::test]
async fn test_get_unknown_job_is_not_found() {
    let service = memory_service().await;

    let err = service.get_job(uuid::Uuid::new_v4()).await.unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)));
    assert_eq!(err.status_code(), 404);
}

#[tokio::test]
async fn test_delete_removes_job_and_is_idempotent() {
    let service = memory_service().await;
    let created = service
        .create_job(JobFields::named("Data Engineer", "Acme"))
        .await
        .unwrap();

    let removed = service.delete_job(created.id).await.unwrap();
    assert_eq!(removed.map(|j| j.id), Some(created.id));

    assert!(service.delete_job(created.id).await.unwrap().is_none());
    assert!(service.get_job(created.id).await.is_err());
    assert!(service.list_jobs().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_applies_request_fields() {
    let service = memory_service().await;
    let created = service
        .create_job(job("Engineer", "Acme", "Berlin", 1))
        .await
        .unwrap();

    let updated = service
        .update_job(UpdateJobRequest {
            id: created.id,
            fields: job("Senior Engineer", "Acme", "Remote", 3),
        })
        .await
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.create_time, created.create_time);
    assert_eq!(updated.fields.name.as_deref(), Some("Senior Engineer"));
    assert_eq!(updated.fields.address, "Remote");
    assert_eq!(updated.fields.require_person, 3);
    assert_eq!(service.get_job(created.id).await.unwrap(), updated);
}

#[tokio::test]
async fn test_update_unknown_job_is_not_found() {
    let service = memory_service().await;

    let err = service
        .update_job(UpdateJobRequest {
            id: uuid::Uuid::new_v4(),
            fields: JobFields::named("Ghost", "Nowhere"),
        })
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), 404);
    assert!(service.list_jobs().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_filter_is_a_conjunction() {
    let service = memory_service().await;
    service.create_job(job("Engineer", "Acme", "Berlin", 1)).await.unwrap();
    service.create_job(job("Engineer", "Acme", "Paris", 1)).await.unwrap();
    service.create_job(job("Engineer", "Globex", "Berlin", 1)).await.unwrap();

    let hits = service
        .filter_jobs(JobFilter {
            company: Some("Acme".into()),
            address: Some("Berlin".into()),
            ..JobFilter::default()
        })
        .await
        .unwrap();

    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].fields.company.as_deref(), Some("Acme"));
    assert_eq!(hits[0].fields.address, "Berlin");

    let all = service.filter_jobs(JobFilter::default()).await.unwrap();
    assert_eq!(all.len(), 3);
}

#[tokio::test]
async fn test_filter_rejects_oversized_text() {
    let service = memory_service().await;

    let err = service
        .filter_jobs(JobFilter {
            name: Some("x".repeat(101)),
            ..JobFilter::default()
        })
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::InvalidArgument(_)));
    assert_eq!(err.status_code(), 400);
}

#[tokio::test]
async fn test_sort_is_numeric_and_stable() {
    let service = memory_service().await;
    for openings in [2, 10, 1] {
        service
            .create_job(job("Engineer", "Acme", "Berlin", openings))
            .await
            .unwrap();
    }

    let desc = service.sort_jobs("require_person", SortOrder::Desc).await.unwrap();
    let counts: Vec<_> = desc.iter().map(|j| j.fields.require_person).collect();
    assert_eq!(counts, [10, 2, 1]);

    let asc = service.sort_jobs("require_person", SortOrder::Asc).await.unwrap();
    let counts: Vec<_> = asc.iter().map(|j| j.fields.require_person).collect();
    assert_eq!(counts, [1, 2, 10]);

    let again = service.sort_jobs("require_person", SortOrder::Asc).await.unwrap();
    assert_eq!(asc, again);
}

#[tokio::test]
async fn test_sort_rejects_unknown_field() {
    let service = memory_service().await;

    let err = service.sort_jobs("salary", SortOrder::Asc).await.unwrap_err();

    assert!(matches!(err, AppError::InvalidArgument(_)));
    assert_eq!(err.status_code(), 400);
    assert!(err.public_message().contains("salary"));
}

#[tokio::test]
async fn test_search_matches_fragment_literally() {
    let service = memory_service().await;
    service.create_job(JobFields::named("Rust Engineer", "Acme")).await.unwrap();
    service.create_job(JobFields::named("Go Engineer", "Acme")).await.unwrap();
    service.create_job(JobFields::named("100% Remote", "Acme")).await.unwrap();

    let hits = service.search_by_name("Rust").await.unwrap();
    assert_eq!(hits.len(), 1);

    assert_eq!(service.search_by_name("Engineer").await.unwrap().len(), 2);
    assert_eq!(service.search_by_name("0%").await.unwrap().len(), 1);
    assert!(service.search_by_name("_").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_distinct_values_of_one_field() {
    let service = memory_service().await;
    service.create_job(job("a", "Globex", "Berlin", 1)).await.unwrap();
    service.create_job(job("b", "Acme", "Berlin", 2)).await.unwrap();
    service.create_job(job("c", "Acme", "Paris", 2)).await.unwrap();

    let companies = service.distinct_values(&["company"]).await.unwrap();
    assert_eq!(
        companies,
        [
            FieldValue::Text("Acme".into()),
            FieldValue::Text("Globex".into())
        ]
    );

    let openings = service.distinct_values(&["require_person"]).await.unwrap();
    assert_eq!(openings, [FieldValue::Integer(1), FieldValue::Integer(2)]);
}

#[tokio::test]
async fn test_distinct_requires_exactly_one_known_field() {
    let service = memory_service().await;
    let none: [&str; 0] = [];

    for err in [
        service.distinct_values(&none).await.unwrap_err(),
        service.distinct_values(&["company", "address"]).await.unwrap_err(),
        service.distinct_values(&["salary"]).await.unwrap_err(),
    ] {
        assert!(matches!(err, AppError::InvalidArgument(_)));
    }
}

#[tokio::test]
async fn test_jobs_survive_reopening_the_database() {
    let (path, url) = temp_db_url("reopen");

    let id = {
        let service = service_at(&url).await;
        service
            .create_job(JobFields::named("Persistent", "Acme"))
            .await
            .unwrap()
            .id
    };

    let reopened = service_at(&url).await;
    let job = reopened.get_job(id).await.unwrap();
    assert_eq!(job.fields.name.as_deref(), Some("Persistent"));

    let _ = std::fs::remove_file(&path);
}

#[tokio::test]
async fn test_health_check() {
    let service = memory_service().await;
    assert!(service.health_check().await.is_ok());
}

#[tokio::test]
async fn test_create_time_is_not_before_the_call() {
    let service = service_with(
        "sqlite::memory:",
        Arc::new(UuidProvider),
        Arc::new(SystemTimeProvider),
    )
    .await;

    // Stored precision is milliseconds
    let before = chrono::Utc::now().timestamp_millis();
    let created = service
        .create_job(JobFields::named("Engineer", "Acme"))
        .await
        .unwrap();
    let after = chrono::Utc::now().timestamp_millis();

    let stamped = created.create_time.timestamp_millis();
    assert!(stamped >= before, "create_time {} < call time {}", stamped, before);
    assert!(stamped <= after);
}

#[tokio::test]
async fn test_filter_breaks_create_time_ties_by_id() {
    // Frozen clock: every job shares one create_time
    let service = service_with(
        "sqlite::memory:",
        Arc::new(UuidProvider),
        Arc::new(SteppingTimeProvider::new(START_MILLIS, 0)),
    )
    .await;
    for i in 0..12 {
        service
            .create_job(JobFields::named(format!("Engineer {}", i), "Acme"))
            .await
            .unwrap();
    }
    let filter = JobFilter {
        company: Some("Acme".into()),
        ..JobFilter::default()
    };

    let first = service.filter_jobs(filter.clone()).await.unwrap();
    let second = service.filter_jobs(filter).await.unwrap();

    assert_eq!(first.len(), 12);
    assert_eq!(first, second);
    let ids: Vec<String> = first.iter().map(|j| j.id.to_string()).collect();
    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(ids, sorted);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_concurrent_deletes_all_succeed() {
    let (path, url) = temp_db_url("concurrent-delete");
    let service = service_at(&url).await;

    let mut ids = Vec::new();
    for i in 0..100 {
        let job = service
            .create_job(JobFields::named(format!("Engineer {}", i), "Acme"))
            .await
            .unwrap();
        ids.push(job.id);
    }

    let handles: Vec<_> = ids
        .iter()
        .map(|&id| {
            let service = service.clone();
            tokio::spawn(async move { service.delete_job(id).await })
        })
        .collect();

    let mut failures = Vec::new();
    for (handle, id) in handles.into_iter().zip(&ids) {
        match handle.await.unwrap() {
            Ok(Some(job)) => assert_eq!(job.id, *id),
            Ok(None) => failures.push(format!("{}: already gone", id)),
            Err(e) => failures.push(format!("{}: {}", id, e)),
        }
    }

    assert!(failures.is_empty(), "failed deletes: {:?}", failures);
    assert!(service.list_jobs().await.unwrap().is_empty());

    let _ = std::fs::remove_file(&path);
}
