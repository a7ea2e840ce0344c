//! HTTP Handlers
//!
//! Thin adapters: decode the request, call [`JobService`], wrap the result
//! in the envelope.

use crate::error::{ApiError, ApiResult};
use crate::types::{ApiResponse, DistinctRequest, IdQuery, SearchQuery, SortQuery};
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::Json;
use jobboard_core::application::{JobService, UpdateJobRequest};
use jobboard_core::domain::{FieldValue, Job, JobFields, JobFilter};
use tracing::debug;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub jobs: JobService,
}

impl AppState {
    pub fn new(jobs: JobService) -> Self {
        Self { jobs }
    }
}

/// GET /job
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<Job>> {
    let jobs = state.jobs.list_jobs().await?;
    Ok(ApiResponse::ok(jobs))
}

/// POST /job
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<JobFields>, JsonRejection>,
) -> ApiResult<Job> {
    let Json(fields) = body?;
    let job = state.jobs.create_job(fields).await?;
    Ok(ApiResponse::ok(job))
}

/// PUT /job
pub async fn update(
    State(state): State<AppState>,
    body: Result<Json<UpdateJobRequest>, JsonRejection>,
) -> ApiResult<Job> {
    let Json(req) = body?;
    let job = state.jobs.update_job(req).await?;
    Ok(ApiResponse::ok(job))
}

/// DELETE /job?id=
///
/// Answers 200 with `data: null` when nothing was stored under the id.
pub async fn delete(
    State(state): State<AppState>,
    query: Result<Query<IdQuery>, QueryRejection>,
) -> ApiResult<Job> {
    let Query(IdQuery { id }) = query?;
    let removed = state.jobs.delete_job(id).await?;
    Ok(ApiResponse::ok_optional(removed))
}

/// GET /job/detail?id=
pub async fn detail(
    State(state): State<AppState>,
    query: Result<Query<IdQuery>, QueryRejection>,
) -> ApiResult<Job> {
    let Query(IdQuery { id }) = query?;
    let job = state.jobs.get_job(id).await?;
    Ok(ApiResponse::ok(job))
}

/// POST /job/filter
pub async fn filter(
    State(state): State<AppState>,
    body: Result<Json<JobFilter>, JsonRejection>,
) -> ApiResult<Vec<Job>> {
    let Json(filter) = body?;
    let jobs = state.jobs.filter_jobs(filter).await?;
    Ok(ApiResponse::ok(jobs))
}

/// POST /job/sort?field=&order=
pub async fn sort(
    State(state): State<AppState>,
    query: Result<Query<SortQuery>, QueryRejection>,
) -> ApiResult<Vec<Job>> {
    let Query(params) = query?;
    let order = params.sort_order()?;
    let jobs = state.jobs.sort_jobs(&params.field, order).await?;
    Ok(ApiResponse::ok(jobs))
}

/// GET /job/search?name=
pub async fn search(
    State(state): State<AppState>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> ApiResult<Vec<Job>> {
    let Query(SearchQuery { name }) = query?;
    let jobs = state.jobs.search_by_name(&name).await?;
    Ok(ApiResponse::ok(jobs))
}

/// POST /job/distinct
pub async fn distinct(
    State(state): State<AppState>,
    body: Result<Json<DistinctRequest>, JsonRejection>,
) -> ApiResult<Vec<FieldValue>> {
    let Json(DistinctRequest { fields }) = body?;
    let values = state.jobs.distinct_values(&fields).await?;
    Ok(ApiResponse::ok(values))
}

pub async fn livez() -> ApiResponse<()> {
    debug!("service is live");
    ApiResponse::ok_optional(None)
}

pub async fn healthz(State(state): State<AppState>) -> Result<ApiResponse<()>, ApiError> {
    state.jobs.health_check().await?;
    debug!("service is healthy");
    Ok(ApiResponse::ok_optional(None))
}
