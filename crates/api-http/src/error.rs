//! HTTP Error Mapping
//!
//! Application errors and extractor rejections both leave the server as an
//! envelope whose `status_code` matches the HTTP status.

use crate::types::ApiResponse;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::response::{IntoResponse, Response};
use jobboard_core::error::AppError;
use tracing::{error, warn};

/// Error returned from handlers
#[derive(Debug)]
pub struct ApiError(pub AppError);

pub type ApiResult<T> = std::result::Result<ApiResponse<T>, ApiError>;

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

/// Undecodable JSON body
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError(AppError::InvalidArgument(rejection.body_text()))
    }
}

/// Undecodable query string
impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError(AppError::InvalidArgument(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        if err.status_code() >= 500 {
            error!(error = %err, "Request failed");
        } else {
            warn!(status = err.status_code(), error = %err, "Request rejected");
        }
        ApiResponse::<()>::from_app_error(&err).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_not_found_maps_to_404() {
        let response = ApiError::from(AppError::NotFound("Job x not found".into())).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_invalid_argument_maps_to_400() {
        let response =
            ApiError::from(AppError::InvalidArgument("missing field `id`".into())).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
