//! HTTP Request/Response Types
//!
//! Every endpoint answers with the same envelope:
//! `{status_code, status_message, data}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use jobboard_core::domain::SortOrder;
use jobboard_core::error::AppError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const SUCCESS_MESSAGE: &str = "SUCCESS";

/// Uniform response envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status_code: u16,
    pub status_message: String,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self::ok_optional(Some(data))
    }

    /// 200 whose payload may legitimately be `null`
    pub fn ok_optional(data: Option<T>) -> Self {
        Self {
            status_code: StatusCode::OK.as_u16(),
            status_message: SUCCESS_MESSAGE.to_string(),
            data,
        }
    }

    pub fn error(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status_code: status.as_u16(),
            status_message: message.into(),
            data: None,
        }
    }

    pub fn from_app_error(err: &AppError) -> Self {
        let status =
            StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        Self::error(status, err.public_message())
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

/// `DELETE /job?id=` and `GET /job/detail?id=`
#[derive(Debug, Deserialize)]
pub struct IdQuery {
    pub id: Uuid,
}

/// `POST /job/sort?field=&order=`
#[derive(Debug, Deserialize)]
pub struct SortQuery {
    pub field: String,
    #[serde(default)]
    pub order: Option<String>,
}

impl SortQuery {
    /// Missing order means ascending; the keyword is case-insensitive
    pub fn sort_order(&self) -> Result<SortOrder, AppError> {
        match self.order.as_deref() {
            Some(raw) => Ok(raw.parse()?),
            None => Ok(SortOrder::default()),
        }
    }
}

/// `GET /job/search?name=`
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub name: String,
}

/// `POST /job/distinct`
#[derive(Debug, Deserialize)]
pub struct DistinctRequest {
    #[serde(default)]
    pub fields: Vec<String>,
}
