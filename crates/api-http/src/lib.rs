//! HTTP API Layer
//!
//! axum routes for job postings. Every response uses the
//! `{status_code, status_message, data}` envelope.

pub mod error;
pub mod handler;
pub mod server;
pub mod types;

pub use handler::AppState;
pub use server::{build_router, HttpServer, HttpServerConfig};
pub use types::ApiResponse;
