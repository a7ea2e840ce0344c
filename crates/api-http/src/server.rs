//! HTTP Server
//!
//! Binds a TCP listener and serves the job routes until the shutdown token
//! fires.

use crate::handler::{self, AppState};
use axum::routing::{get, post};
use axum::Router;
use jobboard_core::application::{JobService, ShutdownToken};
use jobboard_core::error::{AppError, Result};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

const DEFAULT_HTTP_HOST: &str = "127.0.0.1";
const DEFAULT_HTTP_PORT: u16 = 8080;

/// HTTP Server Configuration
#[derive(Debug, Clone)]
pub struct HttpServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HTTP_HOST.to_string(),
            port: DEFAULT_HTTP_PORT,
        }
    }
}

impl HttpServerConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Route table for the job API
pub fn build_router(jobs: JobService) -> Router {
    Router::new()
        .route(
            "/job",
            get(handler::list)
                .post(handler::create)
                .put(handler::update)
                .delete(handler::delete),
        )
        .route("/job/detail", get(handler::detail))
        .route("/job/filter", post(handler::filter))
        .route("/job/sort", post(handler::sort))
        .route("/job/search", get(handler::search))
        .route("/job/distinct", post(handler::distinct))
        .route("/livez", get(handler::livez))
        .route("/healthz", get(handler::healthz))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState::new(jobs))
}

/// HTTP Server
pub struct HttpServer {
    config: HttpServerConfig,
    jobs: JobService,
}

impl HttpServer {
    pub fn new(config: HttpServerConfig, jobs: JobService) -> Self {
        Self { config, jobs }
    }

    /// Serve until `shutdown` fires; in-flight requests are drained first
    pub async fn serve(self, shutdown: ShutdownToken) -> Result<()> {
        let addr = self.config.addr();
        let listener = TcpListener::bind(&addr).await?;

        info!(
            host = %self.config.host,
            port = self.config.port,
            "Starting HTTP server"
        );

        axum::serve(listener, build_router(self.jobs))
            .with_graceful_shutdown(shutdown.wait())
            .await
            .map_err(|e| AppError::Internal(format!("HTTP server on {} failed: {}", addr, e)))?;

        info!("HTTP server stopped");
        Ok(())
    }
}
