//! Jobboard - Main Entry Point
//! HTTP job-posting service backed by SQLite

mod settings;

use anyhow::{Context, Result};
use settings::{LogFormat, Settings};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use jobboard_api_http::{HttpServer, HttpServerConfig};
use jobboard_core::application::{shutdown_channel, JobService};
use jobboard_core::port::id_provider::UuidProvider;
use jobboard_core::port::time_provider::SystemTimeProvider;
use jobboard_infra_sqlite::{create_pool, run_migrations, SqliteJobRepository};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const LOG_FILE_PREFIX: &str = "jobboard.log";

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Configuration
    let settings = Settings::new().context("Failed to load settings")?;

    // 2. Logging (guard flushes the file writer on drop)
    let _log_guard = init_logging(&settings)?;
    info!("Jobboard v{} starting...", VERSION);

    // 3. Database
    let db_url = settings
        .connection_url()
        .context("Failed to prepare database location")?;
    info!(database_url = %db_url, "Initializing database...");

    let pool = create_pool(&db_url, settings.max_connections)
        .await
        .map_err(|e| anyhow::anyhow!("DB pool creation failed: {}", e))?;
    run_migrations(&pool)
        .await
        .map_err(|e| anyhow::anyhow!("Migration failed: {}", e))?;

    // 4. DI wiring
    let store = Arc::new(SqliteJobRepository::new(
        pool.clone(),
        Arc::new(UuidProvider),
        Arc::new(SystemTimeProvider),
    ));
    let jobs = JobService::new(store);

    // 5. HTTP server
    let (shutdown_tx, shutdown_rx) = shutdown_channel();
    let server = HttpServer::new(
        HttpServerConfig {
            host: settings.host.clone(),
            port: settings.port,
        },
        jobs,
    );
    let mut server_handle = tokio::spawn(server.serve(shutdown_rx));

    info!("Press Ctrl+C to shutdown");

    // 6. Run until Ctrl+C or the server exits on its own
    tokio::select! {
        signal = tokio::signal::ctrl_c() => {
            signal?;
            info!("Shutdown signal received. Exiting gracefully...");
            shutdown_tx.shutdown();
            match tokio::time::timeout(Duration::from_secs(10), &mut server_handle).await {
                Ok(Ok(Err(e))) => error!(error = %e, "HTTP server failed during shutdown"),
                Ok(Err(e)) => error!(error = %e, "HTTP server task panicked"),
                Err(_) => error!("HTTP server did not stop in time"),
                Ok(Ok(Ok(()))) => {}
            }
        }
        result = &mut server_handle => {
            pool.close().await;
            return match result {
                Ok(Ok(())) => Ok(()),
                Ok(Err(e)) => Err(anyhow::anyhow!("HTTP server failed: {}", e)),
                Err(e) => Err(anyhow::anyhow!("HTTP server task panicked: {}", e)),
            };
        }
    }

    // 7. Release connections
    pool.close().await;
    info!("Shutdown complete.");

    Ok(())
}

fn init_logging(settings: &Settings) -> Result<Option<WorkerGuard>> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("jobboard=info,tower_http=info"))
        .context("Failed to create env filter")?;

    let (file_layer, guard) = match &settings.log_dir {
        Some(dir) => {
            let dir = shellexpand::tilde(dir).into_owned();
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().json().with_writer(writer).with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    match settings.log_format {
        LogFormat::Json => {
            // Production: JSON structured logging
            tracing_subscriber::registry()
                .with(file_layer)
                .with(env_filter)
                .with(fmt::layer().json())
                .init();
        }
        LogFormat::Pretty => {
            // Development: Pretty formatting with colors
            tracing_subscriber::registry()
                .with(file_layer)
                .with(env_filter)
                .with(fmt::layer().pretty())
                .init();
        }
    }

    Ok(guard)
}
