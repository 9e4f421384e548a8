//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, cache setup, worker spawning, and Axum server lifecycle.

use crate::application::services::ClickScheduler;
use crate::config::Config;
use crate::domain::click_worker::run_click_worker;
use crate::infrastructure::cache::build_slug_cache;
use crate::infrastructure::persistence::{PgClickRepository, PgLinkRepository, PgSessionProvider};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Apply migrations
/// - In-process slug cache (or NullCache when disabled)
/// - Background click worker
/// - Axum HTTP server
///
/// On Ctrl+C (or SIGTERM on Unix) the server stops accepting connections,
/// finishes in-flight requests, then closes the click queue and waits up to
/// `SHUTDOWN_GRACE_SECS` for pending click writes.
///
/// # Errors
///
/// Returns an error if:
/// - Database connection fails
/// - Migrations fail
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    let cache = build_slug_cache(&config);

    let pool = Arc::new(pool);
    let link_repository = Arc::new(PgLinkRepository::new(pool.clone()));
    let click_repository = Arc::new(PgClickRepository::new(pool.clone()));
    let session_provider = Arc::new(PgSessionProvider::new(
        pool.clone(),
        &config.session_cookie,
    ));

    let (clicks, click_rx) = ClickScheduler::channel(config.click_queue_capacity);
    let worker = tokio::spawn(run_click_worker(
        click_rx,
        click_repository,
        config.click_worker_concurrency,
    ));
    tracing::info!(
        "Click worker started (concurrency {})",
        config.click_worker_concurrency
    );

    let state = AppState::new(&config, link_repository, session_provider, cache, clicks)?;

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid LISTEN address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    // The router (and with it the last click sender) is dropped once serve
    // returns, so the worker sees a closed channel and drains.
    let grace = Duration::from_secs(config.shutdown_grace_secs);
    match tokio::time::timeout(grace, worker).await {
        Ok(Ok(())) => tracing::info!("Click queue drained"),
        Ok(Err(e)) => tracing::error!("Click worker panicked: {}", e),
        Err(_) => tracing::warn!(
            "Click worker did not drain within {}s, pending clicks dropped",
            config.shutdown_grace_secs
        ),
    }

    pool.close().await;
    tracing::info!("Shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
