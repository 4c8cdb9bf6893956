//! HTTP server initialization and runtime setup.
//!
//! Handles pool construction, the startup connectivity probe, and the Axum
//! server lifecycle.

use crate::config::Config;
use crate::infrastructure::persistence::PgPostRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool (lazy: an unreachable store does not prevent
///   boot; faults surface per-request)
/// - Non-blocking startup connectivity probe
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - The database URL cannot be parsed
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = build_pool(&config)?;
    tracing::info!("Database pool initialized");

    let posts = Arc::new(PgPostRepository::new(pool));

    // Probe connectivity off the request path: log the outcome either way,
    // keep serving regardless.
    let probe = Arc::clone(&posts);
    tokio::spawn(async move {
        use crate::domain::repositories::PostRepository;

        match probe.ping().await {
            Ok(()) => tracing::info!("Database connection test successful"),
            Err(e) => tracing::error!(
                "Database connection test failed: {e}. Please check your DATABASE_URL in .env file."
            ),
        }
    });

    let state = AppState::new(posts);
    let app = app_router(state, &config.cors_allowed_origins);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}

/// Builds the shared connection pool.
///
/// Unless `DATABASE_URL` carries an explicit `sslmode`, the pool requires an
/// encrypted transport without verifying the server certificate chain, which
/// keeps managed hosts with self-signed chains reachable. Deployments that
/// need strict validation set `sslmode=verify-full` in the URL.
fn build_pool(config: &Config) -> Result<PgPool> {
    let mut options = PgConnectOptions::from_str(&config.database_url)?;
    if !config.database_url.contains("sslmode=") {
        options = options.ssl_mode(PgSslMode::Require);
    }

    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_acquire_timeout))
        .after_connect(|_conn, _meta| {
            Box::pin(async {
                tracing::debug!("Database connection established");
                Ok(())
            })
        })
        .connect_lazy_with(options);

    Ok(pool)
}
