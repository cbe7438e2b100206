//! fyyur server entry point.
//!
//! Loads configuration, connects to PostgreSQL, applies migrations and
//! serves the directory pages.

use anyhow::Context;
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use fyyur::api;
use fyyur::app_state::AppState;
use fyyur::config::{DirectoryConfig, LogFormat};
use fyyur::persistence;
use fyyur::service::DirectoryService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = DirectoryConfig::from_env().context("invalid LISTEN_ADDR")?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
        LogFormat::Pretty => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
    tracing::info!(addr = %config.listen_addr, "starting fyyur");

    // Connect persistence
    let pool = persistence::connect(&config)
        .await
        .context("failed to connect to PostgreSQL")?;
    if config.run_migrations {
        persistence::run_migrations(&pool)
            .await
            .context("failed to apply migrations")?;
        tracing::info!("migrations applied");
    }

    // Build service layer and application state
    let service = DirectoryService::new(pool, config.form_validation_enabled);
    let app_state = AppState::new(service);

    // Build router
    let app = Router::new()
        .merge(api::build_router())
        .layer(TraceLayer::new_for_http())
        .with_state(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
