//! Liveness report: the directory is only useful while PostgreSQL answers,
//! so the health body carries the database state next to the build version.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::Serialize;

use crate::app_state::AppState;

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthReport {
    /// `healthy`, or `degraded` while the database is unreachable.
    pub status: &'static str,
    /// `reachable` or `unreachable`.
    pub database: &'static str,
    /// RFC 3339 time of the check.
    pub timestamp: String,
    /// Crate version.
    pub version: &'static str,
}

/// `GET /health` — Process and database status.
///
/// Always answers 200 so the report itself stays readable during an outage.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthReport> {
    let reachable = state.service.database_reachable().await;
    Json(HealthReport {
        status: if reachable { "healthy" } else { "degraded" },
        database: if reachable { "reachable" } else { "unreachable" },
        timestamp: Utc::now().to_rfc3339(),
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Health route.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_handler))
}
