//! Landing page and the catch-all 404.

use axum::Router;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;

use crate::app_state::AppState;
use crate::views::{errors, pages};

/// `GET /` — Landing page.
pub async fn index() -> impl IntoResponse {
    pages::home(None)
}

/// Fallback for paths that match no route.
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, errors::not_found())
}

/// Landing page route.
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(index))
}
