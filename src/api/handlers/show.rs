//! Show handlers: listing and create.

use axum::Router;
use axum::extract::{Form, State};
use axum::response::{IntoResponse, Response};
use axum::routing::get;

use super::{listed, rejected};
use crate::app_state::AppState;
use crate::domain::{ShowChanges, Submission};
use crate::error::DirectoryError;
use crate::views::{forms, pages};

/// `GET /shows` — Every show with venue and artist names.
///
/// # Errors
///
/// Returns [`DirectoryError`] on database failure.
pub async fn list_shows(State(state): State<AppState>) -> Result<impl IntoResponse, DirectoryError> {
    let shows = state.service.shows().await?;
    Ok(pages::shows(&shows))
}

/// `GET /shows/create` — Blank show form.
pub async fn create_show_form() -> impl IntoResponse {
    forms::new_show()
}

/// `POST /shows/create` — Book an artist at a venue.
pub async fn create_show(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Response {
    let submission = Submission::new(pairs);
    let result = match ShowChanges::from_fields(submission.fields()) {
        Ok(changes) => state.service.create_show(changes).await,
        Err(err) => Err(err),
    };
    match result {
        Ok(_) => listed("Show"),
        Err(err) => rejected("Show", err),
    }
}

/// Show routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/shows", get(list_shows))
        .route("/shows/create", get(create_show_form).post(create_show))
}
