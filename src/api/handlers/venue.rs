//! Venue handlers: listing, search, detail, create, edit, delete.

use axum::Router;
use axum::extract::{Form, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use chrono::Utc;

use super::{SearchForm, listed, parse_id, rejected};
use crate::app_state::AppState;
use crate::domain::{Submission, VenueChanges, VenueId};
use crate::error::DirectoryError;
use crate::views::{forms, pages};

/// `GET /venues` — Venues grouped by city and state.
///
/// # Errors
///
/// Returns [`DirectoryError`] on database failure.
pub async fn list_venues(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, DirectoryError> {
    let areas = state.service.venue_areas(Utc::now()).await?;
    Ok(pages::venues(&areas))
}

/// `POST /venues/search` — Case-insensitive name search.
///
/// # Errors
///
/// Returns [`DirectoryError`] on database failure.
pub async fn search_venues(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Result<impl IntoResponse, DirectoryError> {
    let results = state
        .service
        .search_venues(&form.search_term, Utc::now())
        .await?;
    Ok(pages::search_venues(&results, &form.search_term))
}

/// `GET /venues/{id}` — Venue detail with past and upcoming shows.
///
/// # Errors
///
/// Returns [`DirectoryError::NotFound`] for an unknown id.
pub async fn show_venue(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, DirectoryError> {
    let id: VenueId = parse_id("venue", &id)?;
    let detail = state.service.venue_detail(id, Utc::now()).await?;
    Ok(pages::venue(&detail))
}

/// `GET /venues/create` — Blank venue form.
pub async fn create_venue_form() -> impl IntoResponse {
    forms::new_venue()
}

/// `POST /venues/create` — Store a new venue.
pub async fn create_venue(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Response {
    let submission = Submission::new(pairs);
    let result = match VenueChanges::from_fields(submission.fields_with_genres()) {
        Ok(changes) => state.service.create_venue(changes).await,
        Err(err) => Err(err),
    };
    match result {
        Ok(venue) => listed(&format!("Venue {}", venue.profile.name)),
        Err(err) => rejected("Venue", err),
    }
}

/// `GET /venues/{id}/edit` — Venue form pre-filled with stored values.
///
/// # Errors
///
/// Returns [`DirectoryError::NotFound`] for an unknown id.
pub async fn edit_venue_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, DirectoryError> {
    let id: VenueId = parse_id("venue", &id)?;
    let venue = state.service.venue(id).await?;
    Ok(forms::edit_venue(venue.id, &venue.profile))
}

/// `POST /venues/{id}/edit` — Apply a submission to a stored venue.
pub async fn edit_venue(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Response {
    let submission = Submission::new(pairs);
    let parsed = parse_id::<VenueId>("venue", &id).and_then(|id| {
        VenueChanges::from_fields(submission.fields_with_genres()).map(|changes| (id, changes))
    });
    let result = match parsed {
        Ok((id, changes)) => state.service.update_venue(id, changes).await,
        Err(err) => Err(err),
    };
    match result {
        Ok(venue) => Redirect::to(&format!("/venues/{}", venue.id)).into_response(),
        Err(err) => rejected("Venue", err),
    }
}

/// `DELETE /venues/{id}` — Remove a venue and its shows.
///
/// Responds with an empty body: 200 on success, 500 on any failure.
pub async fn delete_venue(State(state): State<AppState>, Path(id): Path<String>) -> StatusCode {
    let result = match parse_id::<VenueId>("venue", &id) {
        Ok(venue_id) => state.service.delete_venue(venue_id).await,
        Err(err) => Err(err),
    };
    match result {
        Ok(()) => StatusCode::OK,
        Err(err) => {
            tracing::error!(venue_id = %id, error = %err, "venue could not be deleted");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// Venue routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/venues", get(list_venues))
        .route("/venues/search", post(search_venues))
        .route("/venues/create", get(create_venue_form).post(create_venue))
        .route("/venues/{id}", get(show_venue).delete(delete_venue))
        .route("/venues/{id}/edit", get(edit_venue_form).post(edit_venue))
}
