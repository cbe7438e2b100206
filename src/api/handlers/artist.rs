//! Artist handlers: listing, search, detail, create, edit.

use axum::Router;
use axum::extract::{Form, Path, State};
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use chrono::Utc;

use super::{SearchForm, listed, parse_id, rejected};
use crate::app_state::AppState;
use crate::domain::{ArtistChanges, ArtistId, Submission};
use crate::error::DirectoryError;
use crate::views::{forms, pages};

/// `GET /artists` — Every artist.
///
/// # Errors
///
/// Returns [`DirectoryError`] on database failure.
pub async fn list_artists(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, DirectoryError> {
    let artists = state.service.artists(Utc::now()).await?;
    Ok(pages::artists(&artists))
}

/// `POST /artists/search` — Case-insensitive name search.
///
/// # Errors
///
/// Returns [`DirectoryError`] on database failure.
pub async fn search_artists(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Result<impl IntoResponse, DirectoryError> {
    let results = state
        .service
        .search_artists(&form.search_term, Utc::now())
        .await?;
    Ok(pages::search_artists(&results, &form.search_term))
}

/// `GET /artists/{id}` — Artist detail with past and upcoming shows.
///
/// # Errors
///
/// Returns [`DirectoryError::NotFound`] for an unknown id.
pub async fn show_artist(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, DirectoryError> {
    let id: ArtistId = parse_id("artist", &id)?;
    let detail = state.service.artist_detail(id, Utc::now()).await?;
    Ok(pages::artist(&detail))
}

/// `GET /artists/create` — Blank artist form.
pub async fn create_artist_form() -> impl IntoResponse {
    forms::new_artist()
}

/// `POST /artists/create` — Store a new artist.
pub async fn create_artist(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Response {
    let submission = Submission::new(pairs);
    let result = match ArtistChanges::from_fields(submission.fields_with_genres()) {
        Ok(changes) => state.service.create_artist(changes).await,
        Err(err) => Err(err),
    };
    match result {
        Ok(artist) => listed(&format!("Artist {}", artist.profile.name)),
        Err(err) => rejected("Artist", err),
    }
}

/// `GET /artists/{id}/edit` — Artist form pre-filled with stored values.
///
/// # Errors
///
/// Returns [`DirectoryError::NotFound`] for an unknown id.
pub async fn edit_artist_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, DirectoryError> {
    let id: ArtistId = parse_id("artist", &id)?;
    let artist = state.service.artist(id).await?;
    Ok(forms::edit_artist(artist.id, &artist.profile))
}

/// `POST /artists/{id}/edit` — Apply a submission to a stored artist.
pub async fn edit_artist(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Response {
    let submission = Submission::new(pairs);
    let parsed = parse_id::<ArtistId>("artist", &id).and_then(|id| {
        ArtistChanges::from_fields(submission.fields_with_genres()).map(|changes| (id, changes))
    });
    let result = match parsed {
        Ok((id, changes)) => state.service.update_artist(id, changes).await,
        Err(err) => Err(err),
    };
    match result {
        Ok(artist) => Redirect::to(&format!("/artists/{}", artist.id)).into_response(),
        Err(err) => rejected("Artist", err),
    }
}

/// Artist routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/artists", get(list_artists))
        .route("/artists/search", post(search_artists))
        .route("/artists/create", get(create_artist_form).post(create_artist))
        .route("/artists/{id}", get(show_artist))
        .route("/artists/{id}/edit", get(edit_artist_form).post(edit_artist))
}
