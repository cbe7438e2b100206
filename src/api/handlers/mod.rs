//! Page handlers organized by resource.
//!
//! Create and edit submissions are acknowledged on the landing page: a
//! success banner with status 200, or an error banner whose status follows
//! [`DirectoryError::status_code`].

pub mod artist;
pub mod home;
pub mod show;
pub mod system;
pub mod venue;

use std::str::FromStr;

use axum::Router;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use crate::app_state::AppState;
use crate::error::DirectoryError;
use crate::views::{Flash, pages};

/// Composes all resource routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(home::routes())
        .merge(venue::routes())
        .merge(artist::routes())
        .merge(show::routes())
}

/// Body of the venue and artist search forms.
#[derive(Debug, Default, Deserialize)]
pub struct SearchForm {
    /// Substring to look for; empty matches everything.
    #[serde(default)]
    pub search_term: String,
}

/// Parses a record id taken from the path.
///
/// A segment that is not a valid id names no record, so it is reported
/// as not found rather than as a malformed request.
fn parse_id<T: FromStr>(entity: &'static str, raw: &str) -> Result<T, DirectoryError> {
    raw.parse().map_err(|_| DirectoryError::not_found(entity, raw))
}

/// Landing page announcing a stored record.
fn listed(label: &str) -> Response {
    let flash = Flash::success(format!("{label} was successfully listed!"));
    (StatusCode::OK, pages::home(Some(&flash))).into_response()
}

/// Landing page explaining why a submission was not stored.
///
/// A missing record renders the 404 page instead, since there is nothing
/// to acknowledge.
fn rejected(kind: &str, err: DirectoryError) -> Response {
    let messages = match &err {
        DirectoryError::NotFound { .. } => return err.into_response(),
        DirectoryError::Validation(messages) => {
            tracing::warn!(kind, error = %err, "submission rejected");
            messages.clone()
        }
        DirectoryError::Conflict(message) => {
            tracing::warn!(kind, error = %err, "submission conflicts with a stored record");
            vec![message.clone()]
        }
        DirectoryError::Persistence(_) | DirectoryError::Internal(_) => {
            tracing::error!(kind, error = %err, "submission could not be stored");
            vec![format!("An error occurred. {kind} could not be listed.")]
        }
    };
    let flash = Flash::error(messages);
    (err.status_code(), pages::home(Some(&flash))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_keeps_status_of_the_error() {
        let response = rejected("Venue", DirectoryError::Validation(vec!["bad".to_string()]));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = rejected("Venue", DirectoryError::Conflict("taken".to_string()));
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let response = rejected("Show", DirectoryError::Persistence(sqlx::Error::PoolTimedOut));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = rejected("Artist", DirectoryError::not_found("artist", 4));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn malformed_ids_are_not_found() {
        let parsed = parse_id::<crate::domain::VenueId>("venue", "abc");
        assert!(matches!(parsed, Err(DirectoryError::NotFound { entity: "venue", .. })));
        let overflow = parse_id::<crate::domain::ArtistId>("artist", "99999999999999999999");
        assert!(matches!(overflow, Err(DirectoryError::NotFound { .. })));
        let parsed = parse_id::<crate::domain::VenueId>("venue", "7").ok();
        assert_eq!(parsed, Some(crate::domain::VenueId::new(7)));
    }

    #[test]
    fn listed_is_ok() {
        assert_eq!(listed("Venue The Musical Hop").status(), StatusCode::OK);
    }
}
