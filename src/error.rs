//! Directory error type with HTTP status code mapping.
//!
//! [`DirectoryError`] is the single error type of the crate. Page handlers
//! either turn it into a flash banner on the landing page or let it render
//! one of the dedicated error pages through [`IntoResponse`].

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use validator::ValidationErrors;

use crate::domain::validation;
use crate::views;

/// PostgreSQL SQLSTATE for `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";

/// PostgreSQL SQLSTATE for `foreign_key_violation`.
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// Server-side error enum with HTTP status code mapping.
///
/// | Variant       | Category                 | HTTP Status |
/// |---------------|--------------------------|-------------|
/// | `Validation`  | bad or unknown field     | 400         |
/// | `NotFound`    | missing record id        | 404         |
/// | `Conflict`    | duplicate name/city/state| 409         |
/// | `Persistence` | any other database error | 500         |
/// | `Internal`    | invariant broken         | 500         |
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    /// The submission was malformed; nothing was written.
    #[error("invalid submission: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// No record with the given id.
    #[error("{entity} {id} not found")]
    NotFound {
        /// Record type, e.g. `"venue"`.
        entity: &'static str,
        /// Requested primary key, as it appeared in the path.
        id: String,
    },

    /// A unique constraint rejected the write.
    #[error("conflict: {0}")]
    Conflict(String),

    /// Database failure; the transaction was rolled back.
    #[error("persistence error: {0}")]
    Persistence(sqlx::Error),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl DirectoryError {
    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Persistence(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Shorthand for a missing venue, artist or show.
    #[must_use]
    pub fn not_found(entity: &'static str, id: impl std::fmt::Display) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    /// Whether the failure is a server-side fault worth an error log.
    #[must_use]
    pub const fn is_server_fault(&self) -> bool {
        matches!(self, Self::Persistence(_) | Self::Internal(_))
    }
}

impl From<sqlx::Error> for DirectoryError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            match db_err.code().as_deref() {
                Some(UNIQUE_VIOLATION) => {
                    let constraint = db_err.constraint().unwrap_or("unknown");
                    return Self::Conflict(format!(
                        "a record with this name, city and state already exists ({constraint})"
                    ));
                }
                Some(FOREIGN_KEY_VIOLATION) => {
                    return Self::Validation(vec![
                        "the referenced venue or artist does not exist".to_string(),
                    ]);
                }
                _ => {}
            }
        }
        Self::Persistence(err)
    }
}

impl From<ValidationErrors> for DirectoryError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(validation::messages(&errors))
    }
}

impl IntoResponse for DirectoryError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if self.is_server_fault() {
            tracing::error!(error = %self, "request failed");
        }
        let page = match &self {
            Self::NotFound { .. } => views::errors::not_found(),
            Self::Validation(messages) => views::errors::bad_request(messages),
            Self::Conflict(message) => views::errors::bad_request(std::slice::from_ref(message)),
            Self::Persistence(_) | Self::Internal(_) => views::errors::server_error(),
        };
        (status, page).into_response()
    }
}
