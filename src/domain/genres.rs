//! Genre list encoding.
//!
//! A record's genres travel as a repeated `genres` form field and are stored
//! as a single comma-joined `TEXT` column.

use std::borrow::Cow;

use validator::ValidationError;

/// Genres offered by the create and edit forms.
pub const GENRE_CHOICES: &[&str] = &[
    "Alternative",
    "Blues",
    "Classical",
    "Country",
    "Electronic",
    "Folk",
    "Funk",
    "Hip-Hop",
    "Heavy Metal",
    "Instrumental",
    "Jazz",
    "Musical Theatre",
    "Pop",
    "Punk",
    "R&B",
    "Reggae",
    "Rock n Roll",
    "Soul",
    "Other",
];

/// Separator used in the stored column.
pub const SEPARATOR: char = ',';

/// Joins submitted genre values into the stored column form.
#[must_use]
pub fn join<S: AsRef<str>>(values: &[S]) -> String {
    values
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(",")
}

/// Splits a stored column back into individual genres, skipping blanks.
pub fn split(column: &str) -> impl Iterator<Item = &str> {
    column
        .split(SEPARATOR)
        .map(str::trim)
        .filter(|genre| !genre.is_empty())
}

/// Rejects an empty genre list or any genre outside [`GENRE_CHOICES`].
///
/// # Errors
///
/// Returns a `genres` [`ValidationError`] describing the first problem.
pub fn validate_genres(column: &str) -> Result<(), ValidationError> {
    let mut any = false;
    for genre in split(column) {
        any = true;
        if !GENRE_CHOICES.contains(&genre) {
            let mut error = ValidationError::new("genres");
            error.message = Some(Cow::Owned(format!("unknown genre: {genre}")));
            return Err(error);
        }
    }
    if any {
        Ok(())
    } else {
        let mut error = ValidationError::new("genres");
        error.message = Some(Cow::Borrowed("at least one genre is required"));
        Err(error)
    }
}
