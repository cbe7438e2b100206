//! Show records: the join between one venue and one artist at one instant.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use validator::Validate;

use super::record_id::{ArtistId, ShowId, VenueId};
use super::submission::{self, FieldMap, FieldSet};
use super::validation;
use crate::error::DirectoryError;

/// Naive formats accepted for `start_time`, interpreted as UTC.
const START_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Fields a show submission may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowField {
    /// `venue_id`
    VenueId,
    /// `artist_id`
    ArtistId,
    /// `start_time`
    StartTime,
}

impl FieldSet for ShowField {
    const ALL: &'static [Self] = &[Self::VenueId, Self::ArtistId, Self::StartTime];

    fn name(self) -> &'static str {
        match self {
            Self::VenueId => "venue_id",
            Self::ArtistId => "artist_id",
            Self::StartTime => "start_time",
        }
    }
}

/// Parses a submitted start time.
///
/// Accepts RFC 3339 or one of the naive formats, which are taken as UTC.
#[must_use]
pub fn parse_start_time(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }
    START_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|naive| naive.and_utc())
}

/// Typed show submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShowChanges {
    /// Hosting venue.
    pub venue_id: Option<VenueId>,
    /// Performing artist.
    pub artist_id: Option<ArtistId>,
    /// Start of the show.
    pub start_time: Option<DateTime<Utc>>,
}

impl ShowChanges {
    /// Builds typed changes from a collapsed submission.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Validation`] for unknown keys and for
    /// values that do not coerce to an id or a timestamp.
    pub fn from_fields(fields: FieldMap) -> Result<Self, DirectoryError> {
        let mut changes = Self::default();
        let mut problems = Vec::new();
        for (field, value) in submission::classify::<ShowField>(fields)? {
            match field {
                ShowField::VenueId => match value.parse() {
                    Ok(id) => changes.venue_id = Some(id),
                    Err(_) => problems.push(format!("venue_id is not a number: {value}")),
                },
                ShowField::ArtistId => match value.parse() {
                    Ok(id) => changes.artist_id = Some(id),
                    Err(_) => problems.push(format!("artist_id is not a number: {value}")),
                },
                ShowField::StartTime => match parse_start_time(&value) {
                    Some(start_time) => changes.start_time = Some(start_time),
                    None => problems.push(format!("start_time is not a date and time: {value}")),
                },
            }
        }
        if problems.is_empty() {
            Ok(changes)
        } else {
            Err(DirectoryError::Validation(problems))
        }
    }
}

/// A show being assembled from a submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct ShowDraft {
    /// Hosting venue.
    #[validate(required(message = "venue_id is required"))]
    pub venue_id: Option<VenueId>,
    /// Performing artist.
    #[validate(required(message = "artist_id is required"))]
    pub artist_id: Option<ArtistId>,
    /// Start of the show.
    #[validate(required(message = "start_time is required"))]
    pub start_time: Option<DateTime<Utc>>,
}

impl ShowDraft {
    /// Overwrites every field carried by `changes` and returns the draft.
    pub fn update(&mut self, changes: ShowChanges) -> &mut Self {
        if let Some(venue_id) = changes.venue_id {
            self.venue_id = Some(venue_id);
        }
        if let Some(artist_id) = changes.artist_id {
            self.artist_id = Some(artist_id);
        }
        if let Some(start_time) = changes.start_time {
            self.start_time = Some(start_time);
        }
        self
    }

    /// Converts into an insertable show.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Validation`] when a column is missing;
    /// every column of `shows` is `NOT NULL`.
    pub fn complete(&self) -> Result<NewShow, DirectoryError> {
        match (self.venue_id, self.artist_id, self.start_time) {
            (Some(venue_id), Some(artist_id), Some(start_time)) => Ok(NewShow {
                venue_id,
                artist_id,
                start_time,
            }),
            _ => Err(self.validate().map_or_else(
                |errors| DirectoryError::Validation(validation::messages(&errors)),
                |()| DirectoryError::Internal("incomplete show passed validation".to_string()),
            )),
        }
    }
}

/// Insertable show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewShow {
    /// Hosting venue.
    pub venue_id: VenueId,
    /// Performing artist.
    pub artist_id: ArtistId,
    /// Start of the show.
    pub start_time: DateTime<Utc>,
}

/// A stored show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, FromRow)]
pub struct Show {
    /// Primary key.
    pub id: ShowId,
    /// Hosting venue.
    pub venue_id: VenueId,
    /// Performing artist.
    pub artist_id: ArtistId,
    /// Start of the show.
    pub start_time: DateTime<Utc>,
}

/// Show list entry annotated with both sides of the relationship.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct ShowListing {
    /// Show primary key.
    pub show_id: ShowId,
    /// Hosting venue.
    pub venue_id: VenueId,
    /// Hosting venue's name.
    pub venue_name: String,
    /// Performing artist.
    pub artist_id: ArtistId,
    /// Performing artist's name.
    pub artist_name: String,
    /// Performing artist's image URL.
    pub artist_image_link: Option<String>,
    /// Start of the show.
    pub start_time: DateTime<Utc>,
}
