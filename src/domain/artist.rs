//! Artist records and the artist update operation.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use validator::Validate;

use super::genres::validate_genres;
use super::partition::{Scheduled, ShowPartition};
use super::record_id::{ArtistId, ShowId, VenueId};
use super::submission::{self, FieldMap, FieldSet};
use super::validation::validate_phone;
use crate::error::DirectoryError;

/// Fields an artist submission may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtistField {
    /// `name`
    Name,
    /// `city`
    City,
    /// `state`
    State,
    /// `phone`
    Phone,
    /// `genres`, already comma-joined.
    Genres,
    /// `image_link`
    ImageLink,
    /// `facebook_link`
    FacebookLink,
    /// `website`
    Website,
    /// `seeking_venue` checkbox.
    SeekingVenue,
    /// `seeking_description`
    SeekingDescription,
}

impl FieldSet for ArtistField {
    const ALL: &'static [Self] = &[
        Self::Name,
        Self::City,
        Self::State,
        Self::Phone,
        Self::Genres,
        Self::ImageLink,
        Self::FacebookLink,
        Self::Website,
        Self::SeekingVenue,
        Self::SeekingDescription,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::City => "city",
            Self::State => "state",
            Self::Phone => "phone",
            Self::Genres => "genres",
            Self::ImageLink => "image_link",
            Self::FacebookLink => "facebook_link",
            Self::Website => "website",
            Self::SeekingVenue => "seeking_venue",
            Self::SeekingDescription => "seeking_description",
        }
    }
}

/// Typed artist submission; same conventions as
/// [`VenueChanges`](super::venue::VenueChanges).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtistChanges {
    /// New name.
    pub name: Option<String>,
    /// New city.
    pub city: Option<String>,
    /// New state.
    pub state: Option<String>,
    /// New phone number.
    pub phone: Option<Option<String>>,
    /// New comma-joined genres.
    pub genres: Option<String>,
    /// New image URL.
    pub image_link: Option<Option<String>>,
    /// New facebook URL.
    pub facebook_link: Option<Option<String>>,
    /// New website URL.
    pub website: Option<Option<String>>,
    /// Whether the artist is looking for venues.
    pub seeking_venue: bool,
    /// New seeking description.
    pub seeking_description: Option<Option<String>>,
}

impl ArtistChanges {
    /// Builds typed changes from a collapsed submission.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Validation`] if the submission carries a
    /// key outside [`ArtistField`].
    pub fn from_fields(fields: FieldMap) -> Result<Self, DirectoryError> {
        let seeking_venue = submission::flag(
            fields
                .get(ArtistField::SeekingVenue.name())
                .map(String::as_str),
        );
        let mut changes = Self {
            seeking_venue,
            ..Self::default()
        };
        for (field, value) in submission::classify::<ArtistField>(fields)? {
            match field {
                ArtistField::Name => changes.name = Some(value),
                ArtistField::City => changes.city = Some(value),
                ArtistField::State => changes.state = Some(value),
                ArtistField::Phone => changes.phone = Some(submission::optional_text(value)),
                ArtistField::Genres => changes.genres = Some(value),
                ArtistField::ImageLink => {
                    changes.image_link = Some(submission::optional_text(value));
                }
                ArtistField::FacebookLink => {
                    changes.facebook_link = Some(submission::optional_text(value));
                }
                ArtistField::Website => {
                    changes.website = Some(submission::optional_text(value));
                }
                ArtistField::SeekingVenue => {}
                ArtistField::SeekingDescription => {
                    changes.seeking_description = Some(submission::optional_text(value));
                }
            }
        }
        Ok(changes)
    }
}

/// Every artist column except the primary key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, FromRow, Validate)]
pub struct ArtistProfile {
    /// Display name.
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    /// Home city.
    #[validate(length(min = 1, max = 120, message = "city is required"))]
    pub city: String,
    /// Home state.
    #[validate(length(min = 1, max = 120, message = "state is required"))]
    pub state: String,
    /// Phone number.
    #[validate(custom(function = "validate_phone"))]
    pub phone: Option<String>,
    /// Comma-joined genres.
    #[validate(custom(function = "validate_genres"))]
    pub genres: String,
    /// Image URL.
    #[validate(
        url(message = "image link is not a valid URL"),
        length(max = 500, message = "image link is longer than 500 characters")
    )]
    pub image_link: Option<String>,
    /// Facebook page URL.
    #[validate(
        url(message = "facebook link is not a valid URL"),
        length(max = 500, message = "facebook link is longer than 500 characters")
    )]
    pub facebook_link: Option<String>,
    /// Website URL.
    #[validate(url(message = "website is not a valid URL"))]
    pub website: Option<String>,
    /// Whether the artist is looking for venues.
    pub seeking_venue: bool,
    /// Free-text description of the venues sought.
    pub seeking_description: Option<String>,
}

impl ArtistProfile {
    /// Overwrites every field carried by `changes` and returns the record.
    ///
    /// Nothing is persisted.
    pub fn update(&mut self, changes: ArtistChanges) -> &mut Self {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(city) = changes.city {
            self.city = city;
        }
        if let Some(state) = changes.state {
            self.state = state;
        }
        if let Some(phone) = changes.phone {
            self.phone = phone;
        }
        if let Some(genres) = changes.genres {
            self.genres = genres;
        }
        if let Some(image_link) = changes.image_link {
            self.image_link = image_link;
        }
        if let Some(facebook_link) = changes.facebook_link {
            self.facebook_link = facebook_link;
        }
        if let Some(website) = changes.website {
            self.website = website;
        }
        self.seeking_venue = changes.seeking_venue;
        if let Some(seeking_description) = changes.seeking_description {
            self.seeking_description = seeking_description;
        }
        self
    }

    /// Genres as a list.
    #[must_use]
    pub fn genre_list(&self) -> Vec<&str> {
        super::genres::split(&self.genres).collect()
    }
}

/// A stored artist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Artist {
    /// Primary key.
    pub id: ArtistId,
    /// Column values.
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub profile: ArtistProfile,
}

/// Artist list entry annotated with its upcoming-show count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct ArtistSummary {
    /// Primary key.
    pub id: ArtistId,
    /// Display name.
    pub name: String,
    /// Shows starting after the request's reference instant.
    pub num_upcoming_shows: i64,
}

/// A show by an artist, annotated with the hosting venue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct ArtistShow {
    /// Show primary key.
    pub show_id: ShowId,
    /// Hosting venue.
    pub venue_id: VenueId,
    /// Hosting venue's name.
    pub venue_name: String,
    /// Hosting venue's image URL.
    pub venue_image_link: Option<String>,
    /// Start of the show.
    pub start_time: DateTime<Utc>,
}

impl Scheduled for ArtistShow {
    fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }
}

/// Artist detail page model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistDetail {
    /// The artist itself.
    pub artist: Artist,
    /// Its shows split around the reference instant.
    pub shows: ShowPartition<ArtistShow>,
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::submission::Submission;

    fn form(pairs: &[(&str, &str)]) -> FieldMap {
        Submission::new(
            pairs
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        )
        .fields_with_genres()
    }

    #[test]
    fn seeking_venue_is_coerced_from_checkbox() {
        let Ok(changes) = ArtistChanges::from_fields(form(&[("seeking_venue", "y")])) else {
            panic!("form must parse");
        };
        let mut profile = ArtistProfile::default();
        profile.update(changes);
        assert!(profile.seeking_venue);
    }

    #[test]
    fn venue_only_flag_is_rejected() {
        let result = ArtistChanges::from_fields(form(&[("seeking_talent", "y")]));
        assert!(matches!(result, Err(DirectoryError::Validation(_))));
    }

    #[test]
    fn address_is_not_an_artist_field() {
        let result = ArtistChanges::from_fields(form(&[("address", "1 Main St")]));
        assert!(matches!(result, Err(DirectoryError::Validation(_))));
    }

    #[test]
    fn complete_form_validates() {
        let Ok(changes) = ArtistChanges::from_fields(form(&[
            ("name", "Guns N Petals"),
            ("city", "San Francisco"),
            ("state", "CA"),
            ("phone", "326-123-5000"),
            ("genres", "Rock n Roll"),
            ("image_link", "https://images.example.com/petals.jpg"),
            ("facebook_link", "https://www.facebook.com/GunsNPetals"),
            ("seeking_venue", "y"),
        ])) else {
            panic!("complete form must parse");
        };
        let mut profile = ArtistProfile::default();
        profile.update(changes);

        assert!(profile.validate().is_ok());
        assert_eq!(profile.genre_list(), vec!["Rock n Roll"]);
        assert_eq!(profile.website, None);
    }

    #[test]
    fn edit_keeps_unsubmitted_text() {
        let mut profile = ArtistProfile {
            name: "Matt Quevedo".to_string(),
            city: "New York".to_string(),
            state: "NY".to_string(),
            genres: "Jazz".to_string(),
            seeking_venue: true,
            ..ArtistProfile::default()
        };
        let Ok(changes) = ArtistChanges::from_fields(form(&[
            ("city", "Brooklyn"),
            ("genres", "Jazz"),
            ("genres", "Blues"),
        ])) else {
            panic!("edit form must parse");
        };
        profile.update(changes);

        assert_eq!(profile.name, "Matt Quevedo");
        assert_eq!(profile.city, "Brooklyn");
        assert_eq!(profile.genres, "Jazz,Blues");
        assert!(!profile.seeking_venue);
    }
}
