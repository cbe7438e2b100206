//! Venue records and the venue update operation.

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

/// Fields a venue submission may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VenueField {
    /// `name`
    Name,
    /// `city`
    City,
    /// `state`
    State,
    /// `address`
    Address,
    /// `phone`
    Phone,
    /// `image_link`
    ImageLink,
    /// `facebook_link`
    FacebookLink,
    /// `genres`, already comma-joined.
    Genres,
    /// `website`
    Website,
    /// `seeking_talent` checkbox.
    SeekingTalent,
    /// `seeking_description`
    SeekingDescription,
}

impl FieldSet for VenueField {
    const ALL: &'static [Self] = &[
        Self::Name,
        Self::City,
        Self::State,
        Self::Address,
        Self::Phone,
        Self::ImageLink,
        Self::FacebookLink,
        Self::Genres,
        Self::Website,
        Self::SeekingTalent,
        Self::SeekingDescription,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::City => "city",
            Self::State => "state",
            Self::Address => "address",
            Self::Phone => "phone",
            Self::ImageLink => "image_link",
            Self::FacebookLink => "facebook_link",
            Self::Genres => "genres",
            Self::Website => "website",
            Self::SeekingTalent => "seeking_talent",
            Self::SeekingDescription => "seeking_description",
        }
    }
}

/// Typed venue submission.
///
/// `None` leaves the stored value untouched; `Some(None)` clears an
/// optional column. The checkbox is always present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VenueChanges {
    /// New name.
    pub name: Option<String>,
    /// New city.
    pub city: Option<String>,
    /// New state.
    pub state: Option<String>,
    /// New street address.
    pub address: Option<String>,
    /// New phone number.
    pub phone: Option<Option<String>>,
    /// New image URL.
    pub image_link: Option<Option<String>>,
    /// New facebook URL.
    pub facebook_link: Option<Option<String>>,
    /// New comma-joined genres.
    pub genres: Option<String>,
    /// New website URL.
    pub website: Option<Option<String>>,
    /// Whether the venue is looking for talent.
    pub seeking_talent: bool,
    /// New seeking description.
    pub seeking_description: Option<Option<String>>,
}

impl VenueChanges {
    /// Builds typed changes from a collapsed submission.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Validation`] if the submission carries a
    /// key outside [`VenueField`].
    pub fn from_fields(fields: FieldMap) -> Result<Self, DirectoryError> {
        let seeking_talent = submission::flag(
            fields
                .get(VenueField::SeekingTalent.name())
                .map(String::as_str),
        );
        let mut changes = Self {
            seeking_talent,
            ..Self::default()
        };
        for (field, value) in submission::classify::<VenueField>(fields)? {
            match field {
                VenueField::Name => changes.name = Some(value),
                VenueField::City => changes.city = Some(value),
                VenueField::State => changes.state = Some(value),
                VenueField::Address => changes.address = Some(value),
                VenueField::Phone => changes.phone = Some(submission::optional_text(value)),
                VenueField::ImageLink => {
                    changes.image_link = Some(submission::optional_text(value));
                }
                VenueField::FacebookLink => {
                    changes.facebook_link = Some(submission::optional_text(value));
                }
                VenueField::Genres => changes.genres = Some(value),
                VenueField::Website => changes.website = Some(submission::optional_text(value)),
                VenueField::SeekingTalent => {}
                VenueField::SeekingDescription => {
                    changes.seeking_description = Some(submission::optional_text(value));
                }
            }
        }
        Ok(changes)
    }
}

/// Every venue column except the primary key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, FromRow, Validate)]
pub struct VenueProfile {
    /// Display name.
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    /// City.
    #[validate(length(min = 1, max = 120, message = "city is required"))]
    pub city: String,
    /// State.
    #[validate(length(min = 1, max = 120, message = "state is required"))]
    pub state: String,
    /// Street address.
    #[validate(length(min = 1, max = 120, message = "address is required"))]
    pub address: String,
    /// Phone number.
    #[validate(custom(function = "validate_phone"))]
    pub phone: Option<String>,
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
    /// Comma-joined genres.
    #[validate(custom(function = "validate_genres"))]
    pub genres: String,
    /// Website URL.
    #[validate(url(message = "website is not a valid URL"))]
    pub website: Option<String>,
    /// Whether the venue is looking for talent.
    pub seeking_talent: bool,
    /// Free-text description of the talent sought.
    pub seeking_description: Option<String>,
}

impl VenueProfile {
    /// Overwrites every field carried by `changes` and returns the record.
    ///
    /// Nothing is persisted.
    pub fn update(&mut self, changes: VenueChanges) -> &mut Self {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(city) = changes.city {
            self.city = city;
        }
        if let Some(state) = changes.state {
            self.state = state;
        }
        if let Some(address) = changes.address {
            self.address = address;
        }
        if let Some(phone) = changes.phone {
            self.phone = phone;
        }
        if let Some(image_link) = changes.image_link {
            self.image_link = image_link;
        }
        if let Some(facebook_link) = changes.facebook_link {
            self.facebook_link = facebook_link;
        }
        if let Some(genres) = changes.genres {
            self.genres = genres;
        }
        if let Some(website) = changes.website {
            self.website = website;
        }
        self.seeking_talent = changes.seeking_talent;
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

/// A stored venue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Venue {
    /// Primary key.
    pub id: VenueId,
    /// Column values.
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub profile: VenueProfile,
}

/// Venue list entry annotated with its upcoming-show count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct VenueSummary {
    /// Primary key.
    pub id: VenueId,
    /// Display name.
    pub name: String,
    /// City.
    pub city: String,
    /// State.
    pub state: String,
    /// Shows starting after the request's reference instant.
    pub num_upcoming_shows: i64,
}

/// A show at a venue, annotated with the performing artist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct VenueShow {
    /// Show primary key.
    pub show_id: ShowId,
    /// Performing artist.
    pub artist_id: ArtistId,
    /// Performing artist's name.
    pub artist_name: String,
    /// Performing artist's image URL.
    pub artist_image_link: Option<String>,
    /// Start of the show.
    pub start_time: DateTime<Utc>,
}

impl Scheduled for VenueShow {
    fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }
}

/// Venue detail page model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueDetail {
    /// The venue itself.
    pub venue: Venue,
    /// Its shows split around the reference instant.
    pub shows: ShowPartition<VenueShow>,
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::genres::{self, GENRE_CHOICES};
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

    fn complete_form() -> FieldMap {
        form(&[
            ("name", "The Musical Hop"),
            ("city", "San Francisco"),
            ("state", "CA"),
            ("address", "1015 Folsom Street"),
            ("phone", "123-123-1234"),
            ("genres", "Jazz"),
            ("genres", "Reggae"),
            ("facebook_link", "https://www.facebook.com/TheMusicalHop"),
            ("website", "https://www.themusicalhop.com"),
            ("seeking_talent", "y"),
            ("seeking_description", "We are on the lookout for a local artist"),
        ])
    }

    #[test]
    fn create_from_complete_form() {
        let Ok(changes) = VenueChanges::from_fields(complete_form()) else {
            panic!("complete form must parse");
        };
        let mut profile = VenueProfile::default();
        profile.update(changes);

        assert_eq!(profile.name, "The Musical Hop");
        assert_eq!(profile.genres, "Jazz,Reggae");
        assert!(profile.seeking_talent);
        assert_eq!(profile.image_link, None);
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn seeking_talent_requires_literal_y() {
        let Ok(changes) = VenueChanges::from_fields(form(&[("seeking_talent", "on")])) else {
            panic!("form must parse");
        };
        assert!(!changes.seeking_talent);
    }

    #[test]
    fn absent_text_fields_are_left_alone() {
        let Ok(changes) = VenueChanges::from_fields(complete_form()) else {
            panic!("complete form must parse");
        };
        let mut profile = VenueProfile::default();
        profile.update(changes);

        let Ok(edit) = VenueChanges::from_fields(form(&[("name", "Musical Hop II")])) else {
            panic!("edit form must parse");
        };
        profile.update(edit);

        assert_eq!(profile.name, "Musical Hop II");
        assert_eq!(profile.city, "San Francisco");
        assert_eq!(profile.genres, "Jazz,Reggae");
        assert!(!profile.seeking_talent);
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn blank_optional_field_clears_column() {
        let mut profile = VenueProfile {
            website: Some("https://example.com".to_string()),
            ..VenueProfile::default()
        };
        let Ok(changes) = VenueChanges::from_fields(form(&[("website", "")])) else {
            panic!("form must parse");
        };
        profile.update(changes);
        assert_eq!(profile.website, None);
    }

    #[test]
    fn unknown_field_is_rejected() {
        let result = VenueChanges::from_fields(form(&[("seeking_venue", "y")]));
        assert!(matches!(result, Err(DirectoryError::Validation(_))));
    }

    #[test]
    fn validation_reports_missing_required_fields() {
        let Err(errors) = VenueProfile::default().validate() else {
            panic!("empty profile must fail validation");
        };
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("address"));
        assert!(fields.contains_key("genres"));
    }

    #[test]
    fn validation_rejects_bad_urls() {
        let Ok(changes) = VenueChanges::from_fields(complete_form()) else {
            panic!("complete form must parse");
        };
        let mut profile = VenueProfile::default();
        profile.update(changes);
        profile.website = Some("not a url".to_string());

        let Err(errors) = profile.validate() else {
            panic!("bad website must fail validation");
        };
        assert!(errors.field_errors().contains_key("website"));
    }

    #[test]
    fn every_genre_fits_the_stored_record() {
        let Ok(changes) = VenueChanges::from_fields(complete_form()) else {
            panic!("complete form must parse");
        };
        let mut profile = VenueProfile::default();
        profile.update(changes);
        profile.genres = genres::join(GENRE_CHOICES);
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn overlong_links_fail_validation() {
        let Ok(changes) = VenueChanges::from_fields(complete_form()) else {
            panic!("complete form must parse");
        };
        let mut profile = VenueProfile::default();
        profile.update(changes);
        profile.facebook_link = Some(format!("https://www.facebook.com/{}", "a".repeat(480)));

        let Err(errors) = profile.validate() else {
            panic!("overlong link must fail validation");
        };
        assert!(errors.field_errors().contains_key("facebook_link"));
    }

    #[test]
    fn genre_list_splits_column() {
        let profile = VenueProfile {
            genres: "Jazz,Reggae,Soul".to_string(),
            ..VenueProfile::default()
        };
        assert_eq!(profile.genre_list(), vec!["Jazz", "Reggae", "Soul"]);
    }
}
