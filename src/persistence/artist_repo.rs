//! Repository for the `artists` table.

use chrono::{DateTime, Utc};
use sqlx::PgConnection;

use super::contains_pattern;
use crate::domain::{Artist, ArtistId, ArtistProfile, ArtistShow, ArtistSummary};

/// Column list for artists queries.
const COLUMNS: &str = "id, name, city, state, phone, genres, image_link, facebook_link, \
                       website, seeking_venue, seeking_description";

/// Summary projection with the upcoming-show count; `$1` is the reference instant.
const SUMMARY_SELECT: &str = "SELECT a.id, a.name, \
                              COUNT(s.id) FILTER (WHERE s.start_time > $1) AS num_upcoming_shows \
                              FROM artists a LEFT JOIN shows s ON s.artist_id = a.id";

/// Provides CRUD and search operations for artists.
#[derive(Debug)]
pub struct ArtistRepo;

impl ArtistRepo {
    /// Find an artist by its ID.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`sqlx::Error`] on database failure.
    pub async fn find_by_id(
        conn: &mut PgConnection,
        id: ArtistId,
    ) -> Result<Option<Artist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM artists WHERE id = $1");
        sqlx::query_as::<_, Artist>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    /// List every artist with its upcoming-show count, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`sqlx::Error`] on database failure.
    pub async fn list_summaries(
        conn: &mut PgConnection,
        now: DateTime<Utc>,
    ) -> Result<Vec<ArtistSummary>, sqlx::Error> {
        let query = format!("{SUMMARY_SELECT} GROUP BY a.id ORDER BY a.id");
        sqlx::query_as::<_, ArtistSummary>(&query)
            .bind(now)
            .fetch_all(conn)
            .await
    }

    /// Case-insensitive substring search on the artist name.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`sqlx::Error`] on database failure.
    pub async fn search(
        conn: &mut PgConnection,
        term: &str,
        now: DateTime<Utc>,
    ) -> Result<Vec<ArtistSummary>, sqlx::Error> {
        let query = format!(
            "{SUMMARY_SELECT} WHERE a.name ILIKE $2 ESCAPE '\\' GROUP BY a.id ORDER BY a.id"
        );
        sqlx::query_as::<_, ArtistSummary>(&query)
            .bind(now)
            .bind(contains_pattern(term))
            .fetch_all(conn)
            .await
    }

    /// Shows played by an artist, annotated with the hosting venue.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`sqlx::Error`] on database failure.
    pub async fn shows(
        conn: &mut PgConnection,
        id: ArtistId,
    ) -> Result<Vec<ArtistShow>, sqlx::Error> {
        sqlx::query_as::<_, ArtistShow>(
            "SELECT s.id AS show_id, s.venue_id, v.name AS venue_name, \
                    v.image_link AS venue_image_link, s.start_time \
             FROM shows s JOIN venues v ON v.id = s.venue_id \
             WHERE s.artist_id = $1 ORDER BY s.start_time, s.id",
        )
        .bind(id)
        .fetch_all(conn)
        .await
    }

    /// Insert an artist, returning the created row.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`sqlx::Error`]; a duplicate
    /// (name, city, state) surfaces as a unique violation.
    pub async fn insert(
        conn: &mut PgConnection,
        profile: &ArtistProfile,
    ) -> Result<Artist, sqlx::Error> {
        let query = format!(
            "INSERT INTO artists (name, city, state, phone, genres, image_link, facebook_link,
                                  website, seeking_venue, seeking_description)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Artist>(&query)
            .bind(&profile.name)
            .bind(&profile.city)
            .bind(&profile.state)
            .bind(&profile.phone)
            .bind(&profile.genres)
            .bind(&profile.image_link)
            .bind(&profile.facebook_link)
            .bind(&profile.website)
            .bind(profile.seeking_venue)
            .bind(&profile.seeking_description)
            .fetch_one(conn)
            .await
    }

    /// Overwrite every column of an artist, returning the updated row.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`sqlx::Error`] on database failure.
    pub async fn update(
        conn: &mut PgConnection,
        id: ArtistId,
        profile: &ArtistProfile,
    ) -> Result<Option<Artist>, sqlx::Error> {
        let query = format!(
            "UPDATE artists SET
                name = $2,
                city = $3,
                state = $4,
                phone = $5,
                genres = $6,
                image_link = $7,
                facebook_link = $8,
                website = $9,
                seeking_venue = $10,
                seeking_description = $11
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Artist>(&query)
            .bind(id)
            .bind(&profile.name)
            .bind(&profile.city)
            .bind(&profile.state)
            .bind(&profile.phone)
            .bind(&profile.genres)
            .bind(&profile.image_link)
            .bind(&profile.facebook_link)
            .bind(&profile.website)
            .bind(profile.seeking_venue)
            .bind(&profile.seeking_description)
            .fetch_optional(conn)
            .await
    }

    /// Number of stored artists.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`sqlx::Error`] on database failure.
    pub async fn count(conn: &mut PgConnection) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM artists")
            .fetch_one(conn)
            .await
    }
}
