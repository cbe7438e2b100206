//! Repository for the `venues` table.

use chrono::{DateTime, Utc};
use sqlx::PgConnection;

use super::contains_pattern;
use crate::domain::{Venue, VenueId, VenueProfile, VenueShow, VenueSummary};

/// Column list for venues queries.
const COLUMNS: &str = "id, name, city, state, address, phone, image_link, facebook_link, \
                       genres, website, seeking_talent, seeking_description";

/// Summary projection with the upcoming-show count; `$1` is the reference instant.
const SUMMARY_SELECT: &str = "SELECT v.id, v.name, v.city, v.state, \
                              COUNT(s.id) FILTER (WHERE s.start_time > $1) AS num_upcoming_shows \
                              FROM venues v LEFT JOIN shows s ON s.venue_id = v.id";

/// Provides CRUD and search operations for venues.
#[derive(Debug)]
pub struct VenueRepo;

impl VenueRepo {
    /// Find a venue by its ID.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`sqlx::Error`] on database failure.
    pub async fn find_by_id(
        conn: &mut PgConnection,
        id: VenueId,
    ) -> Result<Option<Venue>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM venues WHERE id = $1");
        sqlx::query_as::<_, Venue>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    /// List every venue with its upcoming-show count, ordered by state,
    /// city, then id.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`sqlx::Error`] on database failure.
    pub async fn list_summaries(
        conn: &mut PgConnection,
        now: DateTime<Utc>,
    ) -> Result<Vec<VenueSummary>, sqlx::Error> {
        let query = format!("{SUMMARY_SELECT} GROUP BY v.id ORDER BY v.state, v.city, v.id");
        sqlx::query_as::<_, VenueSummary>(&query)
            .bind(now)
            .fetch_all(conn)
            .await
    }

    /// Case-insensitive substring search on the venue name.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`sqlx::Error`] on database failure.
    pub async fn search(
        conn: &mut PgConnection,
        term: &str,
        now: DateTime<Utc>,
    ) -> Result<Vec<VenueSummary>, sqlx::Error> {
        let query = format!(
            "{SUMMARY_SELECT} WHERE v.name ILIKE $2 ESCAPE '\\' GROUP BY v.id ORDER BY v.id"
        );
        sqlx::query_as::<_, VenueSummary>(&query)
            .bind(now)
            .bind(contains_pattern(term))
            .fetch_all(conn)
            .await
    }

    /// Shows hosted by a venue, annotated with the performing artist.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`sqlx::Error`] on database failure.
    pub async fn shows(
        conn: &mut PgConnection,
        id: VenueId,
    ) -> Result<Vec<VenueShow>, sqlx::Error> {
        sqlx::query_as::<_, VenueShow>(
            "SELECT s.id AS show_id, s.artist_id, a.name AS artist_name, \
                    a.image_link AS artist_image_link, s.start_time \
             FROM shows s JOIN artists a ON a.id = s.artist_id \
             WHERE s.venue_id = $1 ORDER BY s.start_time, s.id",
        )
        .bind(id)
        .fetch_all(conn)
        .await
    }

    /// Insert a venue, returning the created row.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`sqlx::Error`]; a duplicate
    /// (name, city, state) surfaces as a unique violation.
    pub async fn insert(
        conn: &mut PgConnection,
        profile: &VenueProfile,
    ) -> Result<Venue, sqlx::Error> {
        let query = format!(
            "INSERT INTO venues (name, city, state, address, phone, image_link, facebook_link,
                                 genres, website, seeking_talent, seeking_description)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Venue>(&query)
            .bind(&profile.name)
            .bind(&profile.city)
            .bind(&profile.state)
            .bind(&profile.address)
            .bind(&profile.phone)
            .bind(&profile.image_link)
            .bind(&profile.facebook_link)
            .bind(&profile.genres)
            .bind(&profile.website)
            .bind(profile.seeking_talent)
            .bind(&profile.seeking_description)
            .fetch_one(conn)
            .await
    }

    /// Overwrite every column of a venue, returning the updated row.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`sqlx::Error`] on database failure.
    pub async fn update(
        conn: &mut PgConnection,
        id: VenueId,
        profile: &VenueProfile,
    ) -> Result<Option<Venue>, sqlx::Error> {
        let query = format!(
            "UPDATE venues SET
                name = $2,
                city = $3,
                state = $4,
                address = $5,
                phone = $6,
                image_link = $7,
                facebook_link = $8,
                genres = $9,
                website = $10,
                seeking_talent = $11,
                seeking_description = $12
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Venue>(&query)
            .bind(id)
            .bind(&profile.name)
            .bind(&profile.city)
            .bind(&profile.state)
            .bind(&profile.address)
            .bind(&profile.phone)
            .bind(&profile.image_link)
            .bind(&profile.facebook_link)
            .bind(&profile.genres)
            .bind(&profile.website)
            .bind(profile.seeking_talent)
            .bind(&profile.seeking_description)
            .fetch_optional(conn)
            .await
    }

    /// Delete a venue by ID; its shows cascade. Returns `true` if a row
    /// was deleted.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`sqlx::Error`] on database failure.
    pub async fn delete(conn: &mut PgConnection, id: VenueId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM venues WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Number of stored venues.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`sqlx::Error`] on database failure.
    pub async fn count(conn: &mut PgConnection) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM venues")
            .fetch_one(conn)
            .await
    }
}
