//! Repository for the `shows` table.

use sqlx::PgConnection;

use crate::domain::{NewShow, Show, ShowListing};

/// Column list for shows queries.
const COLUMNS: &str = "id, venue_id, artist_id, start_time";

/// Provides create and list operations for shows.
#[derive(Debug)]
pub struct ShowRepo;

impl ShowRepo {
    /// List every show with venue name and artist name/image, ordered by
    /// start time.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`sqlx::Error`] on database failure.
    pub async fn list(conn: &mut PgConnection) -> Result<Vec<ShowListing>, sqlx::Error> {
        sqlx::query_as::<_, ShowListing>(
            "SELECT s.id AS show_id, s.venue_id, v.name AS venue_name, \
                    s.artist_id, a.name AS artist_name, a.image_link AS artist_image_link, \
                    s.start_time \
             FROM shows s \
             JOIN venues v ON v.id = s.venue_id \
             JOIN artists a ON a.id = s.artist_id \
             ORDER BY s.start_time, s.id",
        )
        .fetch_all(conn)
        .await
    }

    /// Insert a show, returning the created row.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`sqlx::Error`]; an unknown venue or artist
    /// surfaces as a foreign key violation.
    pub async fn insert(conn: &mut PgConnection, show: &NewShow) -> Result<Show, sqlx::Error> {
        let query = format!(
            "INSERT INTO shows (venue_id, artist_id, start_time)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Show>(&query)
            .bind(show.venue_id)
            .bind(show.artist_id)
            .bind(show.start_time)
            .fetch_one(conn)
            .await
    }

    /// Number of stored shows.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`sqlx::Error`] on database failure.
    pub async fn count(conn: &mut PgConnection) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM shows")
            .fetch_one(conn)
            .await
    }
}
