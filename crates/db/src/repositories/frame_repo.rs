//! Repository for the `frames` table.
//!
//! Frame writes and the owning film's denormalized `frame_count` move
//! together inside a single transaction, so the counter cannot drift when
//! one half of the pair fails.

use sqlx::PgPool;

use filmgrain_core::types::DbId;
use filmgrain_core::visibility::Visibility;

use crate::models::frame::{CreateFrame, Frame};

/// Column list for frames queries.
const COLUMNS: &str =
    "id, film_id, film_name, image_url, is_explicit, display_order, uploaded_at";

/// Provides CRUD operations for frames.
pub struct FrameRepo;

impl FrameRepo {
    /// Insert a new frame and increment the owning film's frame count.
    ///
    /// The film row is locked for the duration of the transaction: its
    /// current `name` becomes the frame's denormalized `film_name` and its
    /// current `frame_count` becomes the frame's `display_order`, then the
    /// count is incremented. Returns `None` when the film does not exist.
    pub async fn create(pool: &PgPool, input: &CreateFrame) -> Result<Option<Frame>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let film: Option<(String, i32)> =
            sqlx::query_as("SELECT name, frame_count FROM films WHERE id = $1 FOR UPDATE")
                .bind(input.film_id)
                .fetch_optional(&mut *tx)
                .await?;

        let Some((film_name, frame_count)) = film else {
            return Ok(None);
        };

        let query = format!(
            "INSERT INTO frames (film_id, film_name, image_url, is_explicit, display_order)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        let frame = sqlx::query_as::<_, Frame>(&query)
            .bind(input.film_id)
            .bind(&film_name)
            .bind(&input.image_url)
            .bind(input.is_explicit)
            .bind(frame_count)
            .fetch_one(&mut *tx)
            .await?;

        sqlx::query("UPDATE films SET frame_count = frame_count + 1 WHERE id = $1")
            .bind(input.film_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(frame))
    }

    /// Find a frame by its primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Frame>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM frames WHERE id = $1");
        sqlx::query_as::<_, Frame>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List frames for a film, ascending by display order (id breaks ties).
    ///
    /// Explicit-content exclusion for this path is applied by the caller
    /// after retrieval, via `filmgrain_core::visibility::retain_visible`.
    pub async fn list_for_film(pool: &PgPool, film_id: DbId) -> Result<Vec<Frame>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM frames
             WHERE film_id = $1
             ORDER BY display_order ASC, id ASC"
        );
        sqlx::query_as::<_, Frame>(&query)
            .bind(film_id)
            .fetch_all(pool)
            .await
    }

    /// List the most recent frames across all films, newest first.
    ///
    /// The explicit restriction is part of the query, so the result holds
    /// `count` visible frames whenever that many exist.
    pub async fn list_recent(
        pool: &PgPool,
        count: i64,
        visibility: Visibility,
    ) -> Result<Vec<Frame>, sqlx::Error> {
        let query = if visibility.includes_explicit() {
            format!(
                "SELECT {COLUMNS} FROM frames
                 ORDER BY uploaded_at DESC, id DESC
                 LIMIT $1"
            )
        } else {
            format!(
                "SELECT {COLUMNS} FROM frames
                 WHERE is_explicit = FALSE
                 ORDER BY uploaded_at DESC, id DESC
                 LIMIT $1"
            )
        };
        sqlx::query_as::<_, Frame>(&query)
            .bind(count)
            .fetch_all(pool)
            .await
    }

    /// Delete a frame and decrement the owning film's frame count,
    /// floored at zero.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let deleted: Option<(DbId,)> =
            sqlx::query_as("DELETE FROM frames WHERE id = $1 RETURNING film_id")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;

        let Some((film_id,)) = deleted else {
            return Ok(false);
        };

        sqlx::query("UPDATE films SET frame_count = GREATEST(frame_count - 1, 0) WHERE id = $1")
            .bind(film_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(true)
    }

    /// Count frames for a given film.
    pub async fn count_for_film(pool: &PgPool, film_id: DbId) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM frames WHERE film_id = $1")
            .bind(film_id)
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }
}
