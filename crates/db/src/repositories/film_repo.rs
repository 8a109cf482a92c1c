//! Repository for the `films` table.

use sqlx::PgPool;

use filmgrain_core::types::DbId;
use filmgrain_core::visibility::Visibility;

use crate::models::film::{CreateFilm, Film, UpdateFilm};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, letterboxd_link, letterboxd_rating, poster_url, \
    frame_count, is_explicit, release_year, director, genre, cast_members, \
    plot, admin_name, admin_review, uploaded_at";

/// Provides CRUD operations for films.
pub struct FilmRepo;

impl FilmRepo {
    /// Insert a new film, returning the created row.
    ///
    /// `frame_count` starts at 0 and `uploaded_at` is assigned by the
    /// database; caller-supplied values for either do not exist in the DTO.
    pub async fn create(pool: &PgPool, input: &CreateFilm) -> Result<Film, sqlx::Error> {
        let query = format!(
            "INSERT INTO films
                (name, letterboxd_link, letterboxd_rating, poster_url, is_explicit,
                 release_year, director, genre, cast_members, plot,
                 admin_name, admin_review)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Film>(&query)
            .bind(&input.name)
            .bind(&input.letterboxd_link)
            .bind(input.letterboxd_rating)
            .bind(&input.poster_url)
            .bind(input.is_explicit)
            .bind(input.release_year)
            .bind(&input.director)
            .bind(&input.genre)
            .bind(&input.cast_members)
            .bind(&input.plot)
            .bind(&input.admin_name)
            .bind(&input.admin_review)
            .fetch_one(pool)
            .await
    }

    /// Find a film by its primary key. A missing id is `None`, not an error.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Film>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM films WHERE id = $1");
        sqlx::query_as::<_, Film>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List films, newest first by upload timestamp (id descending breaks
    /// ties deterministically).
    ///
    /// When hiding explicit content the restriction is part of the query,
    /// not applied after retrieval.
    pub async fn list(pool: &PgPool, visibility: Visibility) -> Result<Vec<Film>, sqlx::Error> {
        let query = if visibility.includes_explicit() {
            format!("SELECT {COLUMNS} FROM films ORDER BY uploaded_at DESC, id DESC")
        } else {
            format!(
                "SELECT {COLUMNS} FROM films
                 WHERE is_explicit = FALSE
                 ORDER BY uploaded_at DESC, id DESC"
            )
        };
        sqlx::query_as::<_, Film>(&query).fetch_all(pool).await
    }

    /// Update a film. Only non-`None` fields in `input` are applied; a
    /// provided empty string, empty list, or `false` is written through.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateFilm,
    ) -> Result<Option<Film>, sqlx::Error> {
        let query = format!(
            "UPDATE films SET
                name = COALESCE($2, name),
                letterboxd_link = COALESCE($3, letterboxd_link),
                letterboxd_rating = COALESCE($4, letterboxd_rating),
                poster_url = COALESCE($5, poster_url),
                is_explicit = COALESCE($6, is_explicit),
                release_year = COALESCE($7, release_year),
                director = COALESCE($8, director),
                genre = COALESCE($9, genre),
                cast_members = COALESCE($10, cast_members),
                plot = COALESCE($11, plot),
                admin_name = COALESCE($12, admin_name),
                admin_review = COALESCE($13, admin_review)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Film>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.letterboxd_link)
            .bind(input.letterboxd_rating)
            .bind(&input.poster_url)
            .bind(input.is_explicit)
            .bind(input.release_year)
            .bind(&input.director)
            .bind(&input.genre)
            .bind(&input.cast_members)
            .bind(&input.plot)
            .bind(&input.admin_name)
            .bind(&input.admin_review)
            .fetch_optional(pool)
            .await
    }

    /// Delete a film by ID. Frames cascade at the schema level.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM films WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Recompute every film's `frame_count` from the live frames table.
    ///
    /// Safety net for the denormalized counter; only rows whose stored count
    /// disagrees with the recount are touched. Returns the number of
    /// corrected films.
    pub async fn reconcile_frame_counts(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE films SET frame_count = counted.n
             FROM (
                 SELECT f.id, COUNT(fr.id)::int AS n
                 FROM films f
                 LEFT JOIN frames fr ON fr.film_id = f.id
                 GROUP BY f.id
             ) counted
             WHERE films.id = counted.id AND films.frame_count <> counted.n",
        )
        .execute(pool)
        .await?;

        let corrected = result.rows_affected();
        if corrected > 0 {
            tracing::warn!(corrected, "Frame counts had drifted and were reconciled");
        }
        Ok(corrected)
    }
}
