//! Handlers for the `/films` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use filmgrain_core::error::CoreError;
use filmgrain_core::types::DbId;
use filmgrain_core::validation::{validate_new_film, validate_rating};
use filmgrain_db::models::film::{CreateFilm, UpdateFilm};
use filmgrain_db::repositories::FilmRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::{resolve_visibility, ListingParams};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// Verify that a film exists, returning NotFound if it does not.
pub(crate) async fn ensure_film_exists(pool: &sqlx::PgPool, id: DbId) -> AppResult<()> {
    if FilmRepo::find_by_id(pool, id).await?.is_none() {
        return Err(AppError::Core(CoreError::NotFound { entity: "Film", id }));
    }
    Ok(())
}

/// GET /api/v1/films
///
/// Public listing, newest first. Explicit films are excluded unless the
/// request (or the persisted toggle) opts in.
pub async fn list_films(
    State(state): State<AppState>,
    Query(params): Query<ListingParams>,
) -> AppResult<impl IntoResponse> {
    let visibility = resolve_visibility(&params, &state);
    let films = FilmRepo::list(&state.pool, visibility).await?;

    Ok(Json(DataResponse { data: films }))
}

/// GET /api/v1/films/{id}
///
/// Public detail. A missing id is 404; clients redirect to the listing.
pub async fn get_film(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let film = FilmRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Film", id }))?;

    Ok(Json(DataResponse { data: film }))
}

/// POST /api/v1/films
///
/// Create a film. Admin only. The poster URL must already be hosted (the
/// form uploads it via `/uploads/poster` first); validation runs before any
/// store write.
pub async fn create_film(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateFilm>,
) -> AppResult<impl IntoResponse> {
    validate_new_film(
        &input.name,
        &input.letterboxd_link,
        input.letterboxd_rating,
        &input.poster_url,
    )?;

    let film = FilmRepo::create(&state.pool, &input).await?;

    tracing::info!(
        film_id = film.id,
        name = %film.name,
        user_id = admin.user_id,
        "Film created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: film })))
}

/// PUT /api/v1/films/{id}
///
/// Partial update. Admin only. Omitted fields keep their stored values;
/// provided-empty values clear them.
pub async fn update_film(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateFilm>,
) -> AppResult<impl IntoResponse> {
    if let Some(rating) = input.letterboxd_rating {
        validate_rating(rating)?;
    }
    if let Some(name) = &input.name {
        if name.trim().is_empty() {
            return Err(AppError::Core(CoreError::Validation(
                "Film name cannot be cleared".into(),
            )));
        }
    }

    let film = FilmRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Film", id }))?;

    tracing::info!(film_id = film.id, user_id = admin.user_id, "Film updated");

    Ok(Json(DataResponse { data: film }))
}

/// DELETE /api/v1/films/{id}
///
/// Delete a film and, by cascade, all of its frames. Admin only.
pub async fn delete_film(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !FilmRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound { entity: "Film", id }));
    }

    tracing::info!(film_id = id, user_id = admin.user_id, "Film deleted");

    Ok(StatusCode::NO_CONTENT)
}
