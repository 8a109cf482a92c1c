//! Handlers for frames: film-scoped listings, the recent strip, and the
//! admin upload/delete flows.

use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use filmgrain_core::error::CoreError;
use filmgrain_core::types::DbId;
use filmgrain_core::visibility::retain_visible;
use filmgrain_db::models::frame::CreateFrame;
use filmgrain_db::repositories::FrameRepo;
use filmgrain_imagehost::client::FRAMES_FOLDER;

use crate::error::{AppError, AppResult};
use crate::handlers::films::ensure_film_exists;
use crate::handlers::{resolve_visibility, ListingParams};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// Default number of frames in the recent strip.
const DEFAULT_RECENT_COUNT: i64 = 12;

/// Upper bound for the recent strip, to keep the query cheap.
const MAX_RECENT_COUNT: i64 = 100;

/// GET /api/v1/films/{film_id}/frames
///
/// Frames for one film, ascending by display order. The explicit-content
/// exclusion for this path is applied after retrieval.
pub async fn list_film_frames(
    State(state): State<AppState>,
    Path(film_id): Path<DbId>,
    Query(params): Query<ListingParams>,
) -> AppResult<impl IntoResponse> {
    ensure_film_exists(&state.pool, film_id).await?;

    let visibility = resolve_visibility(&params, &state);
    let frames = FrameRepo::list_for_film(&state.pool, film_id).await?;
    let frames = retain_visible(frames, visibility);

    Ok(Json(DataResponse { data: frames }))
}

/// Query parameters for the recent-frames strip.
#[derive(Debug, Deserialize)]
pub struct RecentParams {
    pub count: Option<i64>,
    pub include_explicit: Option<String>,
}

/// GET /api/v1/frames/recent
///
/// Most recent frames across all films. Filtering happens before the limit,
/// so a full strip comes back whenever enough visible frames exist.
pub async fn recent_frames(
    State(state): State<AppState>,
    Query(params): Query<RecentParams>,
) -> AppResult<impl IntoResponse> {
    let count = params.count.unwrap_or(DEFAULT_RECENT_COUNT);
    if !(1..=MAX_RECENT_COUNT).contains(&count) {
        return Err(AppError::BadRequest(format!(
            "count must be between 1 and {MAX_RECENT_COUNT}"
        )));
    }

    let listing = ListingParams {
        include_explicit: params.include_explicit,
    };
    let visibility = resolve_visibility(&listing, &state);
    let frames = FrameRepo::list_recent(&state.pool, count, visibility).await?;

    Ok(Json(DataResponse { data: frames }))
}

/// Query parameters for the frame upload batch.
#[derive(Debug, Deserialize)]
pub struct UploadParams {
    /// Marks every frame of the batch as explicit. Defaults to false.
    pub is_explicit: Option<bool>,
}

/// POST /api/v1/films/{film_id}/frames
///
/// Accept a multipart batch of frame images. Admin only. Files are handled
/// strictly sequentially -- each one is uploaded to the image host and its
/// record written before the next is read -- so progress is deterministic
/// and at most one upload is in flight. A failure aborts the remainder of
/// the batch; frames already created stay.
pub async fn upload_frames(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(film_id): Path<DbId>,
    Query(params): Query<UploadParams>,
    mut multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    ensure_film_exists(&state.pool, film_id).await?;

    let is_explicit = params.is_explicit.unwrap_or(false);
    let mut created = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        // Only file parts carry a filename; skip stray form fields.
        let Some(filename) = field.file_name().map(str::to_string) else {
            continue;
        };

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        let hosted = state
            .image_host
            .upload(&filename, data.to_vec(), FRAMES_FOLDER)
            .await?;

        let frame = FrameRepo::create(
            &state.pool,
            &CreateFrame {
                film_id,
                image_url: hosted.delivery_url,
                is_explicit,
            },
        )
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Film",
            id: film_id,
        }))?;

        created.push(frame);
    }

    if created.is_empty() {
        return Err(AppError::BadRequest(
            "No files received in multipart upload".to_string(),
        ));
    }

    tracing::info!(
        film_id,
        frames = created.len(),
        is_explicit,
        user_id = admin.user_id,
        "Frame batch uploaded",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

/// DELETE /api/v1/films/{film_id}/frames/{id}
///
/// Delete one frame. Admin only. A frame that does not belong to the
/// addressed film is treated as absent.
pub async fn delete_frame(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path((film_id, id)): Path<(DbId, DbId)>,
) -> AppResult<impl IntoResponse> {
    let frame = FrameRepo::find_by_id(&state.pool, id)
        .await?
        .filter(|frame| frame.film_id == film_id)
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Frame",
            id,
        }))?;

    FrameRepo::delete(&state.pool, frame.id).await?;

    tracing::info!(
        frame_id = frame.id,
        film_id,
        user_id = admin.user_id,
        "Frame deleted",
    );

    Ok(StatusCode::NO_CONTENT)
}
