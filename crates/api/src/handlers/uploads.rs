//! Handler for poster uploads.
//!
//! Posters are hosted before the film record referencing them is created:
//! the admin form uploads here first, then submits the returned URL with
//! the create/update call.

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use filmgrain_imagehost::client::POSTERS_FOLDER;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// Response payload for a hosted poster.
#[derive(Debug, Serialize)]
pub struct PosterUpload {
    /// Delivery URL (quality/format optimised) -- the value to store.
    pub url: String,
}

/// POST /api/v1/uploads/poster
///
/// Accept a single poster image as multipart form data. Admin only. Returns
/// the rewritten delivery URL; nothing is written to the store here.
pub async fn upload_poster(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let Some(filename) = field.file_name().map(str::to_string) else {
            continue;
        };

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        let hosted = state
            .image_host
            .upload(&filename, data.to_vec(), POSTERS_FOLDER)
            .await?;

        tracing::info!(
            filename = %filename,
            user_id = admin.user_id,
            "Poster uploaded",
        );

        return Ok((
            StatusCode::CREATED,
            Json(DataResponse {
                data: PosterUpload {
                    url: hosted.delivery_url,
                },
            }),
        ));
    }

    Err(AppError::BadRequest(
        "No file received in multipart upload".to_string(),
    ))
}
