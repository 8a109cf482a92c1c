//! Administrative maintenance handlers.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use filmgrain_db::repositories::FilmRepo;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// Result of a frame-count reconciliation run.
#[derive(Debug, Serialize)]
pub struct ReconcileResult {
    /// Number of films whose stored count disagreed with the recount.
    pub corrected_films: u64,
}

/// POST /api/v1/admin/reconcile-frame-counts
///
/// Recompute every film's denormalized frame count from the frames table.
/// Admin only. The transactional write path keeps counts correct on its
/// own; this exists to repair damage from out-of-band writes.
pub async fn reconcile_frame_counts(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<ReconcileResult>>> {
    let corrected_films = FilmRepo::reconcile_frame_counts(&state.pool).await?;

    tracing::info!(
        corrected_films,
        user_id = admin.user_id,
        "Frame counts reconciled",
    );

    Ok(Json(DataResponse {
        data: ReconcileResult { corrected_films },
    }))
}
