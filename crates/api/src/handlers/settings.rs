//! Handlers for the visibility-toggle settings surface.
//!
//! Deliberately unauthenticated: the explicit-content flag is a viewing
//! preference, not a security control, and the original let any client set
//! it. Setting it notifies every in-process subscriber immediately.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use filmgrain_core::visibility::Visibility;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Wire shape of the visibility toggle.
#[derive(Debug, Serialize, Deserialize)]
pub struct VisibilitySetting {
    pub include_explicit: bool,
}

/// GET /api/v1/settings/visibility
pub async fn get_visibility(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<VisibilitySetting>>> {
    Ok(Json(DataResponse {
        data: VisibilitySetting {
            include_explicit: state.visibility.read().includes_explicit(),
        },
    }))
}

/// PUT /api/v1/settings/visibility
///
/// Persist the toggle and broadcast the change to subscribers.
pub async fn put_visibility(
    State(state): State<AppState>,
    Json(input): Json<VisibilitySetting>,
) -> AppResult<Json<DataResponse<VisibilitySetting>>> {
    let value = Visibility::from_flag(input.include_explicit);
    state
        .visibility
        .set(value)
        .map_err(|e| AppError::InternalError(format!("Failed to persist visibility flag: {e}")))?;

    tracing::info!(
        include_explicit = input.include_explicit,
        "Visibility toggle changed",
    );

    Ok(Json(DataResponse {
        data: VisibilitySetting {
            include_explicit: value.includes_explicit(),
        },
    }))
}
