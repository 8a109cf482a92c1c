//! Route definitions for the `/frames` resource (cross-film listings).

use axum::routing::get;
use axum::Router;

use crate::handlers::frames;
use crate::state::AppState;

/// Routes mounted at `/frames`.
///
/// ```text
/// GET /recent -> recent_frames
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/recent", get(frames::recent_frames))
}
