//! Route definitions for the `/admin` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Routes mounted at `/admin`. All admin-only.
///
/// ```text
/// POST /reconcile-frame-counts -> reconcile_frame_counts
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/reconcile-frame-counts",
        post(admin::reconcile_frame_counts),
    )
}
