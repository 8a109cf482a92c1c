//! Route definitions for the `/uploads` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::uploads;
use crate::state::AppState;

/// Routes mounted at `/uploads`.
///
/// ```text
/// POST /poster -> upload_poster (admin, multipart)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/poster", post(uploads::upload_poster))
}
