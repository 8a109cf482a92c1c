//! Route definitions for the `/settings` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::settings;
use crate::state::AppState;

/// Routes mounted at `/settings`.
///
/// ```text
/// GET /visibility -> get_visibility
/// PUT /visibility -> put_visibility
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/visibility",
        get(settings::get_visibility).put(settings::put_visibility),
    )
}
