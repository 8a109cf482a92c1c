pub mod admin;
pub mod auth;
pub mod films;
pub mod frames;
pub mod health;
pub mod settings;
pub mod uploads;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                              login (public)
///
/// /films                                   list, create
/// /films/{id}                              get, update, delete
/// /films/{film_id}/frames                  list, upload batch (multipart)
/// /films/{film_id}/frames/{id}             delete
///
/// /frames/recent                           landing-page strip (?count, ?include_explicit)
///
/// /uploads/poster                          poster upload (multipart)
///
/// /settings/visibility                     get, set the explicit-content toggle
///
/// /admin/reconcile-frame-counts            counter reconciliation (POST)
/// ```
///
/// Writes require an admin bearer token; listings, detail reads, and the
/// visibility toggle are public.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/films", films::router())
        .nest("/frames", frames::router())
        .nest("/uploads", uploads::router())
        .nest("/settings", settings::router())
        .nest("/admin", admin::router())
}
