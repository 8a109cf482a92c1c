//! Route definitions for the `/films` resource.
//!
//! Also nests film-scoped frame routes under `/films/{film_id}/frames`.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::{films, frames};
use crate::state::AppState;

/// Routes mounted at `/films`.
///
/// ```text
/// GET    /                             -> list_films
/// POST   /                             -> create_film (admin)
/// GET    /{id}                         -> get_film
/// PUT    /{id}                         -> update_film (admin)
/// DELETE /{id}                         -> delete_film (admin)
///
/// GET    /{film_id}/frames             -> list_film_frames
/// POST   /{film_id}/frames             -> upload_frames (admin, multipart)
/// DELETE /{film_id}/frames/{id}        -> delete_frame (admin)
/// ```
pub fn router() -> Router<AppState> {
    let frame_routes = Router::new()
        .route(
            "/",
            get(frames::list_film_frames).post(frames::upload_frames),
        )
        .route("/{id}", delete(frames::delete_frame));

    Router::new()
        .route("/", get(films::list_films).post(films::create_film))
        .route(
            "/{id}",
            get(films::get_film)
                .put(films::update_film)
                .delete(films::delete_film),
        )
        .nest("/{film_id}/frames", frame_routes)
}
