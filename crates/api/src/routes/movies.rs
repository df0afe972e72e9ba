//! Route definitions for the `/movies` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::movie;
use crate::state::AppState;

/// Routes mounted at `/movies`.
///
/// ```text
/// GET    /                     -> list
/// POST   /                     -> create (with initial cast)
/// GET    /search?year=N        -> search
/// GET    /{movie_id}           -> get_by_id
/// PUT    /{movie_id}           -> update
/// DELETE /{movie_id}           -> delete
/// GET    /{movie_id}/actors    -> actors
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(movie::list).post(movie::create))
        .route("/search", get(movie::search))
        .route(
            "/{movie_id}",
            get(movie::get_by_id)
                .put(movie::update)
                .delete(movie::delete),
        )
        .route("/{movie_id}/actors", get(movie::actors))
}
