//! Route definitions for the `/actors` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::actor;
use crate::state::AppState;

/// Routes mounted at `/actors`.
///
/// ```text
/// GET    /                         -> list
/// POST   /                         -> create
/// GET    /{actor_id}               -> get_by_id
/// DELETE /{actor_id}               -> delete
/// GET    /{actor_id}/movies        -> filmography
/// POST   /{actor_id}/movies/{movie_id} -> link_movie
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(actor::list).post(actor::create))
        .route("/{actor_id}", get(actor::get_by_id).delete(actor::delete))
        .route("/{actor_id}/movies", get(actor::filmography))
        .route("/{actor_id}/movies/{movie_id}", post(actor::link_movie))
}
