pub mod actors;
pub mod health;
pub mod movies;

use axum::Router;

use crate::state::AppState;

/// Build the catalog route tree (mounted at the root).
///
/// ```text
/// /actors                              list, create
/// /actors/{actor_id}                   get, delete
/// /actors/{actor_id}/movies            filmography
/// /actors/{actor_id}/movies/{movie_id} link actor with movie (POST)
///
/// /movies                              list, create
/// /movies/search?year=N                exact-year search
/// /movies/{movie_id}                   get, update, delete
/// /movies/{movie_id}/actors            cast
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/actors", actors::router())
        .nest("/movies", movies::router())
}
