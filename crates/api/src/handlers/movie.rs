//! Handlers for the `/movies` resource.

use axum::extract::{Path, Query, State};
use axum::http::{header, HeaderName, StatusCode};
use axum::Json;
use cinedex_core::error::CoreError;
use cinedex_core::types::DbId;
use cinedex_db::models::actor::ActorDto;
use cinedex_db::models::movie::{CreateMovie, MovieDto, MovieSearchParams, UpdateMovie};
use cinedex_db::repositories::{ActorRepo, MovieRepo, MovieRoleRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /movies
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<MovieDto>>> {
    let movies = MovieRepo::list_with_actors(&state.pool).await?;
    Ok(Json(movies.into_iter().map(MovieDto::from).collect()))
}

/// GET /movies/{movie_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(movie_id): Path<DbId>,
) -> AppResult<Json<MovieDto>> {
    let movie = MovieRepo::find_with_actors(&state.pool, movie_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Movie",
            id: movie_id,
        }))?;
    Ok(Json(movie.into()))
}

/// GET /movies/search?year=N
///
/// Exact-year match only; no range or partial matching.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<MovieSearchParams>,
) -> AppResult<Json<Vec<MovieDto>>> {
    let movies = MovieRepo::list_by_year(&state.pool, params.year).await?;
    Ok(Json(movies.into_iter().map(MovieDto::from).collect()))
}

/// GET /movies/{movie_id}/actors
///
/// The cast: every actor with a role in the movie.
pub async fn actors(
    State(state): State<AppState>,
    Path(movie_id): Path<DbId>,
) -> AppResult<Json<Vec<ActorDto>>> {
    if !MovieRepo::exists(&state.pool, movie_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Movie",
            id: movie_id,
        }));
    }

    let actors = ActorRepo::list_by_movie(&state.pool, movie_id).await?;
    Ok(Json(actors.into_iter().map(ActorDto::from).collect()))
}

/// POST /movies
///
/// Creates a movie together with one role row per referenced actor, in a
/// single transaction. A missing actor id fails the whole request with a
/// 404 naming the id; nothing is persisted in that case.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateMovie>,
) -> AppResult<(StatusCode, [(HeaderName, String); 1], Json<MovieDto>)> {
    let new_movie = input.validate().map_err(AppError::Validation)?;

    let movie = MovieRepo::create_with_actors(
        &state.pool,
        &new_movie.title,
        new_movie.year,
        new_movie.genre.as_deref(),
        &new_movie.actor_ids,
    )
    .await?;

    let actor_ids = MovieRoleRepo::actor_ids_by_movie(&state.pool, movie.id).await?;
    let location = format!("/movies/{}", movie.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(movie.into_dto(actor_ids)),
    ))
}

/// PUT /movies/{movie_id}
///
/// Overwrites title, year, and genre.
pub async fn update(
    State(state): State<AppState>,
    Path(movie_id): Path<DbId>,
    Json(input): Json<UpdateMovie>,
) -> AppResult<StatusCode> {
    let changes = input.validate().map_err(AppError::Validation)?;

    let updated = MovieRepo::update(
        &state.pool,
        movie_id,
        &changes.title,
        changes.year,
        changes.genre.as_deref(),
    )
    .await?;

    match updated {
        Some(_) => Ok(StatusCode::NO_CONTENT),
        None => Err(AppError::Core(CoreError::NotFound {
            entity: "Movie",
            id: movie_id,
        })),
    }
}

/// DELETE /movies/{movie_id}
pub async fn delete(
    State(state): State<AppState>,
    Path(movie_id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = MovieRepo::delete(&state.pool, movie_id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Movie",
            id: movie_id,
        }))
    }
}
