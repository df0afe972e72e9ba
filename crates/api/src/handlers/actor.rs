//! Handlers for the `/actors` resource.

use axum::extract::{Path, State};
use axum::http::{header, HeaderName, StatusCode};
use axum::Json;
use cinedex_core::error::CoreError;
use cinedex_core::types::DbId;
use cinedex_db::models::actor::{ActorDto, CreateActor};
use cinedex_db::models::movie::MovieDto;
use cinedex_db::repositories::{ActorRepo, MovieRepo, MovieRoleRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /actors
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ActorDto>>> {
    let actors = ActorRepo::list_with_movies(&state.pool).await?;
    Ok(Json(actors.into_iter().map(ActorDto::from).collect()))
}

/// GET /actors/{actor_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(actor_id): Path<DbId>,
) -> AppResult<Json<ActorDto>> {
    let actor = ActorRepo::find_with_movies(&state.pool, actor_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Actor",
            id: actor_id,
        }))?;
    Ok(Json(actor.into()))
}

/// GET /actors/{actor_id}/movies
///
/// The actor's filmography: every movie the actor has a role in.
pub async fn filmography(
    State(state): State<AppState>,
    Path(actor_id): Path<DbId>,
) -> AppResult<Json<Vec<MovieDto>>> {
    if !ActorRepo::exists(&state.pool, actor_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Actor",
            id: actor_id,
        }));
    }

    let movies = MovieRepo::list_by_actor(&state.pool, actor_id).await?;
    Ok(Json(movies.into_iter().map(MovieDto::from).collect()))
}

/// POST /actors
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateActor>,
) -> AppResult<(StatusCode, [(HeaderName, String); 1], Json<ActorDto>)> {
    let new_actor = input.validate().map_err(AppError::Validation)?;

    let actor = ActorRepo::create(
        &state.pool,
        &new_actor.first_name,
        &new_actor.last_name,
        new_actor.birth_date,
    )
    .await?;

    let location = format!("/actors/{}", actor.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(actor.into_dto()),
    ))
}

/// POST /actors/{actor_id}/movies/{movie_id}
///
/// Links an existing actor with an existing movie. Re-linking an already
/// linked pair is a no-op that still returns 200.
pub async fn link_movie(
    State(state): State<AppState>,
    Path((actor_id, movie_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    if actor_id < 1 || movie_id < 1 {
        return Err(AppError::BadRequest(
            "actorId and movieId must be positive".to_string(),
        ));
    }

    if !ActorRepo::exists(&state.pool, actor_id).await? {
        return Err(AppError::ParamNotFound {
            param: "actorId",
            id: actor_id,
        });
    }

    if !MovieRepo::exists(&state.pool, movie_id).await? {
        return Err(AppError::ParamNotFound {
            param: "movieId",
            id: movie_id,
        });
    }

    MovieRoleRepo::link(&state.pool, movie_id, actor_id).await?;
    Ok(StatusCode::OK)
}

/// DELETE /actors/{actor_id}
pub async fn delete(
    State(state): State<AppState>,
    Path(actor_id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ActorRepo::delete(&state.pool, actor_id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Actor",
            id: actor_id,
        }))
    }
}
