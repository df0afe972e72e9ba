//! Movie entity model and DTOs.

use cinedex_core::types::{DbId, Timestamp};
use cinedex_core::validation::{
    require_non_empty_list, require_string, year_not_in_future, FieldError,
};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `movies` table.
#[derive(Debug, Clone, FromRow)]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    pub year: i32,
    pub genre: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A movie row with its linked actor ids aggregated from `movie_roles`.
#[derive(Debug, Clone, FromRow)]
pub struct MovieWithActors {
    pub id: DbId,
    pub title: String,
    pub year: i32,
    pub genre: Option<String>,
    pub actor_ids: Vec<DbId>,
}

/// Transport shape for a movie.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieDto {
    pub id: DbId,
    pub title: String,
    pub year: i32,
    pub genre: Option<String>,
    /// Ids of actors with a role in this movie.
    pub actors: Vec<DbId>,
}

impl From<MovieWithActors> for MovieDto {
    fn from(movie: MovieWithActors) -> Self {
        Self {
            id: movie.id,
            title: movie.title,
            year: movie.year,
            genre: movie.genre,
            actors: movie.actor_ids,
        }
    }
}

impl Movie {
    /// Map a row to its transport shape with an explicit cast list.
    pub fn into_dto(self, actor_ids: Vec<DbId>) -> MovieDto {
        MovieDto {
            id: self.id,
            title: self.title,
            year: self.year,
            genre: self.genre,
            actors: actor_ids,
        }
    }
}

/// Query parameters for the movie search endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct MovieSearchParams {
    /// Exact release year to match.
    pub year: i32,
}

/// Request DTO for creating a movie together with its initial cast.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMovie {
    pub title: Option<String>,
    pub year: Option<i32>,
    pub genre: Option<String>,
    pub actor_ids: Option<Vec<DbId>>,
}

/// A validated movie-creation request.
#[derive(Debug, Clone)]
pub struct NewMovie {
    pub title: String,
    pub year: i32,
    pub genre: Option<String>,
    pub actor_ids: Vec<DbId>,
}

impl CreateMovie {
    /// Check required fields, returning the validated values.
    pub fn validate(self) -> Result<NewMovie, Vec<FieldError>> {
        let errors: Vec<FieldError> = [
            require_string("title", self.title.as_deref()),
            year_not_in_future("year", self.year),
            require_non_empty_list("actorIds", self.actor_ids.as_deref()),
        ]
        .into_iter()
        .flatten()
        .collect();

        match (self.title, self.year, self.actor_ids) {
            (Some(title), Some(year), Some(actor_ids)) if errors.is_empty() => Ok(NewMovie {
                title,
                year,
                genre: self.genre,
                actor_ids,
            }),
            _ => Err(errors),
        }
    }
}

/// Request DTO for overwriting a movie's title, year, and genre.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMovie {
    pub title: Option<String>,
    pub year: Option<i32>,
    pub genre: Option<String>,
}

/// A validated movie-update request.
#[derive(Debug, Clone)]
pub struct MovieChanges {
    pub title: String,
    pub year: i32,
    pub genre: Option<String>,
}

impl UpdateMovie {
    /// Check required fields, returning the validated values.
    pub fn validate(self) -> Result<MovieChanges, Vec<FieldError>> {
        let errors: Vec<FieldError> = [
            require_string("title", self.title.as_deref()),
            year_not_in_future("year", self.year),
        ]
        .into_iter()
        .flatten()
        .collect();

        match (self.title, self.year) {
            (Some(title), Some(year)) if errors.is_empty() => Ok(MovieChanges {
                title,
                year,
                genre: self.genre,
            }),
            _ => Err(errors),
        }
    }
}
