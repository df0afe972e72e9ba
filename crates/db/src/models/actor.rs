//! Actor entity model and DTOs.

use chrono::NaiveDate;
use cinedex_core::types::{DbId, Timestamp};
use cinedex_core::validation::{require_string, FieldError};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `actors` table.
#[derive(Debug, Clone, FromRow)]
pub struct Actor {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: Option<NaiveDate>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// An actor row with its linked movie ids aggregated from `movie_roles`.
#[derive(Debug, Clone, FromRow)]
pub struct ActorWithMovies {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: Option<NaiveDate>,
    pub movie_ids: Vec<DbId>,
}

/// Transport shape for an actor.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActorDto {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: Option<NaiveDate>,
    /// Ids of movies this actor has a role in.
    pub movies: Vec<DbId>,
}

impl From<ActorWithMovies> for ActorDto {
    fn from(actor: ActorWithMovies) -> Self {
        Self {
            id: actor.id,
            first_name: actor.first_name,
            last_name: actor.last_name,
            birth_date: actor.birth_date,
            movies: actor.movie_ids,
        }
    }
}

impl Actor {
    /// Map a freshly inserted row (no roles yet) to its transport shape.
    pub fn into_dto(self) -> ActorDto {
        ActorDto {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            birth_date: self.birth_date,
            movies: Vec::new(),
        }
    }
}

/// Request DTO for creating an actor.
///
/// Fields are `Option` so a missing field is reported as a field error
/// rather than rejected during deserialization.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateActor {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub birth_date: Option<NaiveDate>,
}

/// A validated actor-creation request.
#[derive(Debug, Clone)]
pub struct NewActor {
    pub first_name: String,
    pub last_name: String,
    pub birth_date: Option<NaiveDate>,
}

impl CreateActor {
    /// Check required fields, returning the validated values.
    pub fn validate(self) -> Result<NewActor, Vec<FieldError>> {
        let errors: Vec<FieldError> = [
            require_string("firstName", self.first_name.as_deref()),
            require_string("lastName", self.last_name.as_deref()),
        ]
        .into_iter()
        .flatten()
        .collect();

        match (self.first_name, self.last_name) {
            (Some(first_name), Some(last_name)) if errors.is_empty() => Ok(NewActor {
                first_name,
                last_name,
                birth_date: self.birth_date,
            }),
            _ => Err(errors),
        }
    }
}
