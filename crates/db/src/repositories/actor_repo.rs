//! Repository for the `actors` table.

use chrono::NaiveDate;
use cinedex_core::types::DbId;
use sqlx::PgPool;

use crate::models::actor::{Actor, ActorWithMovies};

/// Column list for `actors` queries.
const ACTOR_COLUMNS: &str = "id, first_name, last_name, birth_date, created_at, updated_at";

/// Select list aggregating each actor's movie ids from `movie_roles`.
///
/// The `FILTER` clause keeps actors without roles as an empty array
/// instead of `{NULL}`.
const ACTOR_WITH_MOVIES_SELECT: &str = "\
    SELECT a.id, a.first_name, a.last_name, a.birth_date, \
           COALESCE(array_agg(r.movie_id ORDER BY r.movie_id) \
                    FILTER (WHERE r.movie_id IS NOT NULL), '{}') AS movie_ids \
    FROM actors a \
    LEFT JOIN movie_roles r ON r.actor_id = a.id";

/// Provides CRUD operations for actors.
pub struct ActorRepo;

impl ActorRepo {
    /// Insert a new actor and return the created row.
    pub async fn create(
        pool: &PgPool,
        first_name: &str,
        last_name: &str,
        birth_date: Option<NaiveDate>,
    ) -> Result<Actor, sqlx::Error> {
        let query = format!(
            "INSERT INTO actors (first_name, last_name, birth_date) \
             VALUES ($1, $2, $3) \
             RETURNING {ACTOR_COLUMNS}"
        );
        sqlx::query_as::<_, Actor>(&query)
            .bind(first_name)
            .bind(last_name)
            .bind(birth_date)
            .fetch_one(pool)
            .await
    }

    /// Find an actor by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Actor>, sqlx::Error> {
        let query = format!("SELECT {ACTOR_COLUMNS} FROM actors WHERE id = $1");
        sqlx::query_as::<_, Actor>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an actor by ID together with its linked movie ids.
    pub async fn find_with_movies(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ActorWithMovies>, sqlx::Error> {
        let query = format!("{ACTOR_WITH_MOVIES_SELECT} WHERE a.id = $1 GROUP BY a.id");
        sqlx::query_as::<_, ActorWithMovies>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all actors, each with its linked movie ids.
    pub async fn list_with_movies(pool: &PgPool) -> Result<Vec<ActorWithMovies>, sqlx::Error> {
        let query = format!("{ACTOR_WITH_MOVIES_SELECT} GROUP BY a.id ORDER BY a.id");
        sqlx::query_as::<_, ActorWithMovies>(&query)
            .fetch_all(pool)
            .await
    }

    /// List the actors having a role in the given movie.
    ///
    /// Each returned actor carries its full movie id list, not just the
    /// queried movie.
    pub async fn list_by_movie(
        pool: &PgPool,
        movie_id: DbId,
    ) -> Result<Vec<ActorWithMovies>, sqlx::Error> {
        let query = format!(
            "{ACTOR_WITH_MOVIES_SELECT} \
             WHERE EXISTS (SELECT 1 FROM movie_roles m \
                           WHERE m.actor_id = a.id AND m.movie_id = $1) \
             GROUP BY a.id ORDER BY a.id"
        );
        sqlx::query_as::<_, ActorWithMovies>(&query)
            .bind(movie_id)
            .fetch_all(pool)
            .await
    }

    /// Whether an actor with the given ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM actors WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Delete an actor by ID. Cascade deletes its role rows.
    ///
    /// Returns `true` if an actor was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM actors WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
