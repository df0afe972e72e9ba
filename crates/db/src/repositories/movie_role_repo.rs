//! Repository for the `movie_roles` join table.

use cinedex_core::types::DbId;
use sqlx::PgPool;

/// Provides link operations between movies and actors.
pub struct MovieRoleRepo;

impl MovieRoleRepo {
    /// Link an actor to a movie. Idempotent: the composite primary key
    /// plus `ON CONFLICT DO NOTHING` guarantees at most one role row per
    /// (movie, actor) pair even under concurrent requests.
    ///
    /// Returns `true` when a new role row was inserted.
    pub async fn link(
        pool: &PgPool,
        movie_id: DbId,
        actor_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO movie_roles (movie_id, actor_id) \
             VALUES ($1, $2) \
             ON CONFLICT (movie_id, actor_id) DO NOTHING",
        )
        .bind(movie_id)
        .bind(actor_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Whether a role row exists for the given pair.
    pub async fn exists(
        pool: &PgPool,
        movie_id: DbId,
        actor_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM movie_roles \
             WHERE movie_id = $1 AND actor_id = $2)",
        )
        .bind(movie_id)
        .bind(actor_id)
        .fetch_one(pool)
        .await
    }

    /// Ids of all movies the given actor has a role in.
    pub async fn movie_ids_by_actor(
        pool: &PgPool,
        actor_id: DbId,
    ) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT movie_id FROM movie_roles WHERE actor_id = $1 ORDER BY movie_id",
        )
        .bind(actor_id)
        .fetch_all(pool)
        .await
    }

    /// Ids of all actors with a role in the given movie.
    pub async fn actor_ids_by_movie(
        pool: &PgPool,
        movie_id: DbId,
    ) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT actor_id FROM movie_roles WHERE movie_id = $1 ORDER BY actor_id",
        )
        .bind(movie_id)
        .fetch_all(pool)
        .await
    }
}
