//! Repository for the `movies` table.

use cinedex_core::types::DbId;
use sqlx::PgPool;

use crate::models::movie::{Movie, MovieWithActors};

/// Column list for `movies` queries.
const MOVIE_COLUMNS: &str = "id, title, year, genre, created_at, updated_at";

/// Select list aggregating each movie's actor ids from `movie_roles`.
const MOVIE_WITH_ACTORS_SELECT: &str = "\
    SELECT m.id, m.title, m.year, m.genre, \
           COALESCE(array_agg(r.actor_id ORDER BY r.actor_id) \
                    FILTER (WHERE r.actor_id IS NOT NULL), '{}') AS actor_ids \
    FROM movies m \
    LEFT JOIN movie_roles r ON r.movie_id = m.id";

/// Failure modes of [`MovieRepo::create_with_actors`].
#[derive(Debug, thiserror::Error)]
pub enum CreateMovieError {
    /// A referenced actor id has no row. The whole transaction is rolled
    /// back, so neither the movie nor any role row is persisted.
    #[error("Actor with id {0} does not exist")]
    MissingActor(DbId),

    #[error(transparent)]
    Db(#[from] sqlx::Error),
}

/// Provides CRUD operations for movies.
pub struct MovieRepo;

impl MovieRepo {
    /// Insert a movie and one role row per actor id, atomically.
    ///
    /// Every actor id is verified inside the same transaction as the
    /// inserts; the first missing id aborts with
    /// [`CreateMovieError::MissingActor`] and nothing is persisted.
    /// Duplicate ids in the cast list collapse to one role row.
    pub async fn create_with_actors(
        pool: &PgPool,
        title: &str,
        year: i32,
        genre: Option<&str>,
        actor_ids: &[DbId],
    ) -> Result<Movie, CreateMovieError> {
        let mut tx = pool.begin().await?;

        for &actor_id in actor_ids {
            let exists: bool =
                sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM actors WHERE id = $1)")
                    .bind(actor_id)
                    .fetch_one(&mut *tx)
                    .await?;
            if !exists {
                return Err(CreateMovieError::MissingActor(actor_id));
            }
        }

        let query = format!(
            "INSERT INTO movies (title, year, genre) \
             VALUES ($1, $2, $3) \
             RETURNING {MOVIE_COLUMNS}"
        );
        let movie = sqlx::query_as::<_, Movie>(&query)
            .bind(title)
            .bind(year)
            .bind(genre)
            .fetch_one(&mut *tx)
            .await?;

        for &actor_id in actor_ids {
            sqlx::query(
                "INSERT INTO movie_roles (movie_id, actor_id) \
                 VALUES ($1, $2) \
                 ON CONFLICT (movie_id, actor_id) DO NOTHING",
            )
            .bind(movie.id)
            .bind(actor_id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(movie)
    }

    /// Find a movie by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {MOVIE_COLUMNS} FROM movies WHERE id = $1");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a movie by ID together with its linked actor ids.
    pub async fn find_with_actors(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<MovieWithActors>, sqlx::Error> {
        let query = format!("{MOVIE_WITH_ACTORS_SELECT} WHERE m.id = $1 GROUP BY m.id");
        sqlx::query_as::<_, MovieWithActors>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all movies, each with its linked actor ids.
    pub async fn list_with_actors(pool: &PgPool) -> Result<Vec<MovieWithActors>, sqlx::Error> {
        let query = format!("{MOVIE_WITH_ACTORS_SELECT} GROUP BY m.id ORDER BY m.id");
        sqlx::query_as::<_, MovieWithActors>(&query)
            .fetch_all(pool)
            .await
    }

    /// List movies released in exactly the given year.
    pub async fn list_by_year(
        pool: &PgPool,
        year: i32,
    ) -> Result<Vec<MovieWithActors>, sqlx::Error> {
        let query =
            format!("{MOVIE_WITH_ACTORS_SELECT} WHERE m.year = $1 GROUP BY m.id ORDER BY m.id");
        sqlx::query_as::<_, MovieWithActors>(&query)
            .bind(year)
            .fetch_all(pool)
            .await
    }

    /// List the movies the given actor has a role in (the filmography).
    pub async fn list_by_actor(
        pool: &PgPool,
        actor_id: DbId,
    ) -> Result<Vec<MovieWithActors>, sqlx::Error> {
        let query = format!(
            "{MOVIE_WITH_ACTORS_SELECT} \
             WHERE EXISTS (SELECT 1 FROM movie_roles a \
                           WHERE a.movie_id = m.id AND a.actor_id = $1) \
             GROUP BY m.id ORDER BY m.id"
        );
        sqlx::query_as::<_, MovieWithActors>(&query)
            .bind(actor_id)
            .fetch_all(pool)
            .await
    }

    /// Whether a movie with the given ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM movies WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Overwrite a movie's title, year, and genre.
    ///
    /// Returns `None` if no movie with the given ID exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        title: &str,
        year: i32,
        genre: Option<&str>,
    ) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!(
            "UPDATE movies SET title = $2, year = $3, genre = $4, updated_at = now() \
             WHERE id = $1 \
             RETURNING {MOVIE_COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .bind(title)
            .bind(year)
            .bind(genre)
            .fetch_optional(pool)
            .await
    }

    /// Delete a movie by ID. Cascade deletes its role rows.
    ///
    /// Returns `true` if a movie was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
