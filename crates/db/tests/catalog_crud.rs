//! Integration tests for the repository layer against a real database:
//! - Actor and movie CRUD
//! - Idempotent actor-movie linking
//! - Cascade delete of role rows
//! - Exact-year search
//! - Atomicity of movie-with-cast creation

use assert_matches::assert_matches;
use cinedex_db::models::actor::Actor;
use cinedex_db::repositories::{ActorRepo, CreateMovieError, MovieRepo, MovieRoleRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn seed_actor(pool: &PgPool, first_name: &str, last_name: &str) -> Actor {
    ActorRepo::create(pool, first_name, last_name, None)
        .await
        .unwrap()
}

// ---------------------------------------------------------------------------
// Actor CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn test_create_and_find_actor(pool: PgPool) {
    let birth_date = "1940-04-25".parse().unwrap();
    let created = ActorRepo::create(&pool, "Al", "Pacino", Some(birth_date))
        .await
        .unwrap();
    assert_eq!(created.first_name, "Al");
    assert_eq!(created.last_name, "Pacino");
    assert_eq!(created.birth_date, Some(birth_date));

    let found = ActorRepo::find_by_id(&pool, created.id).await.unwrap();
    assert!(found.is_some_and(|a| a.id == created.id));

    assert!(ActorRepo::exists(&pool, created.id).await.unwrap());
    assert!(!ActorRepo::exists(&pool, created.id + 1).await.unwrap());
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_delete_actor(pool: PgPool) {
    let actor = seed_actor(&pool, "Gene", "Hackman").await;

    assert!(ActorRepo::delete(&pool, actor.id).await.unwrap());
    assert!(!ActorRepo::delete(&pool, actor.id).await.unwrap());
    assert!(ActorRepo::find_by_id(&pool, actor.id)
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_list_actors_aggregates_movie_ids(pool: PgPool) {
    let actor = seed_actor(&pool, "Robert", "Duvall").await;
    let movie = MovieRepo::create_with_actors(&pool, "The Godfather", 1972, None, &[actor.id])
        .await
        .unwrap();

    let actors = ActorRepo::list_with_movies(&pool).await.unwrap();
    assert_eq!(actors.len(), 1);
    assert_eq!(actors[0].movie_ids, vec![movie.id]);

    let found = ActorRepo::find_with_movies(&pool, actor.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.movie_ids, vec![movie.id]);
}

// ---------------------------------------------------------------------------
// Linking
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn test_link_is_idempotent(pool: PgPool) {
    let actor = seed_actor(&pool, "Val", "Kilmer").await;
    let other = seed_actor(&pool, "Robert", "De Niro").await;
    let movie = MovieRepo::create_with_actors(&pool, "Heat", 1995, Some("Crime"), &[other.id])
        .await
        .unwrap();

    let inserted = MovieRoleRepo::link(&pool, movie.id, actor.id).await.unwrap();
    assert!(inserted);

    let inserted_again = MovieRoleRepo::link(&pool, movie.id, actor.id).await.unwrap();
    assert!(!inserted_again);

    assert!(MovieRoleRepo::exists(&pool, movie.id, actor.id)
        .await
        .unwrap());
    let actor_ids = MovieRoleRepo::actor_ids_by_movie(&pool, movie.id)
        .await
        .unwrap();
    assert_eq!(actor_ids, vec![other.id, actor.id]);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_cascade_delete_movie_removes_roles(pool: PgPool) {
    let actor = seed_actor(&pool, "Diane", "Keaton").await;
    let movie = MovieRepo::create_with_actors(&pool, "Annie Hall", 1977, None, &[actor.id])
        .await
        .unwrap();

    assert!(MovieRepo::delete(&pool, movie.id).await.unwrap());
    assert!(!MovieRoleRepo::exists(&pool, movie.id, actor.id)
        .await
        .unwrap());
    // The actor itself is untouched.
    assert!(ActorRepo::exists(&pool, actor.id).await.unwrap());
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_cascade_delete_actor_removes_roles(pool: PgPool) {
    let actor = seed_actor(&pool, "Jack", "Nicholson").await;
    let movie = MovieRepo::create_with_actors(&pool, "Chinatown", 1974, None, &[actor.id])
        .await
        .unwrap();

    assert!(ActorRepo::delete(&pool, actor.id).await.unwrap());
    assert!(!MovieRoleRepo::exists(&pool, movie.id, actor.id)
        .await
        .unwrap());
    assert!(MovieRepo::exists(&pool, movie.id).await.unwrap());
}

// ---------------------------------------------------------------------------
// Movie queries
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn test_list_by_year_matches_exactly(pool: PgPool) {
    let actor = seed_actor(&pool, "Keanu", "Reeves").await;
    let matrix = MovieRepo::create_with_actors(&pool, "The Matrix", 1999, None, &[actor.id])
        .await
        .unwrap();
    MovieRepo::create_with_actors(&pool, "Speed", 1994, None, &[actor.id])
        .await
        .unwrap();

    let hits = MovieRepo::list_by_year(&pool, 1999).await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, matrix.id);

    assert!(MovieRepo::list_by_year(&pool, 2001).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_list_by_actor_returns_filmography(pool: PgPool) {
    let actor = seed_actor(&pool, "Al", "Pacino").await;
    let other = seed_actor(&pool, "John", "Cazale").await;
    let godfather =
        MovieRepo::create_with_actors(&pool, "The Godfather", 1972, None, &[actor.id, other.id])
            .await
            .unwrap();
    let serpico = MovieRepo::create_with_actors(&pool, "Serpico", 1973, None, &[actor.id])
        .await
        .unwrap();

    let movies = MovieRepo::list_by_actor(&pool, actor.id).await.unwrap();
    let ids: Vec<i64> = movies.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![godfather.id, serpico.id]);

    let movies = MovieRepo::list_by_actor(&pool, other.id).await.unwrap();
    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0].actor_ids, vec![actor.id, other.id]);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_update_movie_overwrites_fields(pool: PgPool) {
    let actor = seed_actor(&pool, "Harrison", "Ford").await;
    let movie = MovieRepo::create_with_actors(&pool, "Blade Runer", 1983, None, &[actor.id])
        .await
        .unwrap();

    let updated = MovieRepo::update(&pool, movie.id, "Blade Runner", 1982, Some("Sci-Fi"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.title, "Blade Runner");
    assert_eq!(updated.year, 1982);
    assert_eq!(updated.genre.as_deref(), Some("Sci-Fi"));

    let missing = MovieRepo::update(&pool, movie.id + 1, "Nothing", 2000, None)
        .await
        .unwrap();
    assert!(missing.is_none());
}

// ---------------------------------------------------------------------------
// Atomic movie-with-cast creation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn test_create_with_actors_inserts_movie_and_roles(pool: PgPool) {
    let first = seed_actor(&pool, "Marlon", "Brando").await;
    let second = seed_actor(&pool, "Al", "Pacino").await;

    let movie = MovieRepo::create_with_actors(
        &pool,
        "The Godfather",
        1972,
        Some("Crime"),
        &[first.id, second.id],
    )
    .await
    .unwrap();

    let with_actors = MovieRepo::find_with_actors(&pool, movie.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(with_actors.actor_ids, vec![first.id, second.id]);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_create_with_actors_collapses_duplicate_ids(pool: PgPool) {
    let actor = seed_actor(&pool, "Peter", "Sellers").await;

    let movie =
        MovieRepo::create_with_actors(&pool, "Dr. Strangelove", 1964, None, &[actor.id, actor.id])
            .await
            .unwrap();

    let actor_ids = MovieRoleRepo::actor_ids_by_movie(&pool, movie.id)
        .await
        .unwrap();
    assert_eq!(actor_ids, vec![actor.id]);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_create_with_actors_rolls_back_on_missing_actor(pool: PgPool) {
    let actor = seed_actor(&pool, "Gary", "Oldman").await;
    let missing_id = actor.id + 100;

    let result =
        MovieRepo::create_with_actors(&pool, "Leon", 1994, None, &[actor.id, missing_id]).await;
    assert_matches!(result, Err(CreateMovieError::MissingActor(id)) if id == missing_id);

    // Neither the movie nor any role row was persisted.
    assert!(MovieRepo::list_with_actors(&pool).await.unwrap().is_empty());
    let roles: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM movie_roles")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(roles.0, 0);
}
