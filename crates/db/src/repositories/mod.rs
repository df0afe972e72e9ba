//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod actor_repo;
pub mod movie_repo;
pub mod movie_role_repo;

pub use actor_repo::ActorRepo;
pub use movie_repo::{CreateMovieError, MovieRepo};
pub use movie_role_repo::MovieRoleRepo;
