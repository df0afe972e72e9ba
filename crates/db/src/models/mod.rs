//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A `Serialize` transport DTO exposed over HTTP
//! - `Deserialize` request DTOs with explicit `validate()` checks

pub mod actor;
pub mod movie;
pub mod movie_role;
