//! Movie role join entity.

use cinedex_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `movie_roles` table.
///
/// Composite primary key (movie_id, actor_id); at most one role per pair.
#[derive(Debug, Clone, FromRow)]
pub struct MovieRole {
    pub movie_id: DbId,
    pub actor_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
