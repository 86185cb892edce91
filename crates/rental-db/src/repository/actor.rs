//! # Actor Repository
//!
//! Read access to the actor table. Actors are created by back-office tooling,
//! not this API, so there is no write surface here.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use rental_core::Actor;

/// Repository for actor reads.
#[derive(Debug, Clone)]
pub struct ActorRepository {
    pool: SqlitePool,
}

impl ActorRepository {
    /// Creates a new ActorRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ActorRepository { pool }
    }

    /// Lists every actor, ordered by identity.
    pub async fn list_all(&self) -> DbResult<Vec<Actor>> {
        let actors = sqlx::query_as::<_, Actor>(
            r#"
            SELECT actor_id, first_name, last_name, last_update
            FROM actor
            ORDER BY actor_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = actors.len(), "Listed actors");
        Ok(actors)
    }

    /// Gets an actor by ID.
    ///
    /// ## Returns
    /// * `Ok(Some(Actor))` - Actor found
    /// * `Ok(None)` - Actor not found
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Actor>> {
        let actor = sqlx::query_as::<_, Actor>(
            r#"
            SELECT actor_id, first_name, last_name, last_update
            FROM actor
            WHERE actor_id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(actor)
    }
}
