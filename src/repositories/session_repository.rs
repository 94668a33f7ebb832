//! Session store.

use crate::{db::DbPool, models::session::Session};
use async_trait::async_trait;

/// Lookup of signed-in sessions by token hash.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Find the session whose bearer token hashes to `token_hash`.
    async fn find_session_by_token_hash(
        &self,
        token_hash: &str,
    ) -> Result<Option<Session>, sqlx::Error>;
}

/// Repository for session data access
pub struct PgSessionStore {
    pool: DbPool,
}

impl PgSessionStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionStore for PgSessionStore {
    async fn find_session_by_token_hash(
        &self,
        token_hash: &str,
    ) -> Result<Option<Session>, sqlx::Error> {
        sqlx::query_as::<_, Session>(
            "SELECT id, user_id
             FROM sessions
             WHERE token_hash = $1",
        )
        .bind(token_hash)
        .fetch_optional(&self.pool)
        .await
    }
}
