//! Database connectivity probe.

use crate::db::DbPool;
use async_trait::async_trait;

/// Database connectivity probe used by the health endpoint.
#[async_trait]
pub trait HealthCheck: Send + Sync {
    async fn ping(&self) -> Result<(), sqlx::Error>;
}

pub struct PgHealthCheck {
    pool: DbPool,
}

impl PgHealthCheck {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HealthCheck for PgHealthCheck {
    async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
