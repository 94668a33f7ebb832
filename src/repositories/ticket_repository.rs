//! Ticket store.

use crate::{
    db::DbPool,
    models::ticket::{Ticket, TicketRow},
};
use async_trait::async_trait;

/// Read access to users' tickets.
#[async_trait]
pub trait TicketStore: Send + Sync {
    /// Find the ticket of the enrollment owned by `user_id`, with its ticket type.
    async fn find_ticket_by_user_id(&self, user_id: i32) -> Result<Option<Ticket>, sqlx::Error>;
}

/// Repository for ticket data access
pub struct PgTicketStore {
    pool: DbPool,
}

impl PgTicketStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TicketStore for PgTicketStore {
    async fn find_ticket_by_user_id(&self, user_id: i32) -> Result<Option<Ticket>, sqlx::Error> {
        let row = sqlx::query_as::<_, TicketRow>(
            r#"
            SELECT t.id, e.user_id, t.status,
                   tt.id AS ticket_type_id,
                   tt.name AS ticket_type_name,
                   tt.is_remote,
                   tt.includes_hotel
            FROM tickets t
            JOIN enrollments e ON e.id = t.enrollment_id
            JOIN ticket_types tt ON tt.id = t.ticket_type_id
            WHERE e.user_id = $1
            LIMIT 1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Ticket::from))
    }
}
