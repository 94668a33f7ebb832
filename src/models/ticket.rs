//! Ticket data models.
//!
//! This module defines:
//! - `TicketStatus`: Payment state of a ticket
//! - `TicketType`: Category of a ticket (remote or in-person, with or without hotel)
//! - `Ticket`: A user's ticket together with its ticket type
//! - `TicketRow`: Flat row returned by the ticket lookup query

/// Payment state of a ticket.
///
/// Maps to the PostgreSQL enum type `ticket_status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "ticket_status", rename_all = "UPPERCASE")]
pub enum TicketStatus {
    Reserved,
    Paid,
    Cancelled,
}

/// Category of a ticket.
///
/// # Database Table
///
/// Maps to the `ticket_types` table. Only the two flags take part in the
/// hotel entitlement decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketType {
    pub id: i32,

    pub name: String,

    /// The attendee follows the event online and has no use for a hotel
    pub is_remote: bool,

    /// The fare covers hotel accommodation
    pub includes_hotel: bool,
}

/// A user's ticket, resolved through their enrollment.
///
/// A ticket always has exactly one ticket type, so it is embedded by value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub id: i32,

    /// Owner of the enrollment the ticket belongs to
    pub user_id: i32,

    pub status: TicketStatus,

    pub ticket_type: TicketType,
}

impl Ticket {
    /// Whether this ticket lets its owner view hotel data.
    ///
    /// Only a paid, in-person ticket whose fare includes the hotel qualifies.
    pub fn grants_hotel_access(&self) -> bool {
        let is_paid = self.status == TicketStatus::Paid;

        is_paid && !self.ticket_type.is_remote && self.ticket_type.includes_hotel
    }
}

/// Row produced by joining `tickets`, `enrollments` and `ticket_types`.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TicketRow {
    pub id: i32,
    pub user_id: i32,
    pub status: TicketStatus,
    pub ticket_type_id: i32,
    pub ticket_type_name: String,
    pub is_remote: bool,
    pub includes_hotel: bool,
}

impl From<TicketRow> for Ticket {
    fn from(row: TicketRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            status: row.status,
            ticket_type: TicketType {
                id: row.ticket_type_id,
                name: row.ticket_type_name,
                is_remote: row.is_remote,
                includes_hotel: row.includes_hotel,
            },
        }
    }
}
