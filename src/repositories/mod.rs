//! Store traits and their PostgreSQL implementations.
//!
//! Services and handlers only see the traits, so every store can be swapped
//! for an in-memory fake in tests.

pub mod health_repository;
pub mod hotel_repository;
pub mod session_repository;
pub mod ticket_repository;

#[cfg(test)]
pub(crate) mod factories;
#[cfg(test)]
pub(crate) mod fakes;

pub use health_repository::{HealthCheck, PgHealthCheck};
pub use hotel_repository::{HotelStore, PgHotelStore};
pub use session_repository::{PgSessionStore, SessionStore};
pub use ticket_repository::{PgTicketStore, TicketStore};
