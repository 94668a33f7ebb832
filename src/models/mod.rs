//! Data models representing database entities.
//!
//! This module contains all data structures that map to database tables.

/// Hotel and room models
pub mod hotel;
/// Session model for bearer authentication
pub mod session;
/// Ticket, ticket type and status models
pub mod ticket;
