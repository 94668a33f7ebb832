//! Business logic services.
//!
//! Services contain the business rules separated from HTTP handlers. They take
//! their stores as explicit arguments and hold no state of their own.

pub mod hotel_service;
