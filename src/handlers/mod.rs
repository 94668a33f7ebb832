//! HTTP request handlers (route handlers).
//!
//! Each handler extracts request data, delegates to a service, and returns a
//! JSON response or an `AppError`.

/// Health check endpoint
pub mod health;
/// Hotel endpoints
pub mod hotels;
