//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application-wide error type.
///
/// The set of variants is closed: handlers and services never classify
/// errors by name or message, only by variant.
///
/// # Error Categories
///
/// - **Authentication Errors**: Missing bearer token or unknown session
/// - **Resource Errors**: Ticket or hotel not found
/// - **Entitlement Errors**: The user's ticket does not cover hotel access
/// - **Input Errors**: Malformed identifiers
/// - **Database Errors**: Any sqlx::Error from store operations
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Store operation failed (e.g., connection error, query error).
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Bearer token is missing or has no session.
    ///
    /// Returns HTTP 401 Unauthorized.
    #[error("Unauthorized")]
    Unauthorized,

    /// The user has no ticket, or the requested hotel does not exist.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("Not found")]
    NotFound,

    /// The user's ticket is unpaid, remote, or does not include a hotel.
    ///
    /// Returns HTTP 402 Payment Required.
    #[error("Payment required")]
    PaymentRequired,

    /// Request parameters are malformed.
    ///
    /// Returns HTTP 400 Bad Request.
    /// The String contains details about what was invalid.
    #[error("Bad request")]
    BadRequest(String),
}

/// Convert AppError into an HTTP response.
///
/// # Response Format
///
/// ```json
/// {
///   "error": {
///     "code": "error_type",
///     "message": "Human-readable error message"
///   }
/// }
/// ```
///
/// # Status Code Mapping
///
/// - `Unauthorized` → 401 Unauthorized
/// - `NotFound` → 404 Not Found
/// - `PaymentRequired` → 402 Payment Required
/// - `BadRequest` → 400 Bad Request
/// - `Database` → 400 Bad Request (details are logged, not returned)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "unauthorized", self.to_string()),
            AppError::NotFound => (StatusCode::NOT_FOUND, "not_found", self.to_string()),
            AppError::PaymentRequired => (
                StatusCode::PAYMENT_REQUIRED,
                "payment_required",
                self.to_string(),
            ),
            AppError::BadRequest(ref msg) => (StatusCode::BAD_REQUEST, "bad_request", msg.clone()),
            AppError::Database(ref err) => {
                tracing::error!(error = %err, "store operation failed");
                (
                    StatusCode::BAD_REQUEST,
                    "bad_request",
                    "The request could not be processed".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
