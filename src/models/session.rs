//! Session model for authentication.
//!
//! A session is created when a user signs in. The bearer token handed to the client is never stored; only its SHA-256 hash is.

/// A session resolved from a bearer token.
///
/// # Database Table
///
/// Read from the `sessions` table, which also holds the token hash and
/// timestamps. Only the columns authentication needs are selected.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Session {
    pub id: i32,

    /// Owner of the session
    ///
    /// Becomes the `user_id` of the request's `AuthContext`.
    pub user_id: i32,
}
