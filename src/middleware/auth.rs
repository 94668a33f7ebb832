//! Bearer session authentication middleware.
//!
//! This middleware intercepts every protected request to:
//! 1. Extract the bearer token from the Authorization header
//! 2. Hash it and look up the matching session
//! 3. Inject the session's user into the request
//! 4. Reject unauthenticated requests with HTTP 401

use crate::{error::AppError, routes::AppState};
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use sha2::{Digest, Sha256};

/// Authentication context attached to authenticated requests.
///
/// Route handlers extract it with `Extension<AuthContext>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthContext {
    /// ID of the signed-in user
    pub user_id: i32,
}

/// SHA-256 of a bearer token, hex encoded.
///
/// Sessions are stored under this value, never under the raw token.
pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());

    hex::encode(hasher.finalize())
}

/// Bearer session authentication middleware function.
///
/// # Flow
///
/// 1. Extract `Authorization: Bearer <token>` header from request
/// 2. Hash the `<token>` using SHA-256
/// 3. Look up the session stored under that hash
/// 4. If found: inject `AuthContext`, call next handler
/// 5. If not found: return 401 Unauthorized
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or(AppError::Unauthorized)?;

    let session = state
        .sessions
        .find_session_by_token_hash(&hash_token(token))
        .await?
        .ok_or(AppError::Unauthorized)?;
    tracing::debug!(session_id = session.id, user_id = session.user_id, "request authenticated");

    request.extensions_mut().insert(AuthContext {
        user_id: session.user_id,
    });

    Ok(next.run(request).await)
}
