//! HTTP middleware components.
//!
//! Middleware run before route handlers and can short-circuit a request
//! before it reaches a handler.

/// Bearer session authentication middleware
pub mod auth;
