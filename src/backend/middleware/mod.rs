//! Middleware Module
//!
//! HTTP middleware run before snippet handlers.
//!
//! - **`auth`** - Bearer token verification and the `AuthSession` extractor

pub mod auth;

pub use auth::{auth_middleware, AuthSession};
