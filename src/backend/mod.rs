//! Backend Module
//!
//! Server-side code for the snippet API: an Axum HTTP server exposing
//! create/read/update/delete endpoints over snippets scoped to an
//! authenticated owner.
//!
//! # Architecture
//!
//! - **`server`** - Server initialization, application state, store selection
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`snippets`** - Snippet controller, handlers and stores
//! - **`auth`** - Sessions and JWT verification
//! - **`middleware`** - Authentication middleware and session extractor
//! - **`response`** - Success envelope
//! - **`error`** - Backend error kinds and the error envelope
//!
//! # Request Flow
//!
//! HTTP request → (auth middleware attaches `Session` on protected routes)
//! → handler extracts session, path and JSON body → `SnippetController`
//! validates, loads, checks ownership and calls the store → JSON envelope.
//!
//! # Error Handling
//!
//! Handlers return `Result<_, BackendError>`. The error kind decides the
//! status code; the body is `{ "message": ..., "error": ... }`.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Snippet CRUD
pub mod snippets;

/// Sessions and JWT tokens
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Success response envelope
pub mod response;

/// Backend error types
pub mod error;

pub use error::BackendError;
pub use server::create_app;
pub use snippets::SnippetController;
