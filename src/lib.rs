//! snipnet - Snippet API
//!
//! An HTTP API for storing code and text snippets. Anyone may read
//! snippets; creating, replacing, editing and deleting them requires a
//! bearer token, and only the owner of a snippet may change it.
//!
//! # Module Structure
//!
//! - **`shared`** - Transport-agnostic types
//!   - `Snippet` record and request bodies
//!   - Field-level validation results
//!   - Shared error types and configuration
//!
//! - **`backend`** - Axum server
//!   - Snippet controller, handlers and stores (PostgreSQL or in-memory)
//!   - JWT authentication middleware
//!   - JSON response and error envelopes
//!
//! # Usage
//!
//! ```rust,no_run
//! use snipnet::backend::create_app;
//! use snipnet::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(&config).await;
//! let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `shared::SharedError` for request-body problems
//! - `backend::snippets::StoreError` for persistence failures
//! - `backend::BackendError` for everything a handler can answer with

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
