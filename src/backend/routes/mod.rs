//! Route Configuration Module
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation
//! └── api_routes.rs   - Snippet API routes
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use snipnet::backend::routes::create_router;
//! use snipnet::backend::server::AppState;
//! use snipnet::backend::snippets::InMemorySnippetStore;
//!
//! let state = AppState::new(Arc::new(InMemorySnippetStore::new()), "secret");
//! let router = create_router(state);
//! ```

/// Main router creation
pub mod router;

/// Snippet API routes
pub mod api_routes;

pub use router::create_router;
