//! Backend Error Module
//!
//! This module defines the error type returned by HTTP handlers and its
//! conversion into a JSON error envelope.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error kinds and constructors
//! └── conversion.rs - IntoResponse and rejection conversions
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use snipnet::backend::error::BackendError;
//! use axum::response::Response;
//!
//! # async fn example() -> Result<Response, BackendError> {
//! Err(BackendError::not_owner())
//! # }
//! ```

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use conversion::ErrorEnvelope;
pub use types::BackendError;
