//! Shared Error Types
//!
//! This module defines errors raised while interpreting request bodies,
//! independent of the HTTP layer that eventually reports them.
//!
//! # Error Categories
//!
//! - `ValidationError` - One or more required fields are missing or empty
//! - `InvalidField` - A single-field update names a field outside the editable set
//!
//! # Usage
//!
//! ```rust
//! use snipnet::shared::error::SharedError;
//!
//! let error = SharedError::invalid_field("user_id");
//! assert!(error.to_string().contains("user_id"));
//! ```
use thiserror::Error;

use crate::shared::validation::ValidationErrors;

/// Errors produced by the shared request types
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Required fields missing from a request body
    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationErrors),

    /// Field name not in the editable allow-list
    #[error("Invalid field value '{field}'")]
    InvalidField {
        /// The rejected field name
        field: String,
    },
}

impl SharedError {
    /// Create a new invalid field error
    pub fn invalid_field(field: impl Into<String>) -> Self {
        Self::InvalidField {
            field: field.into(),
        }
    }
}
