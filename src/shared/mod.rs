//! Shared Module
//!
//! Types used on both sides of the HTTP boundary: the snippet record,
//! request bodies and their validation, and configuration.

/// Snippet record and request bodies
pub mod snippet;

/// Field-level validation results
pub mod validation;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
pub use error::SharedError;
pub use snippet::{
    FieldUpdate, Snippet, SnippetField, SnippetFields, SnippetPayload, UpdateOneData,
};
pub use validation::{FieldViolation, ValidationErrors};
