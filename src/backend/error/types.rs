/**
 * Backend Error Types
 *
 * This module defines the error kinds a snippet handler can end in.
 * Every variant carries a human-readable `message` meant for the client
 * and a `detail` describing the underlying cause.
 *
 * # Error Kinds
 *
 * - `BadRequest` - Malformed JSON, failed validation, invalid field name
 * - `Unauthorized` - Missing credentials, or session user is not the owner
 * - `NotFound` - Lookup miss (or, for list endpoints, any store failure)
 * - `Internal` - Store failure while creating, replacing or deleting
 *
 * The mapping from kind to HTTP status lives in `status_code()` and nowhere
 * else.
 */

use std::fmt::Display;

use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::SharedError;

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use snipnet::backend::error::BackendError;
///
/// let err = BackendError::not_found("Snippet with abc not found", "no such snippet");
/// assert_eq!(err.status_code().as_u16(), 404);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Bad request: {message} ({detail})")]
    BadRequest {
        /// Human-readable error message
        message: String,
        /// Underlying cause
        detail: String,
    },

    #[error("Unauthorized: {message} ({detail})")]
    Unauthorized { message: String, detail: String },

    #[error("Not found: {message} ({detail})")]
    NotFound { message: String, detail: String },

    #[error("Internal error: {message} ({detail})")]
    Internal { message: String, detail: String },
}

impl BackendError {
    pub fn bad_request(message: impl Into<String>, detail: impl Display) -> Self {
        Self::BadRequest {
            message: message.into(),
            detail: detail.to_string(),
        }
    }

    pub fn unauthorized(message: impl Into<String>, detail: impl Display) -> Self {
        Self::Unauthorized {
            message: message.into(),
            detail: detail.to_string(),
        }
    }

    pub fn not_found(message: impl Into<String>, detail: impl Display) -> Self {
        Self::NotFound {
            message: message.into(),
            detail: detail.to_string(),
        }
    }

    pub fn internal(message: impl Into<String>, detail: impl Display) -> Self {
        Self::Internal {
            message: message.into(),
            detail: detail.to_string(),
        }
    }

    /// Malformed or absent JSON body
    pub fn no_payload(detail: impl Display) -> Self {
        Self::bad_request("No payload attached to req", detail)
    }

    /// Session user does not own the resource
    pub fn not_owner() -> Self {
        Self::unauthorized(
            "You are not authorized to access this resource",
            "Not authorized",
        )
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `BadRequest` - 400 Bad Request
    /// - `Unauthorized` - 401 Unauthorized
    /// - `NotFound` - 404 Not Found
    /// - `Internal` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the client-facing message
    pub fn message(&self) -> &str {
        match self {
            Self::BadRequest { message, .. }
            | Self::Unauthorized { message, .. }
            | Self::NotFound { message, .. }
            | Self::Internal { message, .. } => message,
        }
    }

    /// Get the underlying cause
    pub fn detail(&self) -> &str {
        match self {
            Self::BadRequest { detail, .. }
            | Self::Unauthorized { detail, .. }
            | Self::NotFound { detail, .. }
            | Self::Internal { detail, .. } => detail,
        }
    }
}

impl From<SharedError> for BackendError {
    fn from(err: SharedError) -> Self {
        match &err {
            SharedError::ValidationError(_) => Self::bad_request("Missing parameters", &err),
            SharedError::InvalidField { .. } => {
                Self::bad_request("You can't update that parameter", &err)
            }
        }
    }
}
