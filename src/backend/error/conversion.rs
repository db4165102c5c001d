/**
 * Error Conversion
 *
 * All backend errors implement `IntoResponse` from Axum, allowing them to be
 * returned directly from handlers.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "message": "Snippet with abc not found",
 *   "error": "no snippet with id abc"
 * }
 * ```
 */

use axum::{
    extract::rejection::JsonRejection,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::backend::error::types::BackendError;

/// Body of every failed response
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope<'a> {
    pub message: &'a str,
    pub error: &'a str,
}

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self.detail(), "{}", self.message());
        } else {
            tracing::warn!(status = status.as_u16(), error = %self.detail(), "{}", self.message());
        }

        let body = ErrorEnvelope {
            message: self.message(),
            error: self.detail(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        BackendError::no_payload(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_into_response_envelope() {
        let response = BackendError::not_found("Snippet with x not found", "missing").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "application/json"
        );

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["message"], "Snippet with x not found");
        assert_eq!(body["error"], "missing");
    }
}
