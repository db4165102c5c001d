//! Success response envelope
//!
//! Handlers return `ApiResponse<T>`, rendered as
//! `{ "message": ..., "data": ... }` with the chosen status code.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Body of every successful response that carries data
#[derive(Debug, Serialize)]
pub struct DataEnvelope<T> {
    pub message: String,
    pub data: T,
}

#[derive(Debug)]
pub struct ApiResponse<T> {
    status: StatusCode,
    message: String,
    data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(status: StatusCode, message: impl Into<String>, data: T) -> Self {
        Self {
            status,
            message: message.into(),
            data,
        }
    }

    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self::new(StatusCode::OK, message, data)
    }

    pub fn created(message: impl Into<String>, data: T) -> Self {
        Self::new(StatusCode::CREATED, message, data)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    pub fn into_data(self) -> T {
        self.data
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        tracing::info!(status = self.status.as_u16(), "{}", self.message);
        let body = DataEnvelope {
            message: self.message,
            data: self.data,
        };
        (self.status, Json(body)).into_response()
    }
}
