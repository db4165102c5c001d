//! Snippet HTTP Handlers
//!
//! Thin axum adapters: pull the session, path parameters and JSON body out
//! of the request and hand them to [`SnippetController`].

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use super::controller::SnippetController;
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthSession;
use crate::backend::response::ApiResponse;
use crate::shared::{Snippet, SnippetPayload, UpdateOneData};

/// POST /api/snippets
pub async fn create_snippet(
    State(controller): State<SnippetController>,
    AuthSession(session): AuthSession,
    payload: Result<Json<SnippetPayload>, JsonRejection>,
) -> Result<ApiResponse<Snippet>, BackendError> {
    let Json(payload) = payload?;
    controller.create_snippet(&session, payload).await
}

/// GET /api/snippets/{id}
pub async fn get_snippet_by_id(
    State(controller): State<SnippetController>,
    Path(id): Path<String>,
) -> Result<ApiResponse<Snippet>, BackendError> {
    controller.get_snippet_by_id(&id).await
}

/// GET /api/snippets
pub async fn get_all_snippets(
    State(controller): State<SnippetController>,
) -> Result<ApiResponse<Vec<Snippet>>, BackendError> {
    controller.get_all_snippets().await
}

/// GET /api/users/{userid}/snippets
pub async fn get_all_user_snippets(
    State(controller): State<SnippetController>,
    Path(user_id): Path<String>,
) -> Result<ApiResponse<Vec<Snippet>>, BackendError> {
    controller.get_all_user_snippets(&user_id).await
}

/// PUT /api/snippets/{id}
pub async fn update_snippet_multi(
    State(controller): State<SnippetController>,
    AuthSession(session): AuthSession,
    Path(id): Path<String>,
    payload: Result<Json<SnippetPayload>, JsonRejection>,
) -> Result<ApiResponse<Snippet>, BackendError> {
    let Json(payload) = payload?;
    controller.update_snippet_multi(&session, &id, payload).await
}

/// PATCH /api/snippets/{id}
pub async fn update_snippet_one(
    State(controller): State<SnippetController>,
    AuthSession(session): AuthSession,
    Path(id): Path<String>,
    payload: Result<Json<UpdateOneData>, JsonRejection>,
) -> Result<ApiResponse<Snippet>, BackendError> {
    let Json(data) = payload?;
    controller.update_snippet_one(&session, &id, data).await
}

/// DELETE /api/snippets/{id}
pub async fn delete_snippet(
    State(controller): State<SnippetController>,
    AuthSession(session): AuthSession,
    Path(id): Path<String>,
) -> Result<StatusCode, BackendError> {
    controller.delete_snippet(&session, &id).await
}
