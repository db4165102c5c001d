/**
 * Authentication Middleware
 *
 * Protects the mutating snippet routes. It extracts and verifies the JWT
 * from the Authorization header and attaches a `Session` to the request;
 * handlers receive it through the `AuthSession` extractor.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};

use crate::backend::auth::sessions::{session_from_token, Session};
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

const AUTH_REQUIRED: &str = "Authentication required";

/// Authentication middleware
///
/// 1. Extracts the bearer token from the Authorization header
/// 2. Verifies it against the configured secret
/// 3. Attaches the resulting `Session` to request extensions
///
/// Returns a 401 envelope if the token is missing or invalid.
pub async fn auth_middleware(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| BackendError::unauthorized(AUTH_REQUIRED, "Missing Authorization header"))?;

    // Format: "Bearer <token>"
    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        BackendError::unauthorized(AUTH_REQUIRED, "Invalid Authorization header format")
    })?;

    let session = session_from_token(token, app_state.jwt_secret())
        .map_err(|e| BackendError::unauthorized(AUTH_REQUIRED, format!("Invalid token: {}", e)))?;

    tracing::debug!(user_id = %session.user_id, "Authenticated request");
    request.extensions_mut().insert(session);

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated session
///
/// Rejects with 401 when no session was attached, so a handler mounted
/// without the middleware fails closed.
#[derive(Clone, Debug)]
pub struct AuthSession(pub Session);

impl<S> FromRequestParts<S> for AuthSession
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Session>()
            .cloned()
            .map(AuthSession)
            .ok_or_else(|| {
                tracing::warn!("Session not found in request extensions");
                BackendError::unauthorized(AUTH_REQUIRED, "No session attached to request")
            })
    }
}
