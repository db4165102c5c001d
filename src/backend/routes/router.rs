/**
 * Router Configuration
 *
 * Combines the public and authenticated snippet routes into a single
 * Axum router.
 *
 * # Route Order
 *
 * 1. Health check
 * 2. Public API routes
 * 3. Authenticated API routes (merged; same paths, different methods)
 * 4. Fallback handler (404 envelope)
 */

use axum::{routing::get, Json, Router};
use tower_http::trace::TraceLayer;

use crate::backend::error::BackendError;
use crate::backend::routes::api_routes::{configure_protected_routes, configure_public_routes};
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new().route("/health", get(health_check));

    let router = configure_public_routes(router);
    let router = router.merge(configure_protected_routes(&app_state));

    router
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn not_found() -> BackendError {
    BackendError::not_found("Route not found", "no route matches this request")
}
