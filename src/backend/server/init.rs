/**
 * Server Initialization
 *
 * Builds the Axum application from configuration:
 * 1. Select the snippet store (PostgreSQL or in-memory)
 * 2. Create the application state
 * 3. Create the router
 */

use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::load_snippet_store;
use crate::backend::server::state::AppState;
use crate::shared::AppConfig;

/// Create and configure the Axum application
pub async fn create_app(config: &AppConfig) -> Router<()> {
    tracing::info!("Initializing snipnet backend server");

    let store = load_snippet_store(config).await;
    let app_state = AppState::new(store, config.jwt_secret.as_str());

    let app = create_router(app_state);
    tracing::info!("Router configured");
    app
}
