/**
 * Application State Management
 *
 * `AppState` is the central state container handed to the router. The
 * `FromRef` implementations let handlers extract only the part they need,
 * following Axum's recommended pattern.
 *
 * # Example
 *
 * ```rust,ignore
 * use axum::extract::State;
 * use snipnet::backend::snippets::SnippetController;
 *
 * async fn handler(State(controller): State<SnippetController>) {
 *     let snippets = controller.get_all_snippets().await;
 * }
 * ```
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::snippets::{SharedSnippetStore, SnippetController};

#[derive(Clone)]
pub struct AppState {
    /// Snippet request rules over the configured store
    pub snippets: SnippetController,

    /// Secret used by the auth middleware to verify bearer tokens
    jwt_secret: Arc<str>,
}

impl AppState {
    pub fn new(store: SharedSnippetStore, jwt_secret: impl Into<Arc<str>>) -> Self {
        Self {
            snippets: SnippetController::new(store),
            jwt_secret: jwt_secret.into(),
        }
    }

    pub fn jwt_secret(&self) -> &str {
        &self.jwt_secret
    }
}

impl FromRef<AppState> for SnippetController {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.snippets.clone()
    }
}
