/**
 * API Route Handlers
 *
 * # Routes
 *
 * ## Public
 * - `GET /api/snippets` - All snippets
 * - `GET /api/snippets/{id}` - One snippet
 * - `GET /api/users/{userid}/snippets` - All snippets of one user
 *
 * ## Authenticated
 * - `POST /api/snippets` - Create
 * - `PUT /api/snippets/{id}` - Replace title, description and code
 * - `PATCH /api/snippets/{id}` - Update one field
 * - `DELETE /api/snippets/{id}` - Delete
 */

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post, put},
    Router,
};

use crate::backend::middleware::auth_middleware;
use crate::backend::server::state::AppState;
use crate::backend::snippets::handlers::{
    create_snippet, delete_snippet, get_all_snippets, get_all_user_snippets, get_snippet_by_id,
    update_snippet_multi, update_snippet_one,
};

pub const SNIPPETS: &str = "/api/snippets";
pub const SNIPPET_ITEM: &str = "/api/snippets/{id}";
pub const USER_SNIPPETS: &str = "/api/users/{userid}/snippets";

/// Routes readable without a session
pub fn configure_public_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route(SNIPPETS, get(get_all_snippets))
        .route(SNIPPET_ITEM, get(get_snippet_by_id))
        .route(USER_SNIPPETS, get(get_all_user_snippets))
}

/// Routes that require a verified bearer token
///
/// The auth middleware is attached as a route layer so it only runs for
/// requests that matched one of these routes.
pub fn configure_protected_routes(app_state: &AppState) -> Router<AppState> {
    Router::new()
        .route(SNIPPETS, post(create_snippet))
        .route(
            SNIPPET_ITEM,
            put(update_snippet_multi)
                .patch(update_snippet_one)
                .delete(delete_snippet),
        )
        .route_layer(from_fn_with_state(app_state.clone(), auth_middleware))
}
