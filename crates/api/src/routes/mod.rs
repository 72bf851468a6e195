pub mod health;
pub mod toy;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree (mounted at the root).
///
/// Route hierarchy:
///
/// ```text
/// /brinquedos                  list, create
/// /brinquedos/{id}             get, replace, partial update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest(crate::handlers::toy::COLLECTION_PATH, toy::router())
}
