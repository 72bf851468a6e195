//! Route definitions for the `/brinquedos` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::toy;
use crate::state::AppState;

/// Routes mounted at `/brinquedos`.
///
/// ```text
/// GET    /          -> list
/// POST   /          -> create
/// GET    /{id}      -> get_by_id
/// PUT    /{id}      -> replace
/// PATCH  /{id}      -> partial_update
/// DELETE /{id}      -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(toy::list).post(toy::create))
        .route(
            "/{id}",
            get(toy::get_by_id)
                .put(toy::replace)
                .patch(toy::partial_update)
                .delete(toy::delete),
        )
}
