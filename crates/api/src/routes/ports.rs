//! Route definitions for the `/ports/` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::ports;
use crate::state::AppState;

/// ```text
/// GET    /ports/       -> list
/// POST   /ports/       -> create
/// GET    /ports/{id}/  -> get_by_id
/// PUT    /ports/{id}/  -> update
/// PATCH  /ports/{id}/  -> update
/// DELETE /ports/{id}/  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/ports/", get(ports::list).post(ports::create))
        .route(
            "/ports/{id}/",
            get(ports::get_by_id)
                .put(ports::update)
                .patch(ports::update)
                .delete(ports::delete),
        )
}
