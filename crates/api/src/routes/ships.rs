//! Route definitions for the `/ships/` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::ships;
use crate::state::AppState;

/// ```text
/// GET    /ships/       -> list
/// POST   /ships/       -> create
/// GET    /ships/{id}/  -> get_by_id
/// PUT    /ships/{id}/  -> update
/// PATCH  /ships/{id}/  -> update
/// DELETE /ships/{id}/  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/ships/", get(ships::list).post(ships::create))
        .route(
            "/ships/{id}/",
            get(ships::get_by_id)
                .put(ships::update)
                .patch(ships::update)
                .delete(ships::delete),
        )
}
