//! Route definitions for the `/cargo/` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::cargo;
use crate::state::AppState;

/// ```text
/// GET    /cargo/       -> list (?search=&ordering=)
/// POST   /cargo/       -> create
/// GET    /cargo/{id}/  -> get_by_id
/// PUT    /cargo/{id}/  -> update
/// PATCH  /cargo/{id}/  -> update
/// DELETE /cargo/{id}/  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/cargo/", get(cargo::list).post(cargo::create))
        .route(
            "/cargo/{id}/",
            get(cargo::get_by_id)
                .put(cargo::update)
                .patch(cargo::update)
                .delete(cargo::delete),
        )
}
