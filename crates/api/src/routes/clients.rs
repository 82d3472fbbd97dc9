//! Route definitions for the `/clients/` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::clients;
use crate::state::AppState;

/// ```text
/// GET    /clients/       -> list
/// POST   /clients/       -> create
/// GET    /clients/{id}/  -> get_by_id
/// PUT    /clients/{id}/  -> update
/// PATCH  /clients/{id}/  -> update
/// DELETE /clients/{id}/  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/clients/", get(clients::list).post(clients::create))
        .route(
            "/clients/{id}/",
            get(clients::get_by_id)
                .put(clients::update)
                .patch(clients::update)
                .delete(clients::delete),
        )
}
