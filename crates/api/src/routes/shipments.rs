//! Route definitions for the `/shipments/` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::shipments;
use crate::state::AppState;

/// ```text
/// GET    /shipments/       -> list
/// POST   /shipments/       -> create
/// GET    /shipments/{id}/  -> get_by_id
/// PUT    /shipments/{id}/  -> update
/// PATCH  /shipments/{id}/  -> update
/// DELETE /shipments/{id}/  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/shipments/", get(shipments::list).post(shipments::create))
        .route(
            "/shipments/{id}/",
            get(shipments::get_by_id)
                .put(shipments::update)
                .patch(shipments::update)
                .delete(shipments::delete),
        )
}
