//! Route definitions for the `/crew/` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::crew;
use crate::state::AppState;

/// ```text
/// GET    /crew/       -> list (?search=&ordering=)
/// POST   /crew/       -> create
/// GET    /crew/{id}/  -> get_by_id
/// PUT    /crew/{id}/  -> update
/// PATCH  /crew/{id}/  -> update
/// DELETE /crew/{id}/  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/crew/", get(crew::list).post(crew::create))
        .route(
            "/crew/{id}/",
            get(crew::get_by_id)
                .put(crew::update)
                .patch(crew::update)
                .delete(crew::delete),
        )
}
