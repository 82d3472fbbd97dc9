//! Route definitions for the `/admin/users` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Admin account-management routes (admin role required).
///
/// ```text
/// GET  /admin/users/              -> list_users
/// POST /admin/users/{id}/promote  -> promote
/// POST /admin/users/{id}/demote   -> demote
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/admin/users/", get(admin::list_users))
        .route("/admin/users/{id}/promote", post(admin::promote))
        .route("/admin/users/{id}/demote", post(admin::demote))
}
