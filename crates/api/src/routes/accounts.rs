//! Route definitions for the account endpoints.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::accounts;
use crate::state::AppState;

/// Account routes.
///
/// ```text
/// POST /register/             -> register
/// POST /login/                -> login
/// GET  /user_logout/          -> logout (redirects)
/// GET  /check_authentication  -> check_authentication
/// POST /token/refresh/        -> refresh
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register/", post(accounts::register))
        .route("/login/", post(accounts::login))
        .route("/user_logout/", get(accounts::logout))
        .route("/check_authentication", get(accounts::check_authentication))
        .route("/token/refresh/", post(accounts::refresh))
}
