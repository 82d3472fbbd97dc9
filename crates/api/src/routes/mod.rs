//! Route definitions, one module per resource.
//!
//! Paths are stable public contracts, trailing slashes included -- do not
//! rename them without a client migration plan.

pub mod accounts;
pub mod admin;
pub mod cargo;
pub mod clients;
pub mod crew;
pub mod health;
pub mod ports;
pub mod shipments;
pub mod ships;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// ```text
/// POST /register/                      register (public)
/// POST /login/                         login (public)
/// GET  /user_logout/                   revoke sessions + redirect
/// GET  /check_authentication           session probe (public)
/// POST /token/refresh/                 refresh-token exchange (public)
///
/// GET  /admin/users/                   list accounts (admin only)
/// POST /admin/users/{id}/promote       grant superuser (admin only)
/// POST /admin/users/{id}/demote        revoke superuser (admin only)
///
/// GET|POST         /ships/             list, create (auth required)
/// GET|PUT|PATCH|DELETE /ships/{id}/    detail routes (auth required)
/// ... same shape for /cargo/, /crew/, /clients/, /ports/, /shipments/
///
/// /cargo/ list: ?search= (description, cargo type, client company name),
///               ?ordering= weight | created_at (- prefix descends)
/// /crew/  list: ?search= (name, role, ship name),
///               ?ordering= last_name | created_at (- prefix descends)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(accounts::router())
        .merge(admin::router())
        .merge(ships::router())
        .merge(crew::router())
        .merge(cargo::router())
        .merge(clients::router())
        .merge(ports::router())
        .merge(shipments::router())
}
