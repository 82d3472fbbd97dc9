//! Handlers for the `/admin/users` resource (admin only).
//!
//! Promotion and demotion flip the superuser flag; the paired profile role
//! is re-derived inside the same transaction by the repository.

use axum::extract::{Path, State};
use axum::Json;
use harborline_core::error::CoreError;
use harborline_core::types::DbId;
use harborline_db::models::user::UserWithRole;
use harborline_db::repositories::UserRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// Response body for promote/demote: the account with its re-derived role.
#[derive(Debug, Serialize)]
pub struct AccountRoleResponse {
    pub id: DbId,
    pub email: String,
    pub is_superuser: bool,
    pub role: String,
}

/// GET /admin/users/
pub async fn list_users(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<Vec<UserWithRole>>> {
    let users = UserRepo::list_with_roles(&state.pool).await?;
    Ok(Json(users))
}

/// POST /admin/users/{id}/promote
pub async fn promote(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<AccountRoleResponse>> {
    set_superuser(&state, id, true).await
}

/// POST /admin/users/{id}/demote
///
/// Clears the superuser flag. An existing profile role is kept -- demotion
/// never downgrades the role automatically.
pub async fn demote(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<AccountRoleResponse>> {
    set_superuser(&state, id, false).await
}

async fn set_superuser(
    state: &AppState,
    id: DbId,
    is_superuser: bool,
) -> AppResult<Json<AccountRoleResponse>> {
    let (user, profile) = UserRepo::set_superuser(&state.pool, id, is_superuser)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;

    Ok(Json(AccountRoleResponse {
        id: user.id,
        email: user.email,
        is_superuser: user.is_superuser,
        role: profile.role,
    }))
}
