//! Handlers for the `/ports/` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use harborline_core::error::CoreError;
use harborline_core::types::DbId;
use harborline_core::validation::FieldErrors;
use harborline_db::models::port::{CreatePort, Port, UpdatePort};
use harborline_db::repositories::PortRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAuth;
use crate::query::PaginationParams;
use crate::state::AppState;

/// POST /ports/
pub async fn create(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Json(input): Json<CreatePort>,
) -> AppResult<(StatusCode, Json<Port>)> {
    input
        .validate()
        .map_err(|e| AppError::Validation(FieldErrors::from(e)))?;

    let port = PortRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(port)))
}

/// GET /ports/
pub async fn list(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Vec<Port>>> {
    let ports = PortRepo::list(&state.pool, params.limit, params.offset).await?;
    Ok(Json(ports))
}

/// GET /ports/{id}/
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<Json<Port>> {
    let port = PortRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Port", id }))?;
    Ok(Json(port))
}

/// PUT|PATCH /ports/{id}/
pub async fn update(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePort>,
) -> AppResult<Json<Port>> {
    input
        .validate()
        .map_err(|e| AppError::Validation(FieldErrors::from(e)))?;

    let port = PortRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Port", id }))?;
    Ok(Json(port))
}

/// DELETE /ports/{id}/
pub async fn delete(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = PortRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Port", id }))
    }
}
