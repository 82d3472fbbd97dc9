//! Handlers for the `/cargo/` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use harborline_core::entities;
use harborline_core::error::CoreError;
use harborline_core::types::DbId;
use harborline_core::validation::FieldErrors;
use harborline_db::models::cargo::{Cargo, CreateCargo, UpdateCargo};
use harborline_db::repositories::CargoRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAuth;
use crate::query::ListParams;
use crate::state::AppState;

/// POST /cargo/
pub async fn create(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Json(input): Json<CreateCargo>,
) -> AppResult<(StatusCode, Json<Cargo>)> {
    let mut errors = match input.validate() {
        Ok(()) => FieldErrors::new(),
        Err(e) => e.into(),
    };
    check_cargo_type(&mut errors, input.cargo_type.as_deref());
    errors.into_result().map_err(AppError::Validation)?;

    let cargo = CargoRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(cargo)))
}

/// GET /cargo/
///
/// Supports `?search=` over description, cargo type, and client company
/// name, and `?ordering=` by `weight` or `created_at` (`-` prefix descends).
pub async fn list(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<Cargo>>> {
    let cargo = CargoRepo::list(
        &state.pool,
        params.search.as_deref(),
        params.ordering.as_deref(),
        params.limit,
        params.offset,
    )
    .await?;
    Ok(Json(cargo))
}

/// GET /cargo/{id}/
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<Json<Cargo>> {
    let cargo = CargoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Cargo", id }))?;
    Ok(Json(cargo))
}

/// PUT|PATCH /cargo/{id}/
pub async fn update(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCargo>,
) -> AppResult<Json<Cargo>> {
    let mut errors = match input.validate() {
        Ok(()) => FieldErrors::new(),
        Err(e) => e.into(),
    };
    check_cargo_type(&mut errors, input.cargo_type.as_deref());
    errors.into_result().map_err(AppError::Validation)?;

    let cargo = CargoRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Cargo", id }))?;
    Ok(Json(cargo))
}

/// DELETE /cargo/{id}/
pub async fn delete(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = CargoRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Cargo", id }))
    }
}

fn check_cargo_type(errors: &mut FieldErrors, cargo_type: Option<&str>) {
    if let Some(t) = cargo_type {
        if !entities::is_valid_cargo_type(t) {
            errors.push("cargo_type", format!("\"{t}\" is not a valid cargo type."));
        } else if let Err(message) = entities::validate_dangerous_cargo(t) {
            errors.push("cargo_type", message);
        }
    }
}
