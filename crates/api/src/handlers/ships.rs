//! Handlers for the `/ships/` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use harborline_core::entities;
use harborline_core::error::CoreError;
use harborline_core::types::DbId;
use harborline_core::validation::FieldErrors;
use harborline_db::models::ship::{CreateShip, Ship, UpdateShip};
use harborline_db::repositories::ShipRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAuth;
use crate::query::PaginationParams;
use crate::state::AppState;

/// POST /ships/
pub async fn create(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Json(input): Json<CreateShip>,
) -> AppResult<(StatusCode, Json<Ship>)> {
    let mut errors = match input.validate() {
        Ok(()) => FieldErrors::new(),
        Err(e) => e.into(),
    };
    check_enums(&mut errors, input.ship_type.as_deref(), input.status.as_deref());
    if ShipRepo::registration_exists(&state.pool, &input.registration_number, None).await? {
        errors.push("registration_number", "Registration number must be unique.");
    }
    errors.into_result().map_err(AppError::Validation)?;

    let ship = ShipRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(ship)))
}

/// GET /ships/
pub async fn list(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Vec<Ship>>> {
    let ships = ShipRepo::list(&state.pool, params.limit, params.offset).await?;
    Ok(Json(ships))
}

/// GET /ships/{id}/
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<Json<Ship>> {
    let ship = ShipRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Ship", id }))?;
    Ok(Json(ship))
}

/// PUT|PATCH /ships/{id}/
pub async fn update(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateShip>,
) -> AppResult<Json<Ship>> {
    let mut errors = match input.validate() {
        Ok(()) => FieldErrors::new(),
        Err(e) => e.into(),
    };
    check_enums(&mut errors, input.ship_type.as_deref(), input.status.as_deref());
    if let Some(number) = input.registration_number.as_deref() {
        if ShipRepo::registration_exists(&state.pool, number, Some(id)).await? {
            errors.push("registration_number", "Registration number must be unique.");
        }
    }
    errors.into_result().map_err(AppError::Validation)?;

    let ship = ShipRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Ship", id }))?;
    Ok(Json(ship))
}

/// DELETE /ships/{id}/
///
/// Rejected with a conflict while crew or shipments still reference the
/// ship; there are no cascading deletes.
pub async fn delete(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ShipRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Ship", id }))
    }
}

fn check_enums(errors: &mut FieldErrors, ship_type: Option<&str>, status: Option<&str>) {
    if let Some(t) = ship_type {
        if !entities::is_valid_ship_type(t) {
            errors.push("ship_type", format!("\"{t}\" is not a valid ship type."));
        }
    }
    if let Some(s) = status {
        if !entities::is_valid_ship_status(s) {
            errors.push("status", format!("\"{s}\" is not a valid ship status."));
        }
    }
}
