//! Handlers for the `/shipments/` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use harborline_core::entities;
use harborline_core::error::CoreError;
use harborline_core::types::DbId;
use harborline_core::validation::FieldErrors;
use harborline_db::models::shipment::{CreateShipment, Shipment, UpdateShipment};
use harborline_db::repositories::ShipmentRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAuth;
use crate::query::PaginationParams;
use crate::state::AppState;

/// POST /shipments/
pub async fn create(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Json(input): Json<CreateShipment>,
) -> AppResult<(StatusCode, Json<Shipment>)> {
    let mut errors = match input.validate() {
        Ok(()) => FieldErrors::new(),
        Err(e) => e.into(),
    };
    check_status(&mut errors, input.status.as_deref());
    errors.into_result().map_err(AppError::Validation)?;

    let shipment = ShipmentRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(shipment)))
}

/// GET /shipments/
pub async fn list(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Vec<Shipment>>> {
    let shipments = ShipmentRepo::list(&state.pool, params.limit, params.offset).await?;
    Ok(Json(shipments))
}

/// GET /shipments/{id}/
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<Json<Shipment>> {
    let shipment = ShipmentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Shipment", id }))?;
    Ok(Json(shipment))
}

/// PUT|PATCH /shipments/{id}/
pub async fn update(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateShipment>,
) -> AppResult<Json<Shipment>> {
    let mut errors = match input.validate() {
        Ok(()) => FieldErrors::new(),
        Err(e) => e.into(),
    };
    check_status(&mut errors, input.status.as_deref());
    errors.into_result().map_err(AppError::Validation)?;

    let shipment = ShipmentRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Shipment", id }))?;
    Ok(Json(shipment))
}

/// DELETE /shipments/{id}/
pub async fn delete(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ShipmentRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Shipment", id }))
    }
}

fn check_status(errors: &mut FieldErrors, status: Option<&str>) {
    if let Some(s) = status {
        if !entities::is_valid_shipment_status(s) {
            errors.push("status", format!("\"{s}\" is not a valid shipment status."));
        }
    }
}
