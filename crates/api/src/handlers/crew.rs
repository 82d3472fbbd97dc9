//! Handlers for the `/crew/` resource.
//!
//! Carries the two cross-record rules: phone numbers are unique across the
//! store, and a ship has at most one Captain. Both are checked here for the
//! controlled message and enforced again by database constraints, so
//! concurrent writers cannot race past the check.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use harborline_core::entities::{self, CREW_ROLE_CAPTAIN};
use harborline_core::error::CoreError;
use harborline_core::types::DbId;
use harborline_core::validation::FieldErrors;
use harborline_db::models::crew::{CreateCrew, Crew, UpdateCrew};
use harborline_db::repositories::CrewRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAuth;
use crate::query::ListParams;
use crate::state::AppState;

/// POST /crew/
pub async fn create(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Json(input): Json<CreateCrew>,
) -> AppResult<(StatusCode, Json<Crew>)> {
    let mut errors = match input.validate() {
        Ok(()) => FieldErrors::new(),
        Err(e) => e.into(),
    };
    if !entities::is_valid_crew_role(&input.role) {
        errors.push("role", format!("\"{}\" is not a valid crew role.", input.role));
    }
    if CrewRepo::phone_exists(&state.pool, &input.phone_number, None).await? {
        errors.push("phone_number", "Phone number must be unique.");
    }
    if input.role == CREW_ROLE_CAPTAIN {
        if let Some(ship_id) = input.ship_id {
            if CrewRepo::captain_exists_for_ship(&state.pool, ship_id, None).await? {
                errors.push("role", "This ship already has a Captain assigned.");
            }
        }
    }
    errors.into_result().map_err(AppError::Validation)?;

    let crew = CrewRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(crew)))
}

/// GET /crew/
///
/// Supports `?search=` over first/last name, role, and ship name, and
/// `?ordering=` by `last_name` or `created_at` (`-` prefix descends).
pub async fn list(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<Crew>>> {
    let crew = CrewRepo::list(
        &state.pool,
        params.search.as_deref(),
        params.ordering.as_deref(),
        params.limit,
        params.offset,
    )
    .await?;
    Ok(Json(crew))
}

/// GET /crew/{id}/
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<Json<Crew>> {
    let crew = CrewRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Crew", id }))?;
    Ok(Json(crew))
}

/// PUT|PATCH /crew/{id}/
///
/// The Captain rule is re-evaluated on every update against the effective
/// role and ship: submitted values where present, stored values otherwise.
pub async fn update(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCrew>,
) -> AppResult<Json<Crew>> {
    let existing = CrewRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Crew", id }))?;

    let mut errors = match input.validate() {
        Ok(()) => FieldErrors::new(),
        Err(e) => e.into(),
    };
    if let Some(role) = input.role.as_deref() {
        if !entities::is_valid_crew_role(role) {
            errors.push("role", format!("\"{role}\" is not a valid crew role."));
        }
    }
    if let Some(phone) = input.phone_number.as_deref() {
        if CrewRepo::phone_exists(&state.pool, phone, Some(id)).await? {
            errors.push("phone_number", "Phone number must be unique.");
        }
    }

    let effective_role = input.role.as_deref().unwrap_or(&existing.role);
    let effective_ship = input.ship_id.or(existing.ship_id);
    if effective_role == CREW_ROLE_CAPTAIN {
        if let Some(ship_id) = effective_ship {
            if CrewRepo::captain_exists_for_ship(&state.pool, ship_id, Some(id)).await? {
                errors.push("role", "This ship already has a Captain assigned.");
            }
        }
    }
    errors.into_result().map_err(AppError::Validation)?;

    let crew = CrewRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Crew", id }))?;
    Ok(Json(crew))
}

/// DELETE /crew/{id}/
pub async fn delete(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = CrewRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Crew", id }))
    }
}
