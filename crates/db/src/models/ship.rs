//! Ship entity model and DTOs.

use harborline_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A ship row from the `ships` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Ship {
    pub id: DbId,
    pub name: String,
    pub registration_number: String,
    pub capacity_in_tonnes: f64,
    pub ship_type: String,
    pub status: String,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a ship. Type and status default when omitted.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateShip {
    #[validate(length(min = 1, message = "Name must not be empty."))]
    pub name: String,
    #[validate(length(min = 1, message = "Registration number must not be empty."))]
    pub registration_number: String,
    #[validate(range(exclusive_min = 0.0, message = "Capacity must be greater than 0."))]
    pub capacity_in_tonnes: f64,
    pub ship_type: Option<String>,
    pub status: Option<String>,
    pub is_active: Option<bool>,
}

/// DTO for updating a ship. Absent fields keep their stored values.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateShip {
    #[validate(length(min = 1, message = "Name must not be empty."))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "Registration number must not be empty."))]
    pub registration_number: Option<String>,
    #[validate(range(exclusive_min = 0.0, message = "Capacity must be greater than 0."))]
    pub capacity_in_tonnes: Option<f64>,
    pub ship_type: Option<String>,
    pub status: Option<String>,
    pub is_active: Option<bool>,
}
