//! Crew member entity model and DTOs.

use harborline_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A crew member row from the `crew` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Crew {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub phone_number: String,
    pub nationality: String,
    pub ship_id: Option<DbId>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a crew member.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCrew {
    #[validate(length(min = 1, message = "First name must not be empty."))]
    pub first_name: String,
    #[validate(length(min = 1, message = "Last name must not be empty."))]
    pub last_name: String,
    pub role: String,
    #[validate(length(min = 1, message = "Phone number must not be empty."))]
    pub phone_number: String,
    #[validate(length(min = 1, message = "Nationality must not be empty."))]
    pub nationality: String,
    pub ship_id: Option<DbId>,
    pub is_active: Option<bool>,
}

/// DTO for updating a crew member. Absent fields keep their stored values.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCrew {
    #[validate(length(min = 1, message = "First name must not be empty."))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, message = "Last name must not be empty."))]
    pub last_name: Option<String>,
    pub role: Option<String>,
    #[validate(length(min = 1, message = "Phone number must not be empty."))]
    pub phone_number: Option<String>,
    #[validate(length(min = 1, message = "Nationality must not be empty."))]
    pub nationality: Option<String>,
    pub ship_id: Option<DbId>,
    pub is_active: Option<bool>,
}
