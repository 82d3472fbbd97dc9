//! Cargo entity model and DTOs.

use harborline_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A cargo row from the `cargo` table.
///
/// `client_id` survives client deletion as NULL (historical retention).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Cargo {
    pub id: DbId,
    pub description: String,
    pub weight: f64,
    pub volume: f64,
    pub cargo_type: String,
    pub client_id: Option<DbId>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating cargo.
///
/// The weight rule duplicates the store-level minimum on purpose: the two
/// checks are independent and this one owns the message.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCargo {
    #[validate(length(min = 1, message = "Description must not be empty."))]
    pub description: String,
    #[validate(range(exclusive_min = 0.0, message = "Weight must be greater than 0."))]
    pub weight: f64,
    #[validate(range(exclusive_min = 0.0, message = "Volume must be greater than 0."))]
    pub volume: f64,
    pub cargo_type: Option<String>,
    pub client_id: Option<DbId>,
    pub is_active: Option<bool>,
}

/// DTO for updating cargo. Absent fields keep their stored values.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCargo {
    #[validate(length(min = 1, message = "Description must not be empty."))]
    pub description: Option<String>,
    #[validate(range(exclusive_min = 0.0, message = "Weight must be greater than 0."))]
    pub weight: Option<f64>,
    #[validate(range(exclusive_min = 0.0, message = "Volume must be greater than 0."))]
    pub volume: Option<f64>,
    pub cargo_type: Option<String>,
    pub client_id: Option<DbId>,
    pub is_active: Option<bool>,
}
