//! Port entity model and DTOs.

use harborline_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A port row from the `ports` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Port {
    pub id: DbId,
    pub name: String,
    pub location: String,
    pub capacity: i32,
    pub contact_email: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a port.
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePort {
    #[validate(length(min = 1, message = "Name must not be empty."))]
    pub name: String,
    #[validate(length(min = 1, message = "Location must not be empty."))]
    pub location: String,
    #[validate(range(min = 0, message = "Capacity must not be negative."))]
    pub capacity: i32,
    #[validate(email(message = "Enter a valid email address."))]
    pub contact_email: String,
}

/// DTO for updating a port. Absent fields keep their stored values.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePort {
    #[validate(length(min = 1, message = "Name must not be empty."))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "Location must not be empty."))]
    pub location: Option<String>,
    #[validate(range(min = 0, message = "Capacity must not be negative."))]
    pub capacity: Option<i32>,
    #[validate(email(message = "Enter a valid email address."))]
    pub contact_email: Option<String>,
}
