//! Client (shipping customer) entity model and DTOs.

use chrono::NaiveDate;
use harborline_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A client row from the `clients` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Client {
    pub id: DbId,
    pub company_name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub registration_date: NaiveDate,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a client. Registration date defaults to today.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateClient {
    #[validate(length(min = 1, message = "Company name must not be empty."))]
    pub company_name: String,
    #[validate(length(min = 1, message = "Contact person must not be empty."))]
    pub contact_person: String,
    #[validate(email(message = "Enter a valid email address."))]
    pub email: String,
    #[validate(length(min = 1, message = "Phone must not be empty."))]
    pub phone: String,
    pub address: String,
    pub registration_date: Option<NaiveDate>,
}

/// DTO for updating a client. Absent fields keep their stored values.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateClient {
    #[validate(length(min = 1, message = "Company name must not be empty."))]
    pub company_name: Option<String>,
    #[validate(length(min = 1, message = "Contact person must not be empty."))]
    pub contact_person: Option<String>,
    #[validate(email(message = "Enter a valid email address."))]
    pub email: Option<String>,
    #[validate(length(min = 1, message = "Phone must not be empty."))]
    pub phone: Option<String>,
    pub address: Option<String>,
    pub registration_date: Option<NaiveDate>,
}
