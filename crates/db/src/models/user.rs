//! User account model and DTOs.

use harborline_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full user row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses.
/// Handlers build their own response types from the fields they need.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    /// Doubles as the username.
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password_hash: String,
    pub is_superuser: bool,
    pub is_staff: bool,
    pub is_active: bool,
    pub last_login_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new account.
///
/// Registration always creates non-superuser, non-staff accounts; there is
/// deliberately no superuser field here.
#[derive(Debug, Deserialize)]
pub struct CreateUser {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password_hash: String,
}

/// A user row joined with its profile role, for the admin account listing.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserWithRole {
    pub id: DbId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub is_superuser: bool,
    pub is_active: bool,
    pub role: String,
    pub created_at: Timestamp,
}
