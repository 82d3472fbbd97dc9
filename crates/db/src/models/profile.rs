//! Profile model: the per-account record holding the derived role.

use harborline_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A profile row from the `profiles` table.
///
/// Created in the same transaction as its account; an account never exists
/// without one.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Profile {
    pub id: DbId,
    pub user_id: DbId,
    /// `"admin"` or `"normal"`, derived from the account's superuser flag.
    pub role: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
