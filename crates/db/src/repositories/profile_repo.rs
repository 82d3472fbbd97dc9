//! Repository for the `profiles` table.

use harborline_core::types::DbId;
use sqlx::PgPool;

use crate::models::profile::Profile;

const COLUMNS: &str = "id, user_id, role, created_at, updated_at";

/// Read access to profiles. Writes happen through `UserRepo`, which keeps
/// the role in step with the account's superuser flag.
pub struct ProfileRepo;

impl ProfileRepo {
    /// Find the profile owned by a user.
    pub async fn find_by_user_id(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM profiles WHERE user_id = $1");
        sqlx::query_as::<_, Profile>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }
}
