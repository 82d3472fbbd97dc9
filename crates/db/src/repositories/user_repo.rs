//! Repository for the `users` table and its paired `profiles` rows.

use harborline_core::roles;
use harborline_core::types::DbId;
use sqlx::PgPool;

use crate::models::profile::Profile;
use crate::models::user::{CreateUser, User, UserWithRole};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, email, first_name, last_name, password_hash, is_superuser, \
                        is_staff, is_active, last_login_at, created_at, updated_at";

const PROFILE_COLUMNS: &str = "id, user_id, role, created_at, updated_at";

/// Provides account operations. Writes that touch the role go through the
/// derivation rules in `harborline_core::roles` inside one transaction, so
/// an account is never persisted without a profile.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new account and its profile atomically.
    ///
    /// The profile role is always `normal` at creation time.
    pub async fn create_with_profile(
        pool: &PgPool,
        input: &CreateUser,
    ) -> Result<(User, Profile), sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO users (email, first_name, last_name, password_hash)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let user = sqlx::query_as::<_, User>(&query)
            .bind(&input.email)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.password_hash)
            .fetch_one(&mut *tx)
            .await?;

        let query = format!(
            "INSERT INTO profiles (user_id, role)
             VALUES ($1, $2)
             RETURNING {PROFILE_COLUMNS}"
        );
        let profile = sqlx::query_as::<_, Profile>(&query)
            .bind(user.id)
            .bind(roles::role_for_new_account())
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok((user, profile))
    }

    /// Find a user by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by email (the login identifier).
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE email = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// List all accounts with their profile roles, newest first.
    pub async fn list_with_roles(pool: &PgPool) -> Result<Vec<UserWithRole>, sqlx::Error> {
        sqlx::query_as::<_, UserWithRole>(
            "SELECT u.id, u.email, u.first_name, u.last_name, u.is_superuser,
                    u.is_active, p.role, u.created_at
             FROM users u
             JOIN profiles p ON p.user_id = u.id
             ORDER BY u.created_at DESC",
        )
        .fetch_all(pool)
        .await
    }

    /// Set the superuser flag and re-derive the profile role in the same
    /// transaction.
    ///
    /// Returns `None` if no account with the given `id` exists. A missing
    /// profile is recreated rather than left absent.
    pub async fn set_superuser(
        pool: &PgPool,
        id: DbId,
        is_superuser: bool,
    ) -> Result<Option<(User, Profile)>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE users SET is_superuser = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        let Some(user) = sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(is_superuser)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        let query = format!(
            "SELECT {PROFILE_COLUMNS} FROM profiles WHERE user_id = $1 FOR UPDATE"
        );
        let existing = sqlx::query_as::<_, Profile>(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

        let profile = match existing {
            Some(profile) => {
                let role = roles::role_after_account_update(user.is_superuser, &profile.role);
                if role != profile.role {
                    let query = format!(
                        "UPDATE profiles SET role = $2 WHERE id = $1 RETURNING {PROFILE_COLUMNS}"
                    );
                    sqlx::query_as::<_, Profile>(&query)
                        .bind(profile.id)
                        .bind(role)
                        .fetch_one(&mut *tx)
                        .await?
                } else {
                    profile
                }
            }
            None => {
                let role = roles::role_after_account_update(user.is_superuser, "");
                let query = format!(
                    "INSERT INTO profiles (user_id, role)
                     VALUES ($1, $2)
                     RETURNING {PROFILE_COLUMNS}"
                );
                sqlx::query_as::<_, Profile>(&query)
                    .bind(id)
                    .bind(role)
                    .fetch_one(&mut *tx)
                    .await?
            }
        };

        tx.commit().await?;
        Ok(Some((user, profile)))
    }

    /// Stamp a successful login.
    pub async fn record_successful_login(pool: &PgPool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE users SET last_login_at = NOW() WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }
}
