//! Repository for the `ships` table.

use harborline_core::entities::{DEFAULT_SHIP_STATUS, DEFAULT_SHIP_TYPE};
use harborline_core::pagination::{clamp_limit, clamp_offset, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
use harborline_core::types::DbId;
use sqlx::PgPool;

use crate::models::ship::{CreateShip, Ship, UpdateShip};

const COLUMNS: &str = "id, name, registration_number, capacity_in_tonnes, ship_type, \
                        status, is_active, created_at, updated_at";

/// Provides CRUD operations for ships.
pub struct ShipRepo;

impl ShipRepo {
    /// Insert a new ship, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateShip) -> Result<Ship, sqlx::Error> {
        let ship_type = input.ship_type.as_deref().unwrap_or(DEFAULT_SHIP_TYPE);
        let status = input.status.as_deref().unwrap_or(DEFAULT_SHIP_STATUS);
        let query = format!(
            "INSERT INTO ships (name, registration_number, capacity_in_tonnes,
                                ship_type, status, is_active)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Ship>(&query)
            .bind(&input.name)
            .bind(&input.registration_number)
            .bind(input.capacity_in_tonnes)
            .bind(ship_type)
            .bind(status)
            .bind(input.is_active.unwrap_or(true))
            .fetch_one(pool)
            .await
    }

    /// Find a ship by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Ship>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM ships WHERE id = $1");
        sqlx::query_as::<_, Ship>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List ships, newest first.
    pub async fn list(
        pool: &PgPool,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<Ship>, sqlx::Error> {
        let limit = clamp_limit(limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT);
        let offset = clamp_offset(offset);
        let query = format!(
            "SELECT {COLUMNS} FROM ships ORDER BY created_at DESC LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Ship>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Update a ship. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateShip,
    ) -> Result<Option<Ship>, sqlx::Error> {
        let query = format!(
            "UPDATE ships SET
                name = COALESCE($2, name),
                registration_number = COALESCE($3, registration_number),
                capacity_in_tonnes = COALESCE($4, capacity_in_tonnes),
                ship_type = COALESCE($5, ship_type),
                status = COALESCE($6, status),
                is_active = COALESCE($7, is_active)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Ship>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.registration_number)
            .bind(input.capacity_in_tonnes)
            .bind(&input.ship_type)
            .bind(&input.status)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Delete a ship. Returns `true` if a row was removed.
    ///
    /// Fails with a foreign-key violation while crew or shipments still
    /// reference the ship.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM ships WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Whether another ship already holds this registration number.
    pub async fn registration_exists(
        pool: &PgPool,
        registration_number: &str,
        exclude_id: Option<DbId>,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(
                SELECT 1 FROM ships
                WHERE registration_number = $1
                  AND ($2::bigint IS NULL OR id <> $2)
             )",
        )
        .bind(registration_number)
        .bind(exclude_id)
        .fetch_one(pool)
        .await
    }
}
