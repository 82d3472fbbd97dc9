//! Repository for the `ports` table.

use harborline_core::pagination::{clamp_limit, clamp_offset, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
use harborline_core::types::DbId;
use sqlx::PgPool;

use crate::models::port::{CreatePort, Port, UpdatePort};

const COLUMNS: &str = "id, name, location, capacity, contact_email, created_at, updated_at";

/// Provides CRUD operations for ports.
pub struct PortRepo;

impl PortRepo {
    /// Insert a new port, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreatePort) -> Result<Port, sqlx::Error> {
        let query = format!(
            "INSERT INTO ports (name, location, capacity, contact_email)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Port>(&query)
            .bind(&input.name)
            .bind(&input.location)
            .bind(input.capacity)
            .bind(&input.contact_email)
            .fetch_one(pool)
            .await
    }

    /// Find a port by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Port>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM ports WHERE id = $1");
        sqlx::query_as::<_, Port>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List ports, newest first.
    pub async fn list(
        pool: &PgPool,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<Port>, sqlx::Error> {
        let limit = clamp_limit(limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT);
        let offset = clamp_offset(offset);
        let query = format!(
            "SELECT {COLUMNS} FROM ports ORDER BY created_at DESC LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Port>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Update a port. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePort,
    ) -> Result<Option<Port>, sqlx::Error> {
        let query = format!(
            "UPDATE ports SET
                name = COALESCE($2, name),
                location = COALESCE($3, location),
                capacity = COALESCE($4, capacity),
                contact_email = COALESCE($5, contact_email)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Port>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.location)
            .bind(input.capacity)
            .bind(&input.contact_email)
            .fetch_optional(pool)
            .await
    }

    /// Delete a port. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM ports WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
