//! Repository for the `cargo` table.

use harborline_core::entities::DEFAULT_CARGO_TYPE;
use harborline_core::pagination::{clamp_limit, clamp_offset, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
use harborline_core::types::DbId;
use sqlx::PgPool;

use crate::models::cargo::{Cargo, CreateCargo, UpdateCargo};

const COLUMNS: &str = "id, description, weight, volume, cargo_type, client_id, \
                        is_active, created_at, updated_at";

/// Column list qualified for queries that join `clients`.
const QUALIFIED_COLUMNS: &str =
    "ca.id, ca.description, ca.weight, ca.volume, ca.cargo_type, ca.client_id, \
     ca.is_active, ca.created_at, ca.updated_at";

/// Provides CRUD operations for cargo records.
pub struct CargoRepo;

impl CargoRepo {
    /// Insert a new cargo record, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateCargo) -> Result<Cargo, sqlx::Error> {
        let cargo_type = input.cargo_type.as_deref().unwrap_or(DEFAULT_CARGO_TYPE);
        let query = format!(
            "INSERT INTO cargo (description, weight, volume, cargo_type,
                                client_id, is_active)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Cargo>(&query)
            .bind(&input.description)
            .bind(input.weight)
            .bind(input.volume)
            .bind(cargo_type)
            .bind(input.client_id)
            .bind(input.is_active.unwrap_or(true))
            .fetch_one(pool)
            .await
    }

    /// Find a cargo record by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Cargo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cargo WHERE id = $1");
        sqlx::query_as::<_, Cargo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List cargo records with optional search and ordering.
    ///
    /// `search` matches description, cargo type, and the owning client's
    /// company name (case-insensitive substring). `ordering` accepts
    /// `weight` and `created_at` with a `-` prefix for descending; unknown
    /// values fall back to newest-first.
    pub async fn list(
        pool: &PgPool,
        search: Option<&str>,
        ordering: Option<&str>,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<Cargo>, sqlx::Error> {
        let limit = clamp_limit(limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT);
        let offset = clamp_offset(offset);
        let order = match ordering {
            Some("weight") => "ca.weight ASC",
            Some("-weight") => "ca.weight DESC",
            Some("created_at") => "ca.created_at ASC",
            _ => "ca.created_at DESC",
        };
        let query = format!(
            "SELECT {QUALIFIED_COLUMNS} FROM cargo ca
             LEFT JOIN clients cl ON cl.id = ca.client_id
             WHERE $1::text IS NULL
                OR ca.description ILIKE '%' || $1 || '%'
                OR ca.cargo_type ILIKE '%' || $1 || '%'
                OR cl.company_name ILIKE '%' || $1 || '%'
             ORDER BY {order}
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Cargo>(&query)
            .bind(search)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Update a cargo record. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCargo,
    ) -> Result<Option<Cargo>, sqlx::Error> {
        let query = format!(
            "UPDATE cargo SET
                description = COALESCE($2, description),
                weight = COALESCE($3, weight),
                volume = COALESCE($4, volume),
                cargo_type = COALESCE($5, cargo_type),
                client_id = COALESCE($6, client_id),
                is_active = COALESCE($7, is_active)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Cargo>(&query)
            .bind(id)
            .bind(&input.description)
            .bind(input.weight)
            .bind(input.volume)
            .bind(&input.cargo_type)
            .bind(input.client_id)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Delete a cargo record. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cargo WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
