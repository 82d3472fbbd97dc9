//! Repository for the `crew` table.

use harborline_core::entities::CREW_ROLE_CAPTAIN;
use harborline_core::pagination::{clamp_limit, clamp_offset, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
use harborline_core::types::DbId;
use sqlx::PgPool;

use crate::models::crew::{CreateCrew, Crew, UpdateCrew};

const COLUMNS: &str = "id, first_name, last_name, role, phone_number, nationality, \
                        ship_id, is_active, created_at, updated_at";

/// Column list qualified for queries that join `ships`.
const QUALIFIED_COLUMNS: &str =
    "c.id, c.first_name, c.last_name, c.role, c.phone_number, c.nationality, \
     c.ship_id, c.is_active, c.created_at, c.updated_at";

/// Provides CRUD operations and the uniqueness probes for crew members.
pub struct CrewRepo;

impl CrewRepo {
    /// Insert a new crew member, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateCrew) -> Result<Crew, sqlx::Error> {
        let query = format!(
            "INSERT INTO crew (first_name, last_name, role, phone_number,
                               nationality, ship_id, is_active)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Crew>(&query)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.role)
            .bind(&input.phone_number)
            .bind(&input.nationality)
            .bind(input.ship_id)
            .bind(input.is_active.unwrap_or(true))
            .fetch_one(pool)
            .await
    }

    /// Find a crew member by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Crew>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM crew WHERE id = $1");
        sqlx::query_as::<_, Crew>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List crew members with optional search and ordering.
    ///
    /// `search` matches first/last name, role, and the assigned ship's name
    /// (case-insensitive substring). `ordering` accepts `last_name` and
    /// `created_at` with a `-` prefix for descending; unknown values fall
    /// back to newest-first.
    pub async fn list(
        pool: &PgPool,
        search: Option<&str>,
        ordering: Option<&str>,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<Crew>, sqlx::Error> {
        let limit = clamp_limit(limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT);
        let offset = clamp_offset(offset);
        let order = match ordering {
            Some("last_name") => "c.last_name ASC",
            Some("-last_name") => "c.last_name DESC",
            Some("created_at") => "c.created_at ASC",
            _ => "c.created_at DESC",
        };
        let query = format!(
            "SELECT {QUALIFIED_COLUMNS} FROM crew c
             LEFT JOIN ships s ON s.id = c.ship_id
             WHERE $1::text IS NULL
                OR c.first_name ILIKE '%' || $1 || '%'
                OR c.last_name ILIKE '%' || $1 || '%'
                OR c.role ILIKE '%' || $1 || '%'
                OR s.name ILIKE '%' || $1 || '%'
             ORDER BY {order}
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Crew>(&query)
            .bind(search)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Update a crew member. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCrew,
    ) -> Result<Option<Crew>, sqlx::Error> {
        let query = format!(
            "UPDATE crew SET
                first_name = COALESCE($2, first_name),
                last_name = COALESCE($3, last_name),
                role = COALESCE($4, role),
                phone_number = COALESCE($5, phone_number),
                nationality = COALESCE($6, nationality),
                ship_id = COALESCE($7, ship_id),
                is_active = COALESCE($8, is_active)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Crew>(&query)
            .bind(id)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.role)
            .bind(&input.phone_number)
            .bind(&input.nationality)
            .bind(input.ship_id)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Delete a crew member. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM crew WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Whether another crew member already uses this phone number.
    pub async fn phone_exists(
        pool: &PgPool,
        phone_number: &str,
        exclude_id: Option<DbId>,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(
                SELECT 1 FROM crew
                WHERE phone_number = $1
                  AND ($2::bigint IS NULL OR id <> $2)
             )",
        )
        .bind(phone_number)
        .bind(exclude_id)
        .fetch_one(pool)
        .await
    }

    /// Whether another crew member already holds the Captain role on this
    /// ship.
    pub async fn captain_exists_for_ship(
        pool: &PgPool,
        ship_id: DbId,
        exclude_id: Option<DbId>,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(
                SELECT 1 FROM crew
                WHERE ship_id = $1
                  AND role = $2
                  AND ($3::bigint IS NULL OR id <> $3)
             )",
        )
        .bind(ship_id)
        .bind(CREW_ROLE_CAPTAIN)
        .bind(exclude_id)
        .fetch_one(pool)
        .await
    }
}
