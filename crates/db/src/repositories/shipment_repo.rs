//! Repository for the `shipments` table.

use harborline_core::entities::DEFAULT_SHIPMENT_STATUS;
use harborline_core::pagination::{clamp_limit, clamp_offset, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
use harborline_core::types::DbId;
use sqlx::PgPool;

use crate::models::shipment::{CreateShipment, Shipment, UpdateShipment};

const COLUMNS: &str = "id, ship_id, cargo_id, origin_port_id, destination_port_id, \
                        departure_date, arrival_date, status, created_at, updated_at";

/// Provides CRUD operations for shipments.
pub struct ShipmentRepo;

impl ShipmentRepo {
    /// Insert a new shipment, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateShipment) -> Result<Shipment, sqlx::Error> {
        let status = input.status.as_deref().unwrap_or(DEFAULT_SHIPMENT_STATUS);
        let query = format!(
            "INSERT INTO shipments (ship_id, cargo_id, origin_port_id,
                                    destination_port_id, departure_date,
                                    arrival_date, status)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Shipment>(&query)
            .bind(input.ship_id)
            .bind(input.cargo_id)
            .bind(input.origin_port_id)
            .bind(input.destination_port_id)
            .bind(input.departure_date)
            .bind(input.arrival_date)
            .bind(status)
            .fetch_one(pool)
            .await
    }

    /// Find a shipment by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Shipment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM shipments WHERE id = $1");
        sqlx::query_as::<_, Shipment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List shipments, newest first.
    pub async fn list(
        pool: &PgPool,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<Shipment>, sqlx::Error> {
        let limit = clamp_limit(limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT);
        let offset = clamp_offset(offset);
        let query = format!(
            "SELECT {COLUMNS} FROM shipments ORDER BY created_at DESC LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Shipment>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Update a shipment. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateShipment,
    ) -> Result<Option<Shipment>, sqlx::Error> {
        let query = format!(
            "UPDATE shipments SET
                ship_id = COALESCE($2, ship_id),
                cargo_id = COALESCE($3, cargo_id),
                origin_port_id = COALESCE($4, origin_port_id),
                destination_port_id = COALESCE($5, destination_port_id),
                departure_date = COALESCE($6, departure_date),
                arrival_date = COALESCE($7, arrival_date),
                status = COALESCE($8, status)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Shipment>(&query)
            .bind(id)
            .bind(input.ship_id)
            .bind(input.cargo_id)
            .bind(input.origin_port_id)
            .bind(input.destination_port_id)
            .bind(input.departure_date)
            .bind(input.arrival_date)
            .bind(&input.status)
            .fetch_optional(pool)
            .await
    }

    /// Delete a shipment. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM shipments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
