//! Shipment entity model and DTOs.

use chrono::NaiveDate;
use harborline_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A shipment row from the `shipments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Shipment {
    pub id: DbId,
    pub ship_id: DbId,
    pub cargo_id: DbId,
    pub origin_port_id: DbId,
    pub destination_port_id: DbId,
    pub departure_date: NaiveDate,
    pub arrival_date: Option<NaiveDate>,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a shipment. Status defaults to pending.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateShipment {
    pub ship_id: DbId,
    pub cargo_id: DbId,
    pub origin_port_id: DbId,
    pub destination_port_id: DbId,
    pub departure_date: NaiveDate,
    pub arrival_date: Option<NaiveDate>,
    pub status: Option<String>,
}

/// DTO for updating a shipment. Absent fields keep their stored values.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateShipment {
    pub ship_id: Option<DbId>,
    pub cargo_id: Option<DbId>,
    pub origin_port_id: Option<DbId>,
    pub destination_port_id: Option<DbId>,
    pub departure_date: Option<NaiveDate>,
    pub arrival_date: Option<NaiveDate>,
    pub status: Option<String>,
}
