//! Enum-valued field domains for the logistics entities.
//!
//! The database enforces the same domains with CHECK constraints; these
//! tables exist so the validation layer can reject a bad value with a
//! field-level message before the write reaches the store.

/// Valid ship types.
pub const SHIP_TYPES: &[&str] = &[
    "cargo ship",
    "passenger ship",
    "military ship",
    "icebreaker",
    "fishing vessel",
    "barge ship",
];

/// Ship type applied when none is submitted.
pub const DEFAULT_SHIP_TYPE: &str = "cargo ship";

/// Valid ship operational statuses.
pub const SHIP_STATUSES: &[&str] = &["active", "under maintenance", "decommissioned"];

/// Ship status applied when none is submitted.
pub const DEFAULT_SHIP_STATUS: &str = "active";

/// Valid crew roles.
pub const CREW_ROLES: &[&str] = &[
    "Captain",
    "Chief Officer",
    "Second Officer",
    "Engineer",
    "Deckhand",
    "Cook",
];

/// The one crew role that is unique per ship.
pub const CREW_ROLE_CAPTAIN: &str = "Captain";

/// Valid cargo types.
pub const CARGO_TYPES: &[&str] = &[
    "general",
    "container",
    "bulk",
    "liquid",
    "refrigerated",
    "dangerous",
];

/// Cargo type applied when none is submitted.
pub const DEFAULT_CARGO_TYPE: &str = "general";

/// Cargo type subject to dangerous-goods rules.
pub const CARGO_TYPE_DANGEROUS: &str = "dangerous";

/// Valid shipment statuses.
pub const SHIPMENT_STATUSES: &[&str] = &["pending", "in transit", "delivered", "cancelled"];

/// Shipment status applied when none is submitted.
pub const DEFAULT_SHIPMENT_STATUS: &str = "pending";

pub fn is_valid_ship_type(value: &str) -> bool {
    SHIP_TYPES.contains(&value)
}

pub fn is_valid_ship_status(value: &str) -> bool {
    SHIP_STATUSES.contains(&value)
}

pub fn is_valid_crew_role(value: &str) -> bool {
    CREW_ROLES.contains(&value)
}

pub fn is_valid_cargo_type(value: &str) -> bool {
    CARGO_TYPES.contains(&value)
}

pub fn is_valid_shipment_status(value: &str) -> bool {
    SHIPMENT_STATUSES.contains(&value)
}

/// Extra rules for dangerous cargo.
///
/// None are enforced today; the hook exists so dangerous-goods handling
/// rules (manifests, packing certificates) land in one place when they
/// arrive.
pub fn validate_dangerous_cargo(cargo_type: &str) -> Result<(), String> {
    if cargo_type == CARGO_TYPE_DANGEROUS {
        // No additional constraints yet.
    }
    Ok(())
}
