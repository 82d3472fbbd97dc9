//! Row structs (`FromRow`) and request DTOs for every table.
//!
//! Create/Update DTOs carry their declarative field rules as `validator`
//! derives; enum-domain and cross-record rules are checked by the API layer
//! before persistence.

pub mod cargo;
pub mod client;
pub mod crew;
pub mod port;
pub mod profile;
pub mod session;
pub mod ship;
pub mod shipment;
pub mod user;
