//! Request handlers, one module per resource.

pub mod accounts;
pub mod admin;
pub mod cargo;
pub mod clients;
pub mod crew;
pub mod ports;
pub mod shipments;
pub mod ships;
