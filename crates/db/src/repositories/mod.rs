//! One repository per table: unit structs with static async methods over a
//! `PgPool`, returning `sqlx::Error` for the API layer to classify.

pub mod cargo_repo;
pub mod client_repo;
pub mod crew_repo;
pub mod port_repo;
pub mod profile_repo;
pub mod session_repo;
pub mod ship_repo;
pub mod shipment_repo;
pub mod user_repo;

pub use cargo_repo::CargoRepo;
pub use client_repo::ClientRepo;
pub use crew_repo::CrewRepo;
pub use port_repo::PortRepo;
pub use profile_repo::ProfileRepo;
pub use session_repo::SessionRepo;
pub use ship_repo::ShipRepo;
pub use shipment_repo::ShipmentRepo;
pub use user_repo::UserRepo;
