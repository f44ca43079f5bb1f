//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod appointment_repo;
pub mod blood_type_repo;
pub mod hospital_repo;
pub mod inventory_repo;
pub mod request_repo;
pub mod user_directory;

#[cfg(test)]
mod integration_tests;

pub use appointment_repo::PostgresAppointmentRepository;
pub use blood_type_repo::PostgresBloodTypeRepository;
pub use hospital_repo::PostgresHospitalRepository;
pub use inventory_repo::PostgresInventoryRepository;
pub use request_repo::PostgresRequestRepository;
pub use user_directory::PostgresUserDirectory;
