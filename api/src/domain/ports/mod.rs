//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod repositories;
pub mod user_directory;

pub use repositories::{
    AppointmentRepository, BloodTypeRepository, HospitalRepository, InventoryRepository,
    RequestRepository,
};
pub use user_directory::UserDirectory;
