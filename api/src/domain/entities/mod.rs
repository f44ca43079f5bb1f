//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod appointment;
pub mod blood_type;
pub mod hospital;
pub mod inventory;
pub mod request;
pub mod user;

pub use appointment::{
    Appointment, AppointmentId, AppointmentStatus, NewAppointment, UpdateAppointment,
};
pub use blood_type::{BloodType, BloodTypeId, NewBloodType};
pub use hospital::{Hospital, HospitalId, NewHospital};
pub use inventory::{BloodInventory, BloodInventoryId, NewBloodInventory};
pub use request::{NewRequest, Request, RequestId};
pub use user::{NewUser, UpdateUser, User, UserId};
