//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod appointments;
pub mod blood_types;
pub mod hospitals;
pub mod inventory;
pub mod requests;
pub mod users;

pub use appointments::{
    create_appointment, delete_appointment, get_appointment, list_appointments,
    set_appointment_status, update_appointment,
};
pub use blood_types::{
    create_blood_type, delete_blood_type, get_blood_type, list_blood_types, update_blood_type,
};
pub use hospitals::{create_hospital, delete_hospital, get_hospital, list_hospitals, update_hospital};
pub use inventory::{
    add_inventory_units, create_inventory, delete_inventory, get_inventory, list_inventories,
    remove_inventory_units, update_inventory,
};
pub use requests::{create_request, delete_request, get_request, list_requests, update_request};
pub use users::{delete_user, get_user, list_users, register, update_user};
