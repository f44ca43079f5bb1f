//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and external systems.

pub mod appointment_service;
pub mod inventory_service;
pub mod request_service;
pub mod user_service;

pub use appointment_service::{AppointmentService, AppointmentView};
pub use inventory_service::{InventoryService, InventoryView};
pub use request_service::{RequestService, RequestView};
pub use user_service::{generate_session_token, hash_session_token, RegisterUser, UserService};
