//! SeaORM table models
//!
//! Storage-shaped models, kept separate from the domain entities in
//! `domain::entities`. Conversions live in the postgres adapters.

pub mod appointments;
pub mod blood_inventories;
pub mod blood_types;
pub mod hospitals;
pub mod requests;
pub mod roles;
pub mod user_roles;
pub mod users;
