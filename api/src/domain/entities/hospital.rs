//! Hospital domain entity

use serde::{Deserialize, Serialize};

/// Unique identifier for a hospital, assigned by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HospitalId(pub i32);

impl From<i32> for HospitalId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for HospitalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A hospital holding blood inventory and hosting appointments
#[derive(Debug, Clone, Serialize)]
pub struct Hospital {
    pub id: HospitalId,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
}

/// Data needed to create a new hospital
#[derive(Debug, Clone)]
pub struct NewHospital {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
}
