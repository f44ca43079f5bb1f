//! Blood type reference data

use serde::{Deserialize, Serialize};

/// Unique identifier for a blood type, assigned by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BloodTypeId(pub i32);

impl From<i32> for BloodTypeId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for BloodTypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A blood type such as "A+" or "O-"
///
/// Names are not required to be unique; the store is permissive here.
#[derive(Debug, Clone, Serialize)]
pub struct BloodType {
    pub id: BloodTypeId,
    pub name: String,
}

/// Data needed to create a new blood type
#[derive(Debug, Clone)]
pub struct NewBloodType {
    pub name: String,
}
