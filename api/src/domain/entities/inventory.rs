//! Blood inventory ledger entity
//!
//! Tracks available blood units per (hospital, blood type) pair. Mutations go
//! through `add_units`/`remove_units`, which enforce the non-negative-balance
//! invariant before anything is persisted.

use serde::{Deserialize, Serialize};

use super::{BloodTypeId, HospitalId};
use crate::error::DomainError;

/// Unique identifier for an inventory row, assigned by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BloodInventoryId(pub i32);

impl From<i32> for BloodInventoryId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for BloodInventoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Available-unit counter for one (hospital, blood type) pair
///
/// Multiple rows for the same pair are permitted; each is an independent
/// counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BloodInventory {
    pub id: BloodInventoryId,
    pub hospital_id: HospitalId,
    pub blood_type_id: BloodTypeId,
    pub available_units: i32,
}

impl BloodInventory {
    /// Add units to the balance
    ///
    /// Fails if `units` is not positive or the balance would overflow.
    pub fn add_units(&mut self, units: i32) -> Result<(), DomainError> {
        if units <= 0 {
            return Err(DomainError::validation(
                "units",
                "Units must be greater than 0",
            ));
        }

        self.available_units = self
            .available_units
            .checked_add(units)
            .ok_or_else(|| DomainError::validation("units", "Unit count out of range"))?;

        Ok(())
    }

    /// Remove units from the balance
    ///
    /// Fails if `units` is not positive or exceeds the available balance.
    /// The balance is untouched on failure.
    pub fn remove_units(&mut self, units: i32) -> Result<(), DomainError> {
        if units <= 0 {
            return Err(DomainError::validation(
                "units",
                "Units must be greater than 0",
            ));
        }

        if self.available_units < units {
            return Err(DomainError::InsufficientStock(
                "Not enough units available".to_string(),
            ));
        }

        self.available_units -= units;
        Ok(())
    }
}

/// Data needed to create a new inventory row; the balance starts at zero
#[derive(Debug, Clone)]
pub struct NewBloodInventory {
    pub hospital_id: HospitalId,
    pub blood_type_id: BloodTypeId,
}
