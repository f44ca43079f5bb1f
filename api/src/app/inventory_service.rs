//! Inventory ledger service
//!
//! Tracks available blood units per (hospital, blood type) pair and gates
//! mutations behind the non-negative-balance invariant. Read operations
//! return a denormalized view that joins the hospital and blood-type names;
//! a missing reference yields a null name rather than a failure.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;

use crate::domain::entities::{
    BloodInventory, BloodInventoryId, BloodTypeId, HospitalId, NewBloodInventory,
};
use crate::domain::ports::{BloodTypeRepository, HospitalRepository, InventoryRepository};
use crate::error::{AppError, DomainError};

/// Inventory row joined with its hospital and blood-type names
#[derive(Debug, Clone, Serialize)]
pub struct InventoryView {
    pub id: BloodInventoryId,
    pub hospital_id: HospitalId,
    pub hospital_name: Option<String>,
    pub blood_type_id: BloodTypeId,
    pub blood_type_name: Option<String>,
    pub available_units: i32,
}

/// Service for the blood inventory ledger
pub struct InventoryService<IR, HR, BR>
where
    IR: InventoryRepository,
    HR: HospitalRepository,
    BR: BloodTypeRepository,
{
    inventories: Arc<IR>,
    hospitals: Arc<HR>,
    blood_types: Arc<BR>,
}

impl<IR, HR, BR> InventoryService<IR, HR, BR>
where
    IR: InventoryRepository,
    HR: HospitalRepository,
    BR: BloodTypeRepository,
{
    pub fn new(inventories: Arc<IR>, hospitals: Arc<HR>, blood_types: Arc<BR>) -> Self {
        Self {
            inventories,
            hospitals,
            blood_types,
        }
    }

    /// List all inventory rows, joined, in store-native order
    pub async fn list(&self) -> Result<Vec<InventoryView>, AppError> {
        let rows = self.inventories.find_all().await?;

        // One pass over the reference tables instead of a lookup per row
        let hospital_names: HashMap<HospitalId, String> = self
            .hospitals
            .find_all()
            .await?
            .into_iter()
            .map(|h| (h.id, h.name))
            .collect();
        let blood_type_names: HashMap<BloodTypeId, String> = self
            .blood_types
            .find_all()
            .await?
            .into_iter()
            .map(|b| (b.id, b.name))
            .collect();

        Ok(rows
            .into_iter()
            .map(|inv| InventoryView {
                id: inv.id,
                hospital_id: inv.hospital_id,
                hospital_name: hospital_names.get(&inv.hospital_id).cloned(),
                blood_type_id: inv.blood_type_id,
                blood_type_name: blood_type_names.get(&inv.blood_type_id).cloned(),
                available_units: inv.available_units,
            })
            .collect())
    }

    /// Get one inventory row, joined; None if absent
    pub async fn get(&self, id: &BloodInventoryId) -> Result<Option<InventoryView>, AppError> {
        match self.inventories.find_by_id(id).await? {
            Some(inv) => Ok(Some(self.project(inv).await?)),
            None => Ok(None),
        }
    }

    /// Create a new inventory row with a zero balance
    ///
    /// Duplicate (hospital, blood type) pairs are permitted; each row is an
    /// independent counter.
    pub async fn create(&self, new: &NewBloodInventory) -> Result<InventoryView, AppError> {
        let created = self.inventories.create(new).await?;
        self.project(created).await
    }

    /// Overwrite the foreign keys of an existing row; the balance is untouched
    pub async fn update(
        &self,
        id: &BloodInventoryId,
        hospital_id: HospitalId,
        blood_type_id: BloodTypeId,
    ) -> Result<InventoryView, AppError> {
        let mut inv = self
            .inventories
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::Domain(not_found(id)))?;

        self.inventories
            .update_refs(id, &hospital_id, &blood_type_id)
            .await?;

        inv.hospital_id = hospital_id;
        inv.blood_type_id = blood_type_id;
        self.project(inv).await
    }

    /// Add units to the balance and persist the new total
    pub async fn add_units(
        &self,
        id: &BloodInventoryId,
        units: i32,
    ) -> Result<InventoryView, AppError> {
        let mut inv = self
            .inventories
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::Domain(not_found(id)))?;

        inv.add_units(units)?;
        self.inventories.update_units(id, inv.available_units).await?;

        self.project(inv).await
    }

    /// Remove units from the balance and persist the new total
    ///
    /// The stored balance is untouched when the removal is rejected.
    pub async fn remove_units(
        &self,
        id: &BloodInventoryId,
        units: i32,
    ) -> Result<InventoryView, AppError> {
        let mut inv = self
            .inventories
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::Domain(not_found(id)))?;

        inv.remove_units(units)?;
        self.inventories.update_units(id, inv.available_units).await?;

        self.project(inv).await
    }

    /// Delete an inventory row
    pub async fn delete(&self, id: &BloodInventoryId) -> Result<(), AppError> {
        Ok(self.inventories.delete(id).await?)
    }

    /// Join one row with its hospital and blood-type names (outer lookup)
    async fn project(&self, inv: BloodInventory) -> Result<InventoryView, AppError> {
        let hospital_name = self
            .hospitals
            .find_by_id(&inv.hospital_id)
            .await?
            .map(|h| h.name);
        let blood_type_name = self
            .blood_types
            .find_by_id(&inv.blood_type_id)
            .await?
            .map(|b| b.name);

        Ok(InventoryView {
            id: inv.id,
            hospital_id: inv.hospital_id,
            hospital_name,
            blood_type_id: inv.blood_type_id,
            blood_type_name,
            available_units: inv.available_units,
        })
    }
}

fn not_found(id: &BloodInventoryId) -> DomainError {
    DomainError::NotFound(format!("Inventory {} not found", id))
}
