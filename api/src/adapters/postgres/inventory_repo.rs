//! PostgreSQL adapter for InventoryRepository
//!
//! Every successful mutation is persisted synchronously before the call
//! returns; there is no batching or write-behind.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};

use crate::domain::entities::{
    BloodInventory, BloodInventoryId, BloodTypeId, HospitalId, NewBloodInventory,
};
use crate::domain::ports::InventoryRepository;
use crate::entity::blood_inventories;
use crate::error::DomainError;

/// PostgreSQL implementation of InventoryRepository
pub struct PostgresInventoryRepository {
    db: DatabaseConnection,
}

impl PostgresInventoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl InventoryRepository for PostgresInventoryRepository {
    async fn find_by_id(
        &self,
        id: &BloodInventoryId,
    ) -> Result<Option<BloodInventory>, DomainError> {
        let result = blood_inventories::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_all(&self) -> Result<Vec<BloodInventory>, DomainError> {
        let results = blood_inventories::Entity::find()
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn create(&self, inventory: &NewBloodInventory) -> Result<BloodInventory, DomainError> {
        // No uniqueness check on (hospital, blood type); duplicates are allowed
        let model = blood_inventories::ActiveModel {
            hospital_id: Set(inventory.hospital_id.0),
            blood_type_id: Set(inventory.blood_type_id.0),
            available_units: Set(0),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn update_refs(
        &self,
        id: &BloodInventoryId,
        hospital_id: &HospitalId,
        blood_type_id: &BloodTypeId,
    ) -> Result<(), DomainError> {
        blood_inventories::ActiveModel {
            id: Set(id.0),
            hospital_id: Set(hospital_id.0),
            blood_type_id: Set(blood_type_id.0),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(())
    }

    async fn update_units(&self, id: &BloodInventoryId, units: i32) -> Result<(), DomainError> {
        blood_inventories::ActiveModel {
            id: Set(id.0),
            available_units: Set(units),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(())
    }

    async fn delete(&self, id: &BloodInventoryId) -> Result<(), DomainError> {
        let result = blood_inventories::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        if result.rows_affected == 0 {
            Err(DomainError::NotFound(format!("Inventory {} not found", id)))
        } else {
            Ok(())
        }
    }
}

/// Convert SeaORM model to domain entity
impl From<blood_inventories::Model> for BloodInventory {
    fn from(model: blood_inventories::Model) -> Self {
        BloodInventory {
            id: BloodInventoryId(model.id),
            hospital_id: HospitalId(model.hospital_id),
            blood_type_id: BloodTypeId(model.blood_type_id),
            available_units: model.available_units,
        }
    }
}
