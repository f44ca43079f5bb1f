//! PostgreSQL adapter for BloodTypeRepository

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};

use crate::domain::entities::{BloodType, BloodTypeId, NewBloodType};
use crate::domain::ports::BloodTypeRepository;
use crate::entity::blood_types;
use crate::error::DomainError;

/// PostgreSQL implementation of BloodTypeRepository
pub struct PostgresBloodTypeRepository {
    db: DatabaseConnection,
}

impl PostgresBloodTypeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BloodTypeRepository for PostgresBloodTypeRepository {
    async fn find_by_id(&self, id: &BloodTypeId) -> Result<Option<BloodType>, DomainError> {
        let result = blood_types::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_all(&self) -> Result<Vec<BloodType>, DomainError> {
        let results = blood_types::Entity::find()
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn create(&self, blood_type: &NewBloodType) -> Result<BloodType, DomainError> {
        let model = blood_types::ActiveModel {
            name: Set(blood_type.name.clone()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn update(
        &self,
        id: &BloodTypeId,
        blood_type: &NewBloodType,
    ) -> Result<BloodType, DomainError> {
        let result = blood_types::ActiveModel {
            id: Set(id.0),
            name: Set(blood_type.name.clone()),
        }
        .update(&self.db)
        .await
        .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn delete(&self, id: &BloodTypeId) -> Result<(), DomainError> {
        let result = blood_types::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        if result.rows_affected == 0 {
            Err(DomainError::NotFound(format!(
                "Blood type {} not found",
                id
            )))
        } else {
            Ok(())
        }
    }
}

/// Convert SeaORM model to domain entity
impl From<blood_types::Model> for BloodType {
    fn from(model: blood_types::Model) -> Self {
        BloodType {
            id: BloodTypeId(model.id),
            name: model.name,
        }
    }
}
