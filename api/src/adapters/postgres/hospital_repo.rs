//! PostgreSQL adapter for HospitalRepository

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};

use crate::domain::entities::{Hospital, HospitalId, NewHospital};
use crate::domain::ports::HospitalRepository;
use crate::entity::hospitals;
use crate::error::DomainError;

/// PostgreSQL implementation of HospitalRepository
pub struct PostgresHospitalRepository {
    db: DatabaseConnection,
}

impl PostgresHospitalRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl HospitalRepository for PostgresHospitalRepository {
    async fn find_by_id(&self, id: &HospitalId) -> Result<Option<Hospital>, DomainError> {
        let result = hospitals::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_all(&self) -> Result<Vec<Hospital>, DomainError> {
        let results = hospitals::Entity::find()
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn create(&self, hospital: &NewHospital) -> Result<Hospital, DomainError> {
        let model = hospitals::ActiveModel {
            name: Set(hospital.name.clone()),
            address: Set(hospital.address.clone()),
            phone: Set(hospital.phone.clone()),
            email: Set(hospital.email.clone()),
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
        id: &HospitalId,
        hospital: &NewHospital,
    ) -> Result<Hospital, DomainError> {
        let result = hospitals::ActiveModel {
            id: Set(id.0),
            name: Set(hospital.name.clone()),
            address: Set(hospital.address.clone()),
            phone: Set(hospital.phone.clone()),
            email: Set(hospital.email.clone()),
        }
        .update(&self.db)
        .await
        .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn delete(&self, id: &HospitalId) -> Result<(), DomainError> {
        let result = hospitals::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        if result.rows_affected == 0 {
            Err(DomainError::NotFound(format!("Hospital {} not found", id)))
        } else {
            Ok(())
        }
    }
}

/// Convert SeaORM model to domain entity
impl From<hospitals::Model> for Hospital {
    fn from(model: hospitals::Model) -> Self {
        Hospital {
            id: HospitalId(model.id),
            name: model.name,
            address: model.address,
            phone: model.phone,
            email: model.email,
        }
    }
}
