//! PostgreSQL adapter for RequestRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};

use crate::domain::entities::{BloodTypeId, HospitalId, NewRequest, Request, RequestId};
use crate::domain::ports::RequestRepository;
use crate::entity::requests;
use crate::error::DomainError;

/// PostgreSQL implementation of RequestRepository
pub struct PostgresRequestRepository {
    db: DatabaseConnection,
}

impl PostgresRequestRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RequestRepository for PostgresRequestRepository {
    async fn find_by_id(&self, id: &RequestId) -> Result<Option<Request>, DomainError> {
        let result = requests::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_all(&self) -> Result<Vec<Request>, DomainError> {
        let results = requests::Entity::find()
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn create(&self, request: &NewRequest) -> Result<Request, DomainError> {
        let model = requests::ActiveModel {
            requester_name: Set(request.requester_name.clone()),
            blood_type_id: Set(request.blood_type_id.0),
            quantity: Set(request.quantity),
            hospital_id: Set(request.hospital_id.0),
            request_date: Set(request.request_date.fixed_offset()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn update(&self, id: &RequestId, request: &NewRequest) -> Result<Request, DomainError> {
        let result = requests::ActiveModel {
            id: Set(id.0),
            requester_name: Set(request.requester_name.clone()),
            blood_type_id: Set(request.blood_type_id.0),
            quantity: Set(request.quantity),
            hospital_id: Set(request.hospital_id.0),
            request_date: Set(request.request_date.fixed_offset()),
        }
        .update(&self.db)
        .await
        .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn delete(&self, id: &RequestId) -> Result<(), DomainError> {
        let result = requests::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        if result.rows_affected == 0 {
            Err(DomainError::NotFound(format!("Request {} not found", id)))
        } else {
            Ok(())
        }
    }
}

/// Convert SeaORM model to domain entity
impl From<requests::Model> for Request {
    fn from(model: requests::Model) -> Self {
        Request {
            id: RequestId(model.id),
            requester_name: model.requester_name,
            blood_type_id: BloodTypeId(model.blood_type_id),
            quantity: model.quantity,
            hospital_id: HospitalId(model.hospital_id),
            request_date: model.request_date.with_timezone(&Utc),
        }
    }
}
