//! Blood request service
//!
//! CRUD over blood requests. Requests reference their blood type and target
//! hospital by id; both references are checked on create and update. Read
//! operations denormalize the two names with outer lookups.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::{BloodTypeId, HospitalId, NewRequest, Request, RequestId};
use crate::domain::ports::{BloodTypeRepository, HospitalRepository, RequestRepository};
use crate::error::{AppError, DomainError};

/// Request joined with its blood-type and hospital names
#[derive(Debug, Clone, Serialize)]
pub struct RequestView {
    pub id: RequestId,
    pub requester_name: String,
    pub blood_type_id: BloodTypeId,
    pub blood_type_name: Option<String>,
    pub quantity: i32,
    pub hospital_id: HospitalId,
    pub hospital_name: Option<String>,
    pub request_date: DateTime<Utc>,
}

/// Service for blood requests
pub struct RequestService<RR, HR, BR>
where
    RR: RequestRepository,
    HR: HospitalRepository,
    BR: BloodTypeRepository,
{
    requests: Arc<RR>,
    hospitals: Arc<HR>,
    blood_types: Arc<BR>,
}

impl<RR, HR, BR> RequestService<RR, HR, BR>
where
    RR: RequestRepository,
    HR: HospitalRepository,
    BR: BloodTypeRepository,
{
    pub fn new(requests: Arc<RR>, hospitals: Arc<HR>, blood_types: Arc<BR>) -> Self {
        Self {
            requests,
            hospitals,
            blood_types,
        }
    }

    /// List all requests, joined, in store-native order
    pub async fn list(&self) -> Result<Vec<RequestView>, AppError> {
        let rows = self.requests.find_all().await?;

        let mut views = Vec::with_capacity(rows.len());
        for request in rows {
            views.push(self.project(request).await?);
        }
        Ok(views)
    }

    /// Get one request, joined; None if absent
    pub async fn get(&self, id: &RequestId) -> Result<Option<RequestView>, AppError> {
        match self.requests.find_by_id(id).await? {
            Some(request) => Ok(Some(self.project(request).await?)),
            None => Ok(None),
        }
    }

    /// Create a request after checking both references
    pub async fn create(&self, new: NewRequest) -> Result<RequestView, AppError> {
        self.check_references(&new).await?;
        let created = self.requests.create(&new).await?;
        self.project(created).await
    }

    /// Overwrite all fields of an existing request
    pub async fn update(&self, id: &RequestId, update: NewRequest) -> Result<RequestView, AppError> {
        self.requests
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::Domain(not_found(id)))?;

        self.check_references(&update).await?;
        let updated = self.requests.update(id, &update).await?;
        self.project(updated).await
    }

    /// Delete a request
    pub async fn delete(&self, id: &RequestId) -> Result<(), AppError> {
        Ok(self.requests.delete(id).await?)
    }

    async fn check_references(&self, request: &NewRequest) -> Result<(), AppError> {
        if self
            .blood_types
            .find_by_id(&request.blood_type_id)
            .await?
            .is_none()
        {
            return Err(AppError::Domain(DomainError::validation(
                "blood_type_id",
                format!("Blood type {} does not exist", request.blood_type_id),
            )));
        }

        if self
            .hospitals
            .find_by_id(&request.hospital_id)
            .await?
            .is_none()
        {
            return Err(AppError::Domain(DomainError::validation(
                "hospital_id",
                format!("Hospital {} does not exist", request.hospital_id),
            )));
        }

        Ok(())
    }

    /// Join one request with its names (outer lookup)
    async fn project(&self, request: Request) -> Result<RequestView, AppError> {
        let blood_type_name = self
            .blood_types
            .find_by_id(&request.blood_type_id)
            .await?
            .map(|b| b.name);
        let hospital_name = self
            .hospitals
            .find_by_id(&request.hospital_id)
            .await?
            .map(|h| h.name);

        Ok(RequestView {
            id: request.id,
            requester_name: request.requester_name,
            blood_type_id: request.blood_type_id,
            blood_type_name,
            quantity: request.quantity,
            hospital_id: request.hospital_id,
            hospital_name,
            request_date: request.request_date,
        })
    }
}

fn not_found(id: &RequestId) -> DomainError {
    DomainError::NotFound(format!("Request {} not found", id))
}
