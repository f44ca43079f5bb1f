//! Hospital handlers
//!
//! Endpoints for hospital reference data.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::domain::entities::{Hospital, HospitalId, NewHospital};
use crate::domain::ports::HospitalRepository;
use crate::error::{AppError, DomainError};
use crate::response::ApiResponse;
use crate::AppState;

/// Request body for creating or overwriting a hospital
#[derive(Debug, Deserialize)]
pub struct HospitalRequest {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
}

impl HospitalRequest {
    fn into_new(self) -> NewHospital {
        NewHospital {
            name: self.name,
            address: self.address,
            phone: self.phone,
            email: self.email,
        }
    }
}

/// GET /api/hospitals
pub async fn list_hospitals(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Hospital>>>, AppError> {
    let hospitals = state.hospital_repo.find_all().await?;
    Ok(Json(ApiResponse::new(hospitals)))
}

/// GET /api/hospitals/:id
///
/// An absent id answers 200 with a null payload.
pub async fn get_hospital(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<Option<Hospital>>>, AppError> {
    let hospital = state.hospital_repo.find_by_id(&HospitalId(id)).await?;
    Ok(Json(ApiResponse::new(hospital)))
}

/// POST /api/hospitals
pub async fn create_hospital(
    State(state): State<AppState>,
    Json(request): Json<HospitalRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Hospital>>), AppError> {
    let created = state.hospital_repo.create(&request.into_new()).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::new(created))))
}

/// PUT /api/hospitals/:id
pub async fn update_hospital(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<HospitalRequest>,
) -> Result<Json<ApiResponse<Hospital>>, AppError> {
    let id = HospitalId(id);
    state.hospital_repo.find_by_id(&id).await?.ok_or_else(|| {
        AppError::Domain(DomainError::NotFound(format!("Hospital {} not found", id)))
    })?;

    let updated = state.hospital_repo.update(&id, &request.into_new()).await?;
    Ok(Json(ApiResponse::new(updated)))
}

/// DELETE /api/hospitals/:id
pub async fn delete_hospital(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<bool>>, AppError> {
    state.hospital_repo.delete(&HospitalId(id)).await?;
    Ok(Json(ApiResponse::new(true)))
}
