//! Blood type handlers
//!
//! Endpoints for blood type reference data.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::domain::entities::{BloodType, BloodTypeId, NewBloodType};
use crate::domain::ports::BloodTypeRepository;
use crate::error::{AppError, DomainError};
use crate::response::ApiResponse;
use crate::AppState;

/// Request body for creating or renaming a blood type
#[derive(Debug, Deserialize)]
pub struct BloodTypeRequest {
    pub name: String,
}

/// GET /api/bloodtypes
pub async fn list_blood_types(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<BloodType>>>, AppError> {
    let blood_types = state.blood_type_repo.find_all().await?;
    Ok(Json(ApiResponse::new(blood_types)))
}

/// GET /api/bloodtypes/:id
///
/// An absent id answers 200 with a null payload.
pub async fn get_blood_type(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<Option<BloodType>>>, AppError> {
    let blood_type = state.blood_type_repo.find_by_id(&BloodTypeId(id)).await?;
    Ok(Json(ApiResponse::new(blood_type)))
}

/// POST /api/bloodtypes
pub async fn create_blood_type(
    State(state): State<AppState>,
    Json(request): Json<BloodTypeRequest>,
) -> Result<(StatusCode, Json<ApiResponse<BloodType>>), AppError> {
    let created = state
        .blood_type_repo
        .create(&NewBloodType { name: request.name })
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::new(created))))
}

/// PUT /api/bloodtypes/:id
pub async fn update_blood_type(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<BloodTypeRequest>,
) -> Result<Json<ApiResponse<BloodType>>, AppError> {
    let id = BloodTypeId(id);
    state.blood_type_repo.find_by_id(&id).await?.ok_or_else(|| {
        AppError::Domain(DomainError::NotFound(format!(
            "Blood type {} not found",
            id
        )))
    })?;

    let updated = state
        .blood_type_repo
        .update(&id, &NewBloodType { name: request.name })
        .await?;
    Ok(Json(ApiResponse::new(updated)))
}

/// DELETE /api/bloodtypes/:id
pub async fn delete_blood_type(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<bool>>, AppError> {
    state.blood_type_repo.delete(&BloodTypeId(id)).await?;
    Ok(Json(ApiResponse::new(true)))
}
