//! Blood request handlers
//!
//! Endpoints for blood requests addressed to hospitals.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::app::RequestView;
use crate::domain::entities::{BloodTypeId, HospitalId, NewRequest, RequestId};
use crate::error::AppError;
use crate::response::ApiResponse;
use crate::AppState;

/// Request body for creating or overwriting a blood request
#[derive(Debug, Deserialize)]
pub struct BloodRequestBody {
    pub requester_name: String,
    pub blood_type_id: i32,
    pub quantity: i32,
    pub hospital_id: i32,
    pub request_date: DateTime<Utc>,
}

impl BloodRequestBody {
    fn into_new(self) -> NewRequest {
        NewRequest {
            requester_name: self.requester_name,
            blood_type_id: BloodTypeId(self.blood_type_id),
            quantity: self.quantity,
            hospital_id: HospitalId(self.hospital_id),
            request_date: self.request_date,
        }
    }
}

/// GET /api/requests
pub async fn list_requests(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<RequestView>>>, AppError> {
    let views = state.request_service.list().await?;
    Ok(Json(ApiResponse::new(views)))
}

/// GET /api/requests/:id
///
/// An absent id answers 200 with a null payload.
pub async fn get_request(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<Option<RequestView>>>, AppError> {
    let view = state.request_service.get(&RequestId(id)).await?;
    Ok(Json(ApiResponse::new(view)))
}

/// POST /api/requests
pub async fn create_request(
    State(state): State<AppState>,
    Json(body): Json<BloodRequestBody>,
) -> Result<(StatusCode, Json<ApiResponse<RequestView>>), AppError> {
    let created = state.request_service.create(body.into_new()).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::new(created))))
}

/// PUT /api/requests/:id
pub async fn update_request(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<BloodRequestBody>,
) -> Result<Json<ApiResponse<RequestView>>, AppError> {
    let updated = state
        .request_service
        .update(&RequestId(id), body.into_new())
        .await?;
    Ok(Json(ApiResponse::new(updated)))
}

/// DELETE /api/requests/:id
pub async fn delete_request(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<bool>>, AppError> {
    state.request_service.delete(&RequestId(id)).await?;
    Ok(Json(ApiResponse::new(true)))
}
