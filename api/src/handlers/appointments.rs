//! Appointment handlers
//!
//! Endpoints for donation appointments. All of these sit behind the session
//! middleware; create uses the authenticated caller as the appointment owner.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::app::AppointmentView;
use crate::domain::entities::{
    AppointmentId, AppointmentStatus, HospitalId, UpdateAppointment, User, UserId,
};
use crate::error::{AppError, DomainError};
use crate::response::ApiResponse;
use crate::AppState;

/// Request body for booking an appointment
///
/// The owner is never taken from the body; it is always the session user.
#[derive(Debug, Deserialize)]
pub struct CreateAppointmentRequest {
    pub hospital_id: i32,
    pub appointment_type: String,
    #[serde(default = "default_status")]
    pub status: AppointmentStatus,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub info: String,
}

fn default_status() -> AppointmentStatus {
    AppointmentStatus::Pending
}

/// Request body for overwriting an appointment
#[derive(Debug, Deserialize)]
pub struct UpdateAppointmentRequest {
    pub user_id: i32,
    pub hospital_id: i32,
    pub appointment_type: String,
    pub status: AppointmentStatus,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub info: String,
}

/// GET /api/appointment
pub async fn list_appointments(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<AppointmentView>>>, AppError> {
    let views = state.appointment_service.list().await?;
    Ok(Json(ApiResponse::new(views)))
}

/// GET /api/appointment/:id
///
/// An absent id answers 200 with a null payload.
pub async fn get_appointment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<Option<AppointmentView>>>, AppError> {
    let view = state.appointment_service.get(&AppointmentId(id)).await?;
    Ok(Json(ApiResponse::new(view)))
}

/// POST /api/appointment
pub async fn create_appointment(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Json(request): Json<CreateAppointmentRequest>,
) -> Result<(StatusCode, Json<ApiResponse<AppointmentView>>), AppError> {
    let created = state
        .appointment_service
        .create(
            user.id,
            HospitalId(request.hospital_id),
            request.appointment_type,
            request.status,
            request.date,
            request.info,
        )
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::new(created))))
}

/// PUT /api/appointment/:id
pub async fn update_appointment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateAppointmentRequest>,
) -> Result<Json<ApiResponse<AppointmentView>>, AppError> {
    let updated = state
        .appointment_service
        .update(
            &AppointmentId(id),
            UpdateAppointment {
                user_id: UserId(request.user_id),
                hospital_id: HospitalId(request.hospital_id),
                appointment_type: request.appointment_type,
                status: request.status,
                date: request.date,
                info: request.info,
            },
        )
        .await?;
    Ok(Json(ApiResponse::new(updated)))
}

/// PUT /api/appointment/:id/status
///
/// Body is a bare JSON string; anything outside the known statuses is a
/// validation error, never a silent default.
pub async fn set_appointment_status(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(status): Json<String>,
) -> Result<Json<ApiResponse<bool>>, AppError> {
    let status: AppointmentStatus = status
        .parse()
        .map_err(|e: String| AppError::Domain(DomainError::validation("status", e)))?;

    let updated = state
        .appointment_service
        .set_status(&AppointmentId(id), status)
        .await?;
    Ok(Json(ApiResponse::new(updated)))
}

/// DELETE /api/appointment/:id
pub async fn delete_appointment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<bool>>, AppError> {
    state.appointment_service.delete(&AppointmentId(id)).await?;
    Ok(Json(ApiResponse::new(true)))
}
