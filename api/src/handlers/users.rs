//! User handlers
//!
//! Registration and profile endpoints. Registration answers with the user
//! and a one-time session token; the token is never retrievable again.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::app::RegisterUser;
use crate::domain::entities::{UpdateUser, User, UserId};
use crate::error::AppError;
use crate::response::ApiResponse;
use crate::AppState;

/// Request body for registering a user
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub user_name: String,
    pub password: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub address: String,
    pub last_donation_date: Option<DateTime<Utc>>,
    pub date_of_birth: DateTime<Utc>,
    pub user_type: String,
    #[serde(default)]
    pub blood_type: String,
}

/// Response for a successful registration
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub user: User,
    /// Shown once; only its hash is stored
    pub session_token: String,
}

/// Request body for overwriting a user profile
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub first_name: String,
    pub last_name: String,
    pub user_name: String,
    pub email: String,
    pub phone_number: String,
    pub gender: String,
    pub address: String,
    pub last_donation_date: Option<DateTime<Utc>>,
    pub date_of_birth: DateTime<Utc>,
    pub user_type: String,
    pub blood_type: String,
}

/// POST /api/users
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<RegisterResponse>>), AppError> {
    let (user, session_token) = state
        .user_service
        .register(RegisterUser {
            first_name: request.first_name,
            last_name: request.last_name,
            user_name: request.user_name,
            password: request.password,
            email: request.email,
            phone_number: request.phone_number,
            gender: request.gender,
            address: request.address,
            last_donation_date: request.last_donation_date,
            date_of_birth: request.date_of_birth,
            user_type: request.user_type,
            blood_type: request.blood_type,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(RegisterResponse {
            user,
            session_token,
        })),
    ))
}

/// GET /api/users
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<User>>>, AppError> {
    let users = state.user_service.list().await?;
    Ok(Json(ApiResponse::new(users)))
}

/// GET /api/users/:id
///
/// An absent id answers 200 with a null payload.
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<Option<User>>>, AppError> {
    let user = state.user_service.get(&UserId(id)).await?;
    Ok(Json(ApiResponse::new(user)))
}

/// PUT /api/users/:id
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateUserRequest>,
) -> Result<Json<ApiResponse<User>>, AppError> {
    let updated = state
        .user_service
        .update(
            &UserId(id),
            UpdateUser {
                first_name: request.first_name,
                last_name: request.last_name,
                user_name: request.user_name,
                email: request.email,
                phone_number: request.phone_number,
                gender: request.gender,
                address: request.address,
                last_donation_date: request.last_donation_date,
                date_of_birth: request.date_of_birth,
                user_type: request.user_type,
                blood_type: request.blood_type,
            },
        )
        .await?;
    Ok(Json(ApiResponse::new(updated)))
}

/// DELETE /api/users/:id
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<bool>>, AppError> {
    state.user_service.delete(&UserId(id)).await?;
    Ok(Json(ApiResponse::new(true)))
}
