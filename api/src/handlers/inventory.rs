//! Blood inventory handlers
//!
//! Endpoints for the per-hospital blood unit ledger.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::app::InventoryView;
use crate::domain::entities::{BloodInventoryId, BloodTypeId, HospitalId, NewBloodInventory};
use crate::error::AppError;
use crate::response::ApiResponse;
use crate::AppState;

/// Request body for creating or re-pointing an inventory row
///
/// There is no units field here: new rows always start at zero and the
/// balance only moves through the add/remove endpoints.
#[derive(Debug, Deserialize)]
pub struct InventoryRequest {
    pub hospital_id: i32,
    pub blood_type_id: i32,
}

/// Request body for the add/remove unit endpoints
#[derive(Debug, Deserialize)]
pub struct UnitsRequest {
    pub units: i32,
}

/// GET /api/bloodinventorys
pub async fn list_inventories(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<InventoryView>>>, AppError> {
    let views = state.inventory_service.list().await?;
    Ok(Json(ApiResponse::new(views)))
}

/// GET /api/bloodinventorys/:id
///
/// An absent id answers 200 with a null payload.
pub async fn get_inventory(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<Option<InventoryView>>>, AppError> {
    let view = state.inventory_service.get(&BloodInventoryId(id)).await?;
    Ok(Json(ApiResponse::new(view)))
}

/// POST /api/bloodinventorys
pub async fn create_inventory(
    State(state): State<AppState>,
    Json(request): Json<InventoryRequest>,
) -> Result<(StatusCode, Json<ApiResponse<InventoryView>>), AppError> {
    let created = state
        .inventory_service
        .create(&NewBloodInventory {
            hospital_id: HospitalId(request.hospital_id),
            blood_type_id: BloodTypeId(request.blood_type_id),
        })
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::new(created))))
}

/// PUT /api/bloodinventorys/:id
pub async fn update_inventory(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<InventoryRequest>,
) -> Result<Json<ApiResponse<InventoryView>>, AppError> {
    let updated = state
        .inventory_service
        .update(
            &BloodInventoryId(id),
            HospitalId(request.hospital_id),
            BloodTypeId(request.blood_type_id),
        )
        .await?;
    Ok(Json(ApiResponse::new(updated)))
}

/// POST /api/bloodinventorys/:id/addunits
pub async fn add_inventory_units(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UnitsRequest>,
) -> Result<Json<ApiResponse<InventoryView>>, AppError> {
    let view = state
        .inventory_service
        .add_units(&BloodInventoryId(id), request.units)
        .await?;
    Ok(Json(ApiResponse::new(view)))
}

/// POST /api/bloodinventorys/:id/removeunits
pub async fn remove_inventory_units(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UnitsRequest>,
) -> Result<Json<ApiResponse<InventoryView>>, AppError> {
    let view = state
        .inventory_service
        .remove_units(&BloodInventoryId(id), request.units)
        .await?;
    Ok(Json(ApiResponse::new(view)))
}

/// DELETE /api/bloodinventorys/:id
pub async fn delete_inventory(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<bool>>, AppError> {
    state.inventory_service.delete(&BloodInventoryId(id)).await?;
    Ok(Json(ApiResponse::new(true)))
}
