//! Equipment API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::equipment::{
        parse_equipment_id, CreateEquipment, Equipment, UpdateEquipment, UpdateEquipmentStatus,
    },
    AppState,
};

use super::{ApiJson, MessageResponse};

/// List all equipment, most recently created first
#[utoipa::path(
    get,
    path = "/api/equipments",
    tag = "equipment",
    responses(
        (status = 200, description = "Equipment list", body = Vec<Equipment>),
        (status = 500, description = "Storage failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_equipment(State(state): State<AppState>) -> AppResult<Json<Vec<Equipment>>> {
    let equipment = state.services.equipment.list().await?;
    Ok(Json(equipment))
}

/// Register new equipment
#[utoipa::path(
    post,
    path = "/api/equipments",
    tag = "equipment",
    request_body = CreateEquipment,
    responses(
        (status = 201, description = "Equipment registered", body = MessageResponse),
        (status = 400, description = "Missing name or invalid status", body = crate::error::ErrorResponse),
        (status = 500, description = "Storage failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_equipment(
    State(state): State<AppState>,
    ApiJson(data): ApiJson<CreateEquipment>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    state.services.equipment.create(&data).await?;
    Ok((StatusCode::CREATED, Json(MessageResponse::new("Equipment registered"))))
}

/// Replace every field of an equipment record
#[utoipa::path(
    put,
    path = "/api/equipments/{id}",
    tag = "equipment",
    params(("id" = i64, Path, description = "Equipment ID")),
    request_body = UpdateEquipment,
    responses(
        (status = 200, description = "Equipment updated", body = MessageResponse),
        (status = 400, description = "Invalid id or status", body = crate::error::ErrorResponse),
        (status = 404, description = "Equipment not found", body = crate::error::ErrorResponse),
        (status = 500, description = "Storage failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_equipment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(data): ApiJson<UpdateEquipment>,
) -> AppResult<Json<MessageResponse>> {
    let id = parse_equipment_id(&id)?;
    state.services.equipment.update(id, &data).await?;
    Ok(Json(MessageResponse::new("Equipment updated")))
}

/// Change only the status of an equipment record
#[utoipa::path(
    patch,
    path = "/api/equipments/{id}/status",
    tag = "equipment",
    params(("id" = i64, Path, description = "Equipment ID")),
    request_body = UpdateEquipmentStatus,
    responses(
        (status = 200, description = "Status changed", body = MessageResponse),
        (status = 400, description = "Invalid id or status", body = crate::error::ErrorResponse),
        (status = 404, description = "Equipment not found", body = crate::error::ErrorResponse),
        (status = 500, description = "Storage failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_equipment_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(data): ApiJson<UpdateEquipmentStatus>,
) -> AppResult<Json<MessageResponse>> {
    let id = parse_equipment_id(&id)?;
    state.services.equipment.update_status(id, &data).await?;
    Ok(Json(MessageResponse::new("Equipment status changed")))
}

/// Delete an equipment record
#[utoipa::path(
    delete,
    path = "/api/equipments/{id}",
    tag = "equipment",
    params(("id" = i64, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "Equipment deleted", body = MessageResponse),
        (status = 400, description = "Invalid id", body = crate::error::ErrorResponse),
        (status = 404, description = "Equipment not found", body = crate::error::ErrorResponse),
        (status = 500, description = "Storage failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_equipment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let id = parse_equipment_id(&id)?;
    state.services.equipment.delete(id).await?;
    Ok(Json(MessageResponse::new("Equipment deleted")))
}
