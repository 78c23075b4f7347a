//! Equipment API endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppResult,
    models::{
        equipment::{
            CreateEquipment, Equipment, EquipmentDefaults, EquipmentQuery, UpdateEquipment,
        },
        request::{RequestDetails, RequestQuery},
    },
};

/// Smart-button badge payload: open requests for one equipment
#[derive(Serialize, ToSchema)]
pub struct OpenCountResponse {
    pub equipment_id: Uuid,
    pub open_count: i64,
}

/// List equipment
#[utoipa::path(
    get,
    path = "/equipment",
    tag = "equipment",
    params(EquipmentQuery),
    responses(
        (status = 200, description = "Equipment list", body = Vec<Equipment>)
    )
)]
pub async fn list_equipment(
    State(state): State<crate::AppState>,
    Query(query): Query<EquipmentQuery>,
) -> AppResult<Json<Vec<Equipment>>> {
    let equipment = state.services.equipment.list(&query).await?;
    Ok(Json(equipment))
}

/// Get equipment by ID
#[utoipa::path(
    get,
    path = "/equipment/{id}",
    tag = "equipment",
    params(("id" = Uuid, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "Equipment details", body = Equipment),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn get_equipment(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Equipment>> {
    let equipment = state.services.equipment.get_by_id(id).await?;
    Ok(Json(equipment))
}

/// Create equipment
#[utoipa::path(
    post,
    path = "/equipment",
    tag = "equipment",
    request_body = CreateEquipment,
    responses(
        (status = 201, description = "Equipment created", body = Equipment),
        (status = 400, description = "Invalid payload")
    )
)]
pub async fn create_equipment(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateEquipment>,
) -> AppResult<(StatusCode, Json<Equipment>)> {
    data.validate()?;
    let equipment = state.services.equipment.create(&data).await?;
    Ok((StatusCode::CREATED, Json(equipment)))
}

/// Update equipment. Status cannot be changed here; scrapping happens only
/// through the request lifecycle.
#[utoipa::path(
    put,
    path = "/equipment/{id}",
    tag = "equipment",
    params(("id" = Uuid, Path, description = "Equipment ID")),
    request_body = UpdateEquipment,
    responses(
        (status = 200, description = "Equipment updated", body = Equipment),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn update_equipment(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
    Json(data): Json<UpdateEquipment>,
) -> AppResult<Json<Equipment>> {
    let equipment = state.services.equipment.update(id, &data).await?;
    Ok(Json(equipment))
}

/// Auto-fill data for a new request: category, team, default technician
/// and the team's members. Refused for scrapped equipment.
#[utoipa::path(
    get,
    path = "/equipment/{id}/defaults",
    tag = "equipment",
    params(("id" = Uuid, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "Derived request defaults", body = EquipmentDefaults),
        (status = 404, description = "Equipment not found"),
        (status = 422, description = "Equipment is scrapped")
    )
)]
pub async fn equipment_defaults(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<EquipmentDefaults>> {
    let defaults = state.services.derivation.defaults_for_equipment(id).await?;
    Ok(Json(defaults))
}

/// All maintenance requests for one equipment, newest first
#[utoipa::path(
    get,
    path = "/equipment/{id}/requests",
    tag = "equipment",
    params(("id" = Uuid, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "Requests for this equipment", body = Vec<RequestDetails>),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn equipment_requests(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Vec<RequestDetails>>> {
    // 404 for unknown equipment rather than an empty list
    state.services.equipment.get_by_id(id).await?;
    let query = RequestQuery {
        equipment_id: Some(id),
        request_type: None,
        status: None,
        scheduled_from: None,
        scheduled_to: None,
    };
    let requests = state.services.requests.list(&query).await?;
    Ok(Json(requests))
}

/// Open-request count for one equipment (smart-button badge)
#[utoipa::path(
    get,
    path = "/equipment/{id}/open-count",
    tag = "equipment",
    params(("id" = Uuid, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "Open request count", body = OpenCountResponse)
    )
)]
pub async fn equipment_open_count(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<OpenCountResponse>> {
    let open_count = state.services.requests.open_count_for_equipment(id).await?;
    Ok(Json(OpenCountResponse {
        equipment_id: id,
        open_count,
    }))
}
