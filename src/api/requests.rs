//! Maintenance request API endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppResult,
    models::{
        enums::RequestStatus,
        request::{
            CompleteRequest, CreateRequest, MaintenanceRequest, ReassignTechnician,
            RequestDetails, RequestQuery, UpdateStatus,
        },
    },
    services::lifecycle::TransitionContext,
};

/// List maintenance requests, newest first
#[utoipa::path(
    get,
    path = "/requests",
    tag = "requests",
    params(RequestQuery),
    responses(
        (status = 200, description = "Request list", body = Vec<RequestDetails>)
    )
)]
pub async fn list_requests(
    State(state): State<crate::AppState>,
    Query(query): Query<RequestQuery>,
) -> AppResult<Json<Vec<RequestDetails>>> {
    let requests = state.services.requests.list(&query).await?;
    Ok(Json(requests))
}

/// Get a request by ID
#[utoipa::path(
    get,
    path = "/requests/{id}",
    tag = "requests",
    params(("id" = Uuid, Path, description = "Request ID")),
    responses(
        (status = 200, description = "Request details", body = RequestDetails),
        (status = 404, description = "Request not found")
    )
)]
pub async fn get_request(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<RequestDetails>> {
    let request = state.services.requests.get_details(id).await?;
    Ok(Json(request))
}

/// Create a maintenance request. Category, team and default technician are
/// snapshotted from the equipment; scrapped equipment is refused.
#[utoipa::path(
    post,
    path = "/requests",
    tag = "requests",
    request_body = CreateRequest,
    responses(
        (status = 201, description = "Request created", body = MaintenanceRequest),
        (status = 400, description = "Missing subject or scheduled date"),
        (status = 404, description = "Equipment not found"),
        (status = 422, description = "Equipment is scrapped")
    )
)]
pub async fn create_request(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateRequest>,
) -> AppResult<(StatusCode, Json<MaintenanceRequest>)> {
    data.validate()?;
    let request = state.services.requests.create(data).await?;
    Ok((StatusCode::CREATED, Json(request)))
}

/// Change a request's status (kanban drag-drop). Moving to `repaired`
/// requires hours spent; moving to `scrap` scraps the equipment.
#[utoipa::path(
    put,
    path = "/requests/{id}/status",
    tag = "requests",
    params(("id" = Uuid, Path, description = "Request ID")),
    request_body = UpdateStatus,
    responses(
        (status = 200, description = "Request updated", body = MaintenanceRequest),
        (status = 400, description = "Hours missing or invalid"),
        (status = 404, description = "Request not found"),
        (status = 422, description = "Terminal status cannot be changed")
    )
)]
pub async fn update_status(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
    Json(data): Json<UpdateStatus>,
) -> AppResult<Json<MaintenanceRequest>> {
    let ctx = TransitionContext {
        hours_spent: data.hours_spent,
    };
    let request = state.services.lifecycle.transition(id, data.status, ctx).await?;
    Ok(Json(request))
}

/// Record hours spent and mark the request repaired in one call
#[utoipa::path(
    post,
    path = "/requests/{id}/complete",
    tag = "requests",
    params(("id" = Uuid, Path, description = "Request ID")),
    request_body = CompleteRequest,
    responses(
        (status = 200, description = "Request marked repaired", body = MaintenanceRequest),
        (status = 400, description = "Hours missing or invalid"),
        (status = 404, description = "Request not found")
    )
)]
pub async fn complete_request(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
    Json(data): Json<CompleteRequest>,
) -> AppResult<Json<MaintenanceRequest>> {
    let ctx = TransitionContext {
        hours_spent: data.hours_spent,
    };
    let request = state
        .services
        .lifecycle
        .transition(id, RequestStatus::Repaired, ctx)
        .await?;
    Ok(Json(request))
}

/// Reassign the technician on a request
#[utoipa::path(
    put,
    path = "/requests/{id}/technician",
    tag = "requests",
    params(("id" = Uuid, Path, description = "Request ID")),
    request_body = ReassignTechnician,
    responses(
        (status = 200, description = "Technician reassigned", body = MaintenanceRequest),
        (status = 400, description = "Technician not in the request's team"),
        (status = 404, description = "Request or technician not found")
    )
)]
pub async fn reassign_technician(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
    Json(data): Json<ReassignTechnician>,
) -> AppResult<Json<MaintenanceRequest>> {
    let request = state
        .services
        .lifecycle
        .reassign(id, data.technician_id)
        .await?;
    Ok(Json(request))
}
