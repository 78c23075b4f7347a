//! Maintenance request model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use super::enums::{Priority, RequestStatus, RequestType};

/// Maintenance request record. Category, team and technician are snapshots
/// taken from the equipment at creation time; later equipment edits do not
/// change existing requests.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct MaintenanceRequest {
    pub id: Uuid,
    pub subject: String,
    pub description: Option<String>,
    pub equipment_id: Uuid,
    pub category: Option<String>,
    pub team_id: Option<Uuid>,
    pub assigned_technician_id: Option<Uuid>,
    pub request_type: RequestType,
    pub priority: Priority,
    pub status: RequestStatus,
    /// Required for preventive requests
    pub scheduled_date: Option<NaiveDate>,
    /// Set when the request enters `repaired`
    pub completed_date: Option<NaiveDate>,
    /// Recorded when the request enters `repaired`
    pub hours_spent: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Maintenance request expanded with the names of its referenced records
/// (kanban card / list view)
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct RequestDetails {
    pub id: Uuid,
    pub subject: String,
    pub description: Option<String>,
    pub equipment_id: Uuid,
    pub equipment_name: String,
    pub equipment_serial: String,
    pub category: Option<String>,
    pub team_id: Option<Uuid>,
    pub team_name: Option<String>,
    pub assigned_technician_id: Option<Uuid>,
    pub technician_name: Option<String>,
    pub request_type: RequestType,
    pub priority: Priority,
    pub status: RequestStatus,
    pub scheduled_date: Option<NaiveDate>,
    pub completed_date: Option<NaiveDate>,
    pub hours_spent: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Computed against the local calendar day, never stored
    #[sqlx(default)]
    pub is_overdue: bool,
}

/// Create maintenance request payload. Team and category are not accepted
/// from the caller: they are snapshotted server-side from the equipment.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateRequest {
    #[validate(length(min = 1, message = "Subject is required"))]
    pub subject: String,
    pub description: Option<String>,
    pub equipment_id: Uuid,
    /// Defaults to the equipment's default technician when absent
    pub assigned_technician_id: Option<Uuid>,
    #[serde(default)]
    pub request_type: RequestType,
    #[serde(default)]
    pub priority: Priority,
    pub scheduled_date: Option<NaiveDate>,
}

/// Fields resolved by the derivation engine and persisted on insert
#[derive(Debug)]
pub struct NewRequest {
    pub subject: String,
    pub description: Option<String>,
    pub equipment_id: Uuid,
    pub category: Option<String>,
    pub team_id: Option<Uuid>,
    pub assigned_technician_id: Option<Uuid>,
    pub request_type: RequestType,
    pub priority: Priority,
    pub scheduled_date: Option<NaiveDate>,
}

/// Query parameters for listing requests
#[derive(Debug, Deserialize, IntoParams)]
pub struct RequestQuery {
    pub equipment_id: Option<Uuid>,
    /// Filter by request type (corrective / preventive)
    #[serde(rename = "type")]
    pub request_type: Option<RequestType>,
    pub status: Option<RequestStatus>,
    /// Calendar window: include only requests scheduled on or after this day
    pub scheduled_from: Option<NaiveDate>,
    /// Calendar window: include only requests scheduled on or before this day
    pub scheduled_to: Option<NaiveDate>,
}

/// Status change payload (kanban drag-drop)
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateStatus {
    pub status: RequestStatus,
    /// Required when moving to `repaired` and no hours were recorded yet
    pub hours_spent: Option<f64>,
}

/// Completion payload: technician records hours and the request moves to
/// `repaired`
#[derive(Debug, Deserialize, ToSchema)]
pub struct CompleteRequest {
    pub hours_spent: Option<f64>,
}

/// Technician reassignment payload
#[derive(Debug, Deserialize, ToSchema)]
pub struct ReassignTechnician {
    pub technician_id: Uuid,
}
