//! Equipment model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use super::{enums::EquipmentStatus, team::Team, user::User};

/// Equipment record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Equipment {
    pub id: Uuid,
    pub name: String,
    pub serial_number: String,
    pub category: Option<String>,
    pub department: Option<String>,
    pub location: Option<String>,
    /// Employee currently using the equipment
    pub owner_employee_id: Option<Uuid>,
    /// Maintenance team responsible by default
    pub team_id: Option<Uuid>,
    /// Technician pre-assigned to new requests
    pub default_technician_id: Option<Uuid>,
    /// Only the scrap transition of a maintenance request changes this
    pub status: EquipmentStatus,
    pub purchase_date: Option<NaiveDate>,
    pub warranty_end: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

/// Create equipment request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateEquipment {
    #[validate(length(min = 1, message = "Equipment name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Serial number is required"))]
    pub serial_number: String,
    pub category: Option<String>,
    pub department: Option<String>,
    pub location: Option<String>,
    pub owner_employee_id: Option<Uuid>,
    pub team_id: Option<Uuid>,
    pub default_technician_id: Option<Uuid>,
    pub purchase_date: Option<NaiveDate>,
    pub warranty_end: Option<NaiveDate>,
}

/// Update equipment request. Status is deliberately absent: equipment is
/// scrapped only through the request lifecycle, never by direct edit.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateEquipment {
    pub name: Option<String>,
    pub serial_number: Option<String>,
    pub category: Option<String>,
    pub department: Option<String>,
    pub location: Option<String>,
    pub owner_employee_id: Option<Uuid>,
    pub team_id: Option<Uuid>,
    pub default_technician_id: Option<Uuid>,
    pub purchase_date: Option<NaiveDate>,
    pub warranty_end: Option<NaiveDate>,
}

/// Query parameters for listing equipment
#[derive(Debug, Deserialize, IntoParams)]
pub struct EquipmentQuery {
    /// Substring match on equipment name
    pub q: Option<String>,
    pub department: Option<String>,
    pub owner_employee_id: Option<Uuid>,
}

/// Auto-fill data derived from an equipment selection when drafting a
/// maintenance request
#[derive(Debug, Serialize, ToSchema)]
pub struct EquipmentDefaults {
    /// Category copied onto the new request
    pub category: Option<String>,
    pub team_id: Option<Uuid>,
    pub team: Option<Team>,
    pub default_technician_id: Option<Uuid>,
    pub default_technician: Option<User>,
    /// Users of the equipment's team, for the technician dropdown
    pub team_members: Vec<User>,
}
