//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{dashboard, equipment, health, requests, teams, users};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "GearGuard API",
        version = "1.0.0",
        description = "Maintenance Request Tracking REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Equipment
        equipment::list_equipment,
        equipment::get_equipment,
        equipment::create_equipment,
        equipment::update_equipment,
        equipment::equipment_defaults,
        equipment::equipment_requests,
        equipment::equipment_open_count,
        // Teams
        teams::list_teams,
        teams::create_team,
        teams::update_team,
        teams::team_members,
        // Users
        users::list_users,
        users::create_user,
        users::update_user,
        // Requests
        requests::list_requests,
        requests::get_request,
        requests::create_request,
        requests::update_status,
        requests::complete_request,
        requests::reassign_technician,
        // Dashboard
        dashboard::get_stats,
    ),
    components(
        schemas(
            // Enums
            crate::models::enums::EquipmentStatus,
            crate::models::enums::RequestStatus,
            crate::models::enums::RequestType,
            crate::models::enums::Priority,
            // Equipment
            crate::models::equipment::Equipment,
            crate::models::equipment::CreateEquipment,
            crate::models::equipment::UpdateEquipment,
            crate::models::equipment::EquipmentDefaults,
            equipment::OpenCountResponse,
            // Teams / users
            crate::models::team::Team,
            crate::models::team::CreateTeam,
            crate::models::team::UpdateTeam,
            crate::models::user::User,
            crate::models::user::CreateUser,
            crate::models::user::UpdateUser,
            // Requests
            crate::models::request::MaintenanceRequest,
            crate::models::request::RequestDetails,
            crate::models::request::CreateRequest,
            crate::models::request::UpdateStatus,
            crate::models::request::CompleteRequest,
            crate::models::request::ReassignTechnician,
            // Dashboard
            crate::services::dashboard::DashboardStats,
            crate::services::dashboard::StatEntry,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "equipment", description = "Equipment registry"),
        (name = "teams", description = "Maintenance teams"),
        (name = "users", description = "Technicians and employees"),
        (name = "requests", description = "Maintenance request lifecycle"),
        (name = "dashboard", description = "Dashboard statistics")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
