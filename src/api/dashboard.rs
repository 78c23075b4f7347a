//! Dashboard endpoints

use axum::{extract::State, Json};

use crate::{error::AppResult, services::dashboard::DashboardStats};

/// Dashboard statistics: totals, overdue count, completion rate and
/// per-team / per-category groupings, recomputed from the full request
/// collection on each call
#[utoipa::path(
    get,
    path = "/dashboard/stats",
    tag = "dashboard",
    responses(
        (status = 200, description = "Dashboard statistics", body = DashboardStats)
    )
)]
pub async fn get_stats(State(state): State<crate::AppState>) -> AppResult<Json<DashboardStats>> {
    let stats = state.services.dashboard.stats().await?;
    Ok(Json(stats))
}
