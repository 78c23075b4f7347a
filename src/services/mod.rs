//! Business logic services

pub mod dashboard;
pub mod derivation;
pub mod equipment;
pub mod lifecycle;
pub mod requests;
pub mod teams;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub equipment: equipment::EquipmentService,
    pub teams: teams::TeamsService,
    pub requests: requests::RequestsService,
    pub derivation: derivation::DerivationService,
    pub lifecycle: lifecycle::LifecycleService,
    pub dashboard: dashboard::DashboardService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            equipment: equipment::EquipmentService::new(repository.clone()),
            teams: teams::TeamsService::new(repository.clone()),
            requests: requests::RequestsService::new(repository.clone()),
            derivation: derivation::DerivationService::new(repository.clone()),
            lifecycle: lifecycle::LifecycleService::new(repository.clone()),
            dashboard: dashboard::DashboardService::new(repository),
        }
    }
}
