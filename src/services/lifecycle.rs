//! Request lifecycle state machine

use chrono::Local;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{
        enums::{EquipmentStatus, RequestStatus},
        request::MaintenanceRequest,
    },
    repository::Repository,
};

/// Caller-supplied context for a status transition
#[derive(Debug, Default)]
pub struct TransitionContext {
    /// Hours spent on the repair, required when entering `repaired` unless
    /// already recorded on the request
    pub hours_spent: Option<f64>,
}

/// What a validated transition will persist
#[derive(Debug, PartialEq)]
pub struct TransitionPlan {
    pub target: RequestStatus,
    /// Hours to record, when entering `repaired` with newly supplied hours
    pub hours_spent: Option<f64>,
    /// Whether the associated equipment must be scrapped first
    pub scrap_equipment: bool,
    /// Whether to stamp the completion date
    pub complete: bool,
}

/// Validate a status transition without touching storage.
///
/// Any status is reachable from a non-terminal status; terminal statuses
/// (`repaired`, `scrap`) are never exited. Entering `repaired` requires a
/// finite, non-negative hours value, either supplied now or already on the
/// record.
pub fn validate_transition(
    current: RequestStatus,
    target: RequestStatus,
    supplied_hours: Option<f64>,
    recorded_hours: Option<f64>,
) -> AppResult<TransitionPlan> {
    if current.is_terminal() && target != current {
        return Err(AppError::BusinessRule(format!(
            "Request is already {} and cannot change status",
            current
        )));
    }

    if target == RequestStatus::Repaired {
        let newly_supplied = match supplied_hours {
            Some(h) if h.is_finite() && h >= 0.0 => Some(h),
            Some(_) => {
                return Err(AppError::Validation(
                    "Hours spent must be a non-negative number".to_string(),
                ))
            }
            None => None,
        };
        if newly_supplied.is_none() && recorded_hours.is_none() {
            return Err(AppError::Validation(
                "Hours spent is required to mark a request repaired".to_string(),
            ));
        }
        return Ok(TransitionPlan {
            target,
            hours_spent: newly_supplied,
            scrap_equipment: false,
            complete: true,
        });
    }

    Ok(TransitionPlan {
        target,
        hours_spent: None,
        scrap_equipment: target == RequestStatus::Scrap,
        complete: false,
    })
}

#[derive(Clone)]
pub struct LifecycleService {
    repository: Repository,
}

impl LifecycleService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Move a request to a new status, applying transition side effects.
    ///
    /// Entering `scrap` marks the equipment as scrapped before the request
    /// status is committed, so a failed equipment write leaves the request
    /// untouched. The two writes are not atomic; the equipment write is
    /// deliberately first.
    pub async fn transition(
        &self,
        request_id: Uuid,
        target: RequestStatus,
        ctx: TransitionContext,
    ) -> AppResult<MaintenanceRequest> {
        let request = self.repository.requests.get_by_id(request_id).await?;

        if request.status == target {
            return Ok(request);
        }

        let plan = validate_transition(request.status, target, ctx.hours_spent, request.hours_spent)?;

        if plan.scrap_equipment {
            self.repository
                .equipment
                .set_status(request.equipment_id, EquipmentStatus::Scrapped)
                .await?;
            tracing::info!(
                equipment_id = %request.equipment_id,
                request_id = %request_id,
                "Equipment scrapped via request transition"
            );
        }

        let completed_date = plan.complete.then(|| Local::now().date_naive());

        self.repository
            .requests
            .update_status(request_id, plan.target, plan.hours_spent, completed_date)
            .await
    }

    /// Reassign the technician on a request. Not a status transition: the
    /// only constraints are a known technician who belongs to the
    /// request's snapshotted team, when the request has one.
    pub async fn reassign(
        &self,
        request_id: Uuid,
        technician_id: Uuid,
    ) -> AppResult<MaintenanceRequest> {
        let request = self.repository.requests.get_by_id(request_id).await?;
        let technician = self.repository.users.get_by_id(technician_id).await?;

        if let Some(team_id) = request.team_id {
            if technician.team_id != Some(team_id) {
                return Err(AppError::Validation(format!(
                    "Technician {} does not belong to the request's team",
                    technician.full_name
                )));
            }
        }

        self.repository
            .requests
            .update_technician(request_id, technician_id)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repaired_without_hours_is_rejected() {
        let err = validate_transition(RequestStatus::New, RequestStatus::Repaired, None, None)
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn repaired_with_supplied_hours_is_planned() {
        let plan =
            validate_transition(RequestStatus::InProgress, RequestStatus::Repaired, Some(2.5), None)
                .unwrap();
        assert_eq!(plan.hours_spent, Some(2.5));
        assert!(plan.complete);
        assert!(!plan.scrap_equipment);
    }

    #[test]
    fn repaired_with_recorded_hours_needs_no_new_value() {
        let plan =
            validate_transition(RequestStatus::New, RequestStatus::Repaired, None, Some(1.0))
                .unwrap();
        assert_eq!(plan.hours_spent, None);
        assert!(plan.complete);
    }

    #[test]
    fn negative_or_nan_hours_are_rejected() {
        for bad in [-1.0, f64::NAN, f64::INFINITY] {
            let err = validate_transition(
                RequestStatus::New,
                RequestStatus::Repaired,
                Some(bad),
                None,
            )
            .unwrap_err();
            assert!(matches!(err, AppError::Validation(_)), "hours {}", bad);
        }
    }

    #[test]
    fn zero_hours_are_accepted() {
        let plan =
            validate_transition(RequestStatus::New, RequestStatus::Repaired, Some(0.0), None)
                .unwrap();
        assert_eq!(plan.hours_spent, Some(0.0));
    }

    #[test]
    fn terminal_statuses_cannot_be_exited() {
        for terminal in [RequestStatus::Repaired, RequestStatus::Scrap] {
            for target in [RequestStatus::New, RequestStatus::InProgress] {
                let err = validate_transition(terminal, target, None, None).unwrap_err();
                assert!(matches!(err, AppError::BusinessRule(_)));
            }
        }
    }

    #[test]
    fn scrap_plans_equipment_side_effect() {
        let plan = validate_transition(RequestStatus::New, RequestStatus::Scrap, None, None)
            .unwrap();
        assert!(plan.scrap_equipment);
        assert!(!plan.complete);

        let plan =
            validate_transition(RequestStatus::InProgress, RequestStatus::Scrap, None, None)
                .unwrap();
        assert!(plan.scrap_equipment);
    }

    #[test]
    fn any_non_terminal_jump_is_allowed() {
        assert!(validate_transition(RequestStatus::New, RequestStatus::InProgress, None, None)
            .is_ok());
        assert!(
            validate_transition(RequestStatus::InProgress, RequestStatus::New, None, None).is_ok()
        );
        assert!(
            validate_transition(RequestStatus::New, RequestStatus::Repaired, Some(3.0), None)
                .is_ok()
        );
    }
}
