//! Equipment-driven derivation: auto-fill of request fields and the
//! overdue rule

use chrono::{Local, NaiveDate};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{
        enums::{EquipmentStatus, RequestStatus},
        equipment::EquipmentDefaults,
    },
    repository::Repository,
};

/// A request is overdue when it still has work to do (non-terminal status)
/// and its scheduled day has passed. Date-only comparison against the
/// caller's local calendar day; requests without a scheduled date are
/// never overdue.
pub fn is_overdue(
    scheduled_date: Option<NaiveDate>,
    status: RequestStatus,
    today: NaiveDate,
) -> bool {
    match scheduled_date {
        None => false,
        Some(_) if status.is_terminal() => false,
        Some(date) => date < today,
    }
}

/// Overdue check against the current local day
pub fn is_overdue_now(scheduled_date: Option<NaiveDate>, status: RequestStatus) -> bool {
    is_overdue(scheduled_date, status, Local::now().date_naive())
}

#[derive(Clone)]
pub struct DerivationService {
    repository: Repository,
}

impl DerivationService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Resolve the auto-fill fields for a new request from the selected
    /// equipment: category and team verbatim, default technician, and the
    /// team's members for the technician dropdown. Scrapped equipment is
    /// refused outright and populates nothing.
    pub async fn defaults_for_equipment(&self, equipment_id: Uuid) -> AppResult<EquipmentDefaults> {
        let equipment = self.repository.equipment.get_by_id(equipment_id).await?;

        if equipment.status == EquipmentStatus::Scrapped {
            return Err(AppError::ScrappedEquipment(format!(
                "Equipment {} is scrapped and cannot receive new requests",
                equipment.name
            )));
        }

        // The three lookups are independent; issue them concurrently
        let (team, team_members, default_technician) = tokio::join!(
            async {
                match equipment.team_id {
                    Some(team_id) => self.repository.teams.get_by_id(team_id).await.map(Some),
                    None => Ok(None),
                }
            },
            async {
                match equipment.team_id {
                    Some(team_id) => self.repository.teams.members(team_id).await,
                    None => Ok(Vec::new()),
                }
            },
            async {
                match equipment.default_technician_id {
                    Some(user_id) => self.repository.users.get_by_id(user_id).await.map(Some),
                    None => Ok(None),
                }
            },
        );
        let (team, team_members, default_technician) = (team?, team_members?, default_technician?);

        Ok(EquipmentDefaults {
            category: equipment.category,
            team_id: equipment.team_id,
            team,
            default_technician_id: equipment.default_technician_id,
            default_technician,
            team_members,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn no_scheduled_date_is_never_overdue() {
        let today = day(2025, 6, 15);
        assert!(!is_overdue(None, RequestStatus::New, today));
        assert!(!is_overdue(None, RequestStatus::InProgress, today));
    }

    #[test]
    fn terminal_statuses_are_never_overdue() {
        let today = day(2025, 6, 15);
        let past = Some(day(2025, 6, 1));
        assert!(!is_overdue(past, RequestStatus::Repaired, today));
        assert!(!is_overdue(past, RequestStatus::Scrap, today));
    }

    #[test]
    fn past_date_open_status_is_overdue() {
        let today = day(2025, 6, 15);
        assert!(is_overdue(Some(day(2025, 6, 14)), RequestStatus::New, today));
        assert!(is_overdue(
            Some(day(2025, 6, 14)),
            RequestStatus::InProgress,
            today
        ));
    }

    #[test]
    fn today_and_future_are_not_overdue() {
        let today = day(2025, 6, 15);
        assert!(!is_overdue(Some(today), RequestStatus::New, today));
        assert!(!is_overdue(Some(day(2025, 6, 16)), RequestStatus::New, today));
    }

    #[test]
    fn repairing_clears_overdue() {
        let today = day(2025, 6, 15);
        let yesterday = Some(day(2025, 6, 14));
        assert!(is_overdue(yesterday, RequestStatus::New, today));
        assert!(!is_overdue(yesterday, RequestStatus::Repaired, today));
    }
}
