//! Maintenance request creation and queries

use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{
        enums::{EquipmentStatus, RequestType},
        request::{CreateRequest, MaintenanceRequest, NewRequest, RequestDetails, RequestQuery},
    },
    repository::Repository,
    services::derivation::is_overdue_now,
};

/// Field-level rules checked before any storage call: preventive requests
/// must carry a scheduled date.
pub fn validate_new_request(data: &CreateRequest) -> AppResult<()> {
    if data.request_type == RequestType::Preventive && data.scheduled_date.is_none() {
        return Err(AppError::Validation(
            "Scheduled date is required for preventive requests".to_string(),
        ));
    }
    Ok(())
}

#[derive(Clone)]
pub struct RequestsService {
    repository: Repository,
}

impl RequestsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self, query: &RequestQuery) -> AppResult<Vec<RequestDetails>> {
        let mut rows = self.repository.requests.list(query).await?;
        for row in &mut rows {
            row.is_overdue = is_overdue_now(row.scheduled_date, row.status);
        }
        Ok(rows)
    }

    pub async fn get_details(&self, id: Uuid) -> AppResult<RequestDetails> {
        let mut row = self.repository.requests.get_details(id).await?;
        row.is_overdue = is_overdue_now(row.scheduled_date, row.status);
        Ok(row)
    }

    /// Create a request. The equipment's current status is re-read
    /// immediately before the insert, closing the race where it was
    /// scrapped between selection and submission; category, team and
    /// default technician are snapshotted from the equipment at this
    /// moment.
    pub async fn create(&self, data: CreateRequest) -> AppResult<MaintenanceRequest> {
        validate_new_request(&data)?;

        let equipment = self.repository.equipment.get_by_id(data.equipment_id).await?;
        if equipment.status == EquipmentStatus::Scrapped {
            return Err(AppError::ScrappedEquipment(format!(
                "Equipment {} is scrapped and cannot receive new requests",
                equipment.name
            )));
        }

        let new_request = NewRequest {
            subject: data.subject,
            description: data.description,
            equipment_id: equipment.id,
            category: equipment.category,
            team_id: equipment.team_id,
            assigned_technician_id: data
                .assigned_technician_id
                .or(equipment.default_technician_id),
            request_type: data.request_type,
            priority: data.priority,
            scheduled_date: data.scheduled_date,
        };

        self.repository.requests.insert(&new_request).await
    }

    /// Open-request count for one equipment (smart-button badge)
    pub async fn open_count_for_equipment(&self, equipment_id: Uuid) -> AppResult<i64> {
        self.repository
            .requests
            .open_count_for_equipment(equipment_id)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enums::Priority;

    fn payload(request_type: RequestType, scheduled: Option<&str>) -> CreateRequest {
        CreateRequest {
            subject: "Leaking Oil".to_string(),
            description: None,
            equipment_id: Uuid::new_v4(),
            assigned_technician_id: None,
            request_type,
            priority: Priority::Medium,
            scheduled_date: scheduled.map(|s| s.parse().unwrap()),
        }
    }

    #[test]
    fn preventive_without_date_fails_validation() {
        let err = validate_new_request(&payload(RequestType::Preventive, None)).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn preventive_with_date_passes() {
        assert!(validate_new_request(&payload(RequestType::Preventive, Some("2025-12-31"))).is_ok());
    }

    #[test]
    fn corrective_needs_no_date() {
        assert!(validate_new_request(&payload(RequestType::Corrective, None)).is_ok());
    }
}
