//! Maintenance requests repository for database operations

use chrono::NaiveDate;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{
        enums::RequestStatus,
        request::{MaintenanceRequest, NewRequest, RequestDetails, RequestQuery},
    },
};

const DETAILS_SELECT: &str = r#"
    SELECT r.*,
           e.name AS equipment_name,
           e.serial_number AS equipment_serial,
           t.name AS team_name,
           u.full_name AS technician_name
    FROM maintenance_requests r
    JOIN equipment e ON r.equipment_id = e.id
    LEFT JOIN teams t ON r.team_id = t.id
    LEFT JOIN users u ON r.assigned_technician_id = u.id
"#;

#[derive(Clone)]
pub struct RequestsRepository {
    pool: Pool<Postgres>,
}

impl RequestsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List requests with expanded equipment / team / technician names,
    /// newest first. All filters are optional and combined with AND.
    pub async fn list(&self, query: &RequestQuery) -> AppResult<Vec<RequestDetails>> {
        let sql = format!(
            r#"{DETAILS_SELECT}
            WHERE ($1::uuid IS NULL OR r.equipment_id = $1)
              AND ($2::request_type IS NULL OR r.request_type = $2)
              AND ($3::request_status IS NULL OR r.status = $3)
              AND ($4::date IS NULL OR r.scheduled_date >= $4)
              AND ($5::date IS NULL OR r.scheduled_date <= $5)
            ORDER BY r.created_at DESC
            "#
        );
        let rows = sqlx::query_as::<_, RequestDetails>(&sql)
            .bind(query.equipment_id)
            .bind(query.request_type)
            .bind(query.status)
            .bind(query.scheduled_from)
            .bind(query.scheduled_to)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get a bare request row by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<MaintenanceRequest> {
        sqlx::query_as::<_, MaintenanceRequest>(
            "SELECT * FROM maintenance_requests WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Request {} not found", id)))
    }

    /// Get a request with expanded names by ID
    pub async fn get_details(&self, id: Uuid) -> AppResult<RequestDetails> {
        let sql = format!("{DETAILS_SELECT} WHERE r.id = $1");
        sqlx::query_as::<_, RequestDetails>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Request {} not found", id)))
    }

    /// Insert a new request. Status always starts at `new`.
    pub async fn insert(&self, data: &NewRequest) -> AppResult<MaintenanceRequest> {
        let row = sqlx::query_as::<_, MaintenanceRequest>(
            r#"
            INSERT INTO maintenance_requests (
                subject, description, equipment_id, category, team_id,
                assigned_technician_id, request_type, priority, scheduled_date
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(&data.subject)
        .bind(&data.description)
        .bind(data.equipment_id)
        .bind(&data.category)
        .bind(data.team_id)
        .bind(data.assigned_technician_id)
        .bind(data.request_type)
        .bind(data.priority)
        .bind(data.scheduled_date)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Apply a status transition. Hours and completion date are only
    /// written when supplied (entering `repaired`).
    pub async fn update_status(
        &self,
        id: Uuid,
        status: RequestStatus,
        hours_spent: Option<f64>,
        completed_date: Option<NaiveDate>,
    ) -> AppResult<MaintenanceRequest> {
        sqlx::query_as::<_, MaintenanceRequest>(
            r#"
            UPDATE maintenance_requests SET
                status = $2,
                hours_spent = COALESCE($3, hours_spent),
                completed_date = COALESCE($4, completed_date),
                updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(status)
        .bind(hours_spent)
        .bind(completed_date)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Request {} not found", id)))
    }

    /// Reassign the technician
    pub async fn update_technician(
        &self,
        id: Uuid,
        technician_id: Uuid,
    ) -> AppResult<MaintenanceRequest> {
        sqlx::query_as::<_, MaintenanceRequest>(
            r#"
            UPDATE maintenance_requests SET
                assigned_technician_id = $2,
                updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(technician_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Request {} not found", id)))
    }

    /// Count open (new / in_progress) requests for one equipment
    /// (smart-button badge)
    pub async fn open_count_for_equipment(&self, equipment_id: Uuid) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM maintenance_requests
            WHERE equipment_id = $1 AND status IN ('new', 'in_progress')
            "#,
        )
        .bind(equipment_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }
}
