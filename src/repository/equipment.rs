//! Equipment repository for database operations

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{
        enums::EquipmentStatus,
        equipment::{CreateEquipment, Equipment, EquipmentQuery, UpdateEquipment},
    },
};

#[derive(Clone)]
pub struct EquipmentRepository {
    pool: Pool<Postgres>,
}

impl EquipmentRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List equipment with optional name / department / owner filters,
    /// name ascending
    pub async fn list(&self, query: &EquipmentQuery) -> AppResult<Vec<Equipment>> {
        let rows = sqlx::query_as::<_, Equipment>(
            r#"
            SELECT * FROM equipment
            WHERE ($1::text IS NULL OR name ILIKE '%' || $1 || '%')
              AND ($2::text IS NULL OR department = $2)
              AND ($3::uuid IS NULL OR owner_employee_id = $3)
            ORDER BY name
            "#,
        )
        .bind(&query.q)
        .bind(&query.department)
        .bind(query.owner_employee_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Get equipment by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Equipment> {
        sqlx::query_as::<_, Equipment>("SELECT * FROM equipment WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", id)))
    }

    /// Create equipment
    pub async fn create(&self, data: &CreateEquipment) -> AppResult<Equipment> {
        let row = sqlx::query_as::<_, Equipment>(
            r#"
            INSERT INTO equipment (
                name, serial_number, category, department, location,
                owner_employee_id, team_id, default_technician_id,
                purchase_date, warranty_end
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(&data.serial_number)
        .bind(&data.category)
        .bind(&data.department)
        .bind(&data.location)
        .bind(data.owner_employee_id)
        .bind(data.team_id)
        .bind(data.default_technician_id)
        .bind(data.purchase_date)
        .bind(data.warranty_end)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Partial update of equipment fields. Status is not updatable here.
    pub async fn update(&self, id: Uuid, data: &UpdateEquipment) -> AppResult<Equipment> {
        sqlx::query_as::<_, Equipment>(
            r#"
            UPDATE equipment SET
                name = COALESCE($2, name),
                serial_number = COALESCE($3, serial_number),
                category = COALESCE($4, category),
                department = COALESCE($5, department),
                location = COALESCE($6, location),
                owner_employee_id = COALESCE($7, owner_employee_id),
                team_id = COALESCE($8, team_id),
                default_technician_id = COALESCE($9, default_technician_id),
                purchase_date = COALESCE($10, purchase_date),
                warranty_end = COALESCE($11, warranty_end)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.serial_number)
        .bind(&data.category)
        .bind(&data.department)
        .bind(&data.location)
        .bind(data.owner_employee_id)
        .bind(data.team_id)
        .bind(data.default_technician_id)
        .bind(data.purchase_date)
        .bind(data.warranty_end)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", id)))
    }

    /// Set equipment status. Reserved for the request lifecycle (scrap
    /// side effect); not reachable from the equipment update endpoint.
    pub async fn set_status(&self, id: Uuid, status: EquipmentStatus) -> AppResult<Equipment> {
        sqlx::query_as::<_, Equipment>(
            "UPDATE equipment SET status = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", id)))
    }
}
