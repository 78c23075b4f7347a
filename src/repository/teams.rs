//! Teams repository for database operations

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{
        team::{CreateTeam, Team, UpdateTeam},
        user::User,
    },
};

#[derive(Clone)]
pub struct TeamsRepository {
    pool: Pool<Postgres>,
}

impl TeamsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all teams, name ascending
    pub async fn list(&self) -> AppResult<Vec<Team>> {
        let rows = sqlx::query_as::<_, Team>("SELECT * FROM teams ORDER BY name")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get team by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Team> {
        sqlx::query_as::<_, Team>("SELECT * FROM teams WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Team {} not found", id)))
    }

    /// Create a team
    pub async fn create(&self, data: &CreateTeam) -> AppResult<Team> {
        let row = sqlx::query_as::<_, Team>(
            "INSERT INTO teams (name, specialty) VALUES ($1, $2) RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.specialty)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Partial update of team fields
    pub async fn update(&self, id: Uuid, data: &UpdateTeam) -> AppResult<Team> {
        sqlx::query_as::<_, Team>(
            r#"
            UPDATE teams SET
                name = COALESCE($2, name),
                specialty = COALESCE($3, specialty)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.specialty)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Team {} not found", id)))
    }

    /// List the users belonging to a team, full name ascending
    pub async fn members(&self, team_id: Uuid) -> AppResult<Vec<User>> {
        let rows = sqlx::query_as::<_, User>(
            "SELECT * FROM users WHERE team_id = $1 ORDER BY full_name",
        )
        .bind(team_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
