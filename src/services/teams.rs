//! Teams and users service

use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{
        team::{CreateTeam, Team, UpdateTeam},
        user::{CreateUser, UpdateUser, User, UserQuery},
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct TeamsService {
    repository: Repository,
}

impl TeamsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Team>> {
        self.repository.teams.list().await
    }

    pub async fn create(&self, data: &CreateTeam) -> AppResult<Team> {
        self.repository.teams.create(data).await
    }

    pub async fn update(&self, id: Uuid, data: &UpdateTeam) -> AppResult<Team> {
        self.repository.teams.update(id, data).await
    }

    /// Members of a team, for the technician dropdown
    pub async fn members(&self, team_id: Uuid) -> AppResult<Vec<User>> {
        // Verify the team exists so an unknown id is a 404, not an empty list
        self.repository.teams.get_by_id(team_id).await?;
        self.repository.teams.members(team_id).await
    }

    pub async fn list_users(&self, query: &UserQuery) -> AppResult<Vec<User>> {
        self.repository.users.list(query).await
    }

    pub async fn create_user(&self, data: &CreateUser) -> AppResult<User> {
        self.repository.users.create(data).await
    }

    pub async fn update_user(&self, id: Uuid, data: &UpdateUser) -> AppResult<User> {
        self.repository.users.update(id, data).await
    }
}
