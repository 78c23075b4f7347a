//! Dashboard aggregation over the full request collection

use chrono::{Local, NaiveDate};
use serde::Serialize;
use sqlx::FromRow;
use std::collections::HashMap;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::enums::RequestStatus,
    repository::Repository,
    services::derivation::is_overdue,
};

/// Sentinel labels for requests missing a team / category snapshot
const UNASSIGNED: &str = "Unassigned";
const OTHER: &str = "Other";

/// The slice of a request the dashboard needs
#[derive(Debug, Clone, FromRow)]
pub struct RequestSnapshot {
    pub status: RequestStatus,
    pub scheduled_date: Option<NaiveDate>,
    pub category: Option<String>,
    pub team_name: Option<String>,
}

/// A labelled count in a grouped chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct StatEntry {
    pub label: String,
    pub value: i64,
}

/// Dashboard statistics response
#[derive(Debug, Serialize, ToSchema)]
pub struct DashboardStats {
    pub total: i64,
    /// Requests with status new / in_progress
    pub open: i64,
    pub overdue: i64,
    pub repaired: i64,
    pub scrap: i64,
    /// Repaired share of all requests, rounded percent
    pub completion_rate: i64,
    /// Request counts by snapshotted team name, highest first
    pub by_team: Vec<StatEntry>,
    /// Request counts by snapshotted category, highest first
    pub by_category: Vec<StatEntry>,
}

fn grouped_counts<'a>(
    labels: impl Iterator<Item = Option<&'a str>>,
    sentinel: &str,
) -> Vec<StatEntry> {
    let mut counts: HashMap<String, i64> = HashMap::new();
    for label in labels {
        let key = label.filter(|l| !l.is_empty()).unwrap_or(sentinel);
        *counts.entry(key.to_string()).or_insert(0) += 1;
    }
    let mut entries: Vec<StatEntry> = counts
        .into_iter()
        .map(|(label, value)| StatEntry { label, value })
        .collect();
    // highest count first; label order breaks ties deterministically
    entries.sort_by(|a, b| b.value.cmp(&a.value).then_with(|| a.label.cmp(&b.label)));
    entries
}

/// Aggregate dashboard figures from the full request collection
pub fn aggregate(requests: &[RequestSnapshot], today: NaiveDate) -> DashboardStats {
    let total = requests.len() as i64;
    let open = requests.iter().filter(|r| r.status.is_open()).count() as i64;
    let repaired = requests
        .iter()
        .filter(|r| r.status == RequestStatus::Repaired)
        .count() as i64;
    let scrap = requests
        .iter()
        .filter(|r| r.status == RequestStatus::Scrap)
        .count() as i64;
    let overdue = requests
        .iter()
        .filter(|r| is_overdue(r.scheduled_date, r.status, today))
        .count() as i64;

    let completion_rate = if total > 0 {
        ((repaired as f64 / total as f64) * 100.0).round() as i64
    } else {
        0
    };

    DashboardStats {
        total,
        open,
        overdue,
        repaired,
        scrap,
        completion_rate,
        by_team: grouped_counts(requests.iter().map(|r| r.team_name.as_deref()), UNASSIGNED),
        by_category: grouped_counts(requests.iter().map(|r| r.category.as_deref()), OTHER),
    }
}

#[derive(Clone)]
pub struct DashboardService {
    repository: Repository,
}

impl DashboardService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Compute dashboard statistics from a full fetch of the request
    /// collection
    pub async fn stats(&self) -> AppResult<DashboardStats> {
        let rows = sqlx::query_as::<_, RequestSnapshot>(
            r#"
            SELECT r.status, r.scheduled_date, r.category, t.name AS team_name
            FROM maintenance_requests r
            LEFT JOIN teams t ON r.team_id = t.id
            "#,
        )
        .fetch_all(&self.repository.pool)
        .await?;

        Ok(aggregate(&rows, Local::now().date_naive()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn snapshot(
        status: RequestStatus,
        scheduled: Option<NaiveDate>,
        team: Option<&str>,
        category: Option<&str>,
    ) -> RequestSnapshot {
        RequestSnapshot {
            status,
            scheduled_date: scheduled,
            category: category.map(String::from),
            team_name: team.map(String::from),
        }
    }

    #[test]
    fn empty_collection_yields_zeroes() {
        let stats = aggregate(&[], day(2025, 6, 15));
        assert_eq!(stats.total, 0);
        assert_eq!(stats.completion_rate, 0);
        assert!(stats.by_team.is_empty());
        assert!(stats.by_category.is_empty());
    }

    #[test]
    fn counts_by_status() {
        let today = day(2025, 6, 15);
        let rows = vec![
            snapshot(RequestStatus::New, None, None, None),
            snapshot(RequestStatus::InProgress, None, None, None),
            snapshot(RequestStatus::Repaired, None, None, None),
            snapshot(RequestStatus::Scrap, None, None, None),
        ];
        let stats = aggregate(&rows, today);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.open, 2);
        assert_eq!(stats.repaired, 1);
        assert_eq!(stats.scrap, 1);
        assert_eq!(stats.completion_rate, 25);
    }

    #[test]
    fn overdue_respects_terminal_statuses() {
        let today = day(2025, 6, 15);
        let yesterday = Some(day(2025, 6, 14));
        let rows = vec![
            snapshot(RequestStatus::New, yesterday, None, None),
            snapshot(RequestStatus::InProgress, yesterday, None, None),
            snapshot(RequestStatus::Repaired, yesterday, None, None),
            snapshot(RequestStatus::Scrap, yesterday, None, None),
            snapshot(RequestStatus::New, Some(today), None, None),
        ];
        assert_eq!(aggregate(&rows, today).overdue, 2);
    }

    #[test]
    fn by_team_groups_and_sorts_descending() {
        let today = day(2025, 6, 15);
        let rows = vec![
            snapshot(RequestStatus::New, None, Some("A"), None),
            snapshot(RequestStatus::New, None, Some("A"), None),
            snapshot(RequestStatus::New, None, None, None),
        ];
        let stats = aggregate(&rows, today);
        assert_eq!(
            stats.by_team,
            vec![
                StatEntry { label: "A".to_string(), value: 2 },
                StatEntry { label: UNASSIGNED.to_string(), value: 1 },
            ]
        );
    }

    #[test]
    fn by_category_uses_other_sentinel() {
        let today = day(2025, 6, 15);
        let rows = vec![
            snapshot(RequestStatus::New, None, None, Some("Machinery")),
            snapshot(RequestStatus::New, None, None, None),
            snapshot(RequestStatus::New, None, None, Some("")),
        ];
        let stats = aggregate(&rows, today);
        assert_eq!(
            stats.by_category,
            vec![
                StatEntry { label: OTHER.to_string(), value: 2 },
                StatEntry { label: "Machinery".to_string(), value: 1 },
            ]
        );
    }

    #[test]
    fn tied_counts_sort_by_label() {
        let today = day(2025, 6, 15);
        let rows = vec![
            snapshot(RequestStatus::New, None, Some("B"), None),
            snapshot(RequestStatus::New, None, Some("A"), None),
        ];
        let stats = aggregate(&rows, today);
        assert_eq!(stats.by_team[0].label, "A");
        assert_eq!(stats.by_team[1].label, "B");
    }
}
