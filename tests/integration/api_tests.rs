//! API integration tests
//!
//! These run against a live server with a migrated database:
//! `cargo test -- --ignored`

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api/v1";

/// Create a team, a technician in it, and one piece of equipment wired to
/// both. Returns (team_id, technician_id, equipment_id).
async fn seed_equipment(client: &Client, tag: &str) -> (String, String, String) {
    let response = client
        .post(format!("{}/teams", BASE_URL))
        .json(&json!({ "name": format!("Mechanics {}", tag) }))
        .send()
        .await
        .expect("Failed to create team");
    assert_eq!(response.status(), 201);
    let team: Value = response.json().await.expect("Failed to parse team");
    let team_id = team["id"].as_str().expect("No team ID").to_string();

    let response = client
        .post(format!("{}/users", BASE_URL))
        .json(&json!({
            "full_name": format!("Jane Wrench {}", tag),
            "team_id": team_id
        }))
        .send()
        .await
        .expect("Failed to create user");
    assert_eq!(response.status(), 201);
    let user: Value = response.json().await.expect("Failed to parse user");
    let user_id = user["id"].as_str().expect("No user ID").to_string();

    let response = client
        .post(format!("{}/equipment", BASE_URL))
        .json(&json!({
            "name": format!("CNC Mill {}", tag),
            "serial_number": format!("SN-{}", tag),
            "category": "Machinery",
            "team_id": team_id,
            "default_technician_id": user_id
        }))
        .send()
        .await
        .expect("Failed to create equipment");
    assert_eq!(response.status(), 201);
    let equipment: Value = response.json().await.expect("Failed to parse equipment");
    let equipment_id = equipment["id"].as_str().expect("No equipment ID").to_string();

    (team_id, user_id, equipment_id)
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_equipment_defaults_autofill() {
    let client = Client::new();
    let (team_id, user_id, equipment_id) = seed_equipment(&client, "autofill").await;

    let response = client
        .get(format!("{}/equipment/{}/defaults", BASE_URL, equipment_id))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["category"], "Machinery");
    assert_eq!(body["team_id"], team_id.as_str());
    assert_eq!(body["default_technician_id"], user_id.as_str());
    assert!(body["team_members"]
        .as_array()
        .expect("No team members")
        .iter()
        .any(|m| m["id"] == user_id.as_str()));
}

#[tokio::test]
#[ignore]
async fn test_create_request_snapshots_equipment_fields() {
    let client = Client::new();
    let (team_id, user_id, equipment_id) = seed_equipment(&client, "snapshot").await;

    let response = client
        .post(format!("{}/requests", BASE_URL))
        .json(&json!({
            "subject": "Leaking Oil",
            "equipment_id": equipment_id
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "new");
    assert_eq!(body["category"], "Machinery");
    assert_eq!(body["team_id"], team_id.as_str());
    assert_eq!(body["assigned_technician_id"], user_id.as_str());
}

#[tokio::test]
#[ignore]
async fn test_preventive_request_requires_scheduled_date() {
    let client = Client::new();
    let (_, _, equipment_id) = seed_equipment(&client, "preventive").await;

    let response = client
        .post(format!("{}/requests", BASE_URL))
        .json(&json!({
            "subject": "Quarterly checkup",
            "equipment_id": equipment_id,
            "request_type": "preventive"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_repaired_requires_hours() {
    let client = Client::new();
    let (_, _, equipment_id) = seed_equipment(&client, "hours").await;

    let response = client
        .post(format!("{}/requests", BASE_URL))
        .json(&json!({ "subject": "Broken belt", "equipment_id": equipment_id }))
        .send()
        .await
        .expect("Failed to create request");
    let request: Value = response.json().await.expect("Failed to parse request");
    let request_id = request["id"].as_str().expect("No request ID");

    // Missing hours is rejected, status stays new
    let response = client
        .put(format!("{}/requests/{}/status", BASE_URL, request_id))
        .json(&json!({ "status": "repaired" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);

    let response = client
        .get(format!("{}/requests/{}", BASE_URL, request_id))
        .send()
        .await
        .expect("Failed to fetch request");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "new");

    // Completing with hours succeeds
    let response = client
        .post(format!("{}/requests/{}/complete", BASE_URL, request_id))
        .json(&json!({ "hours_spent": 2.5 }))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "repaired");
    assert_eq!(body["hours_spent"], 2.5);
}

#[tokio::test]
#[ignore]
async fn test_scrap_transition_scraps_equipment_and_locks_creation() {
    let client = Client::new();
    let (_, _, equipment_id) = seed_equipment(&client, "scrap").await;

    let response = client
        .post(format!("{}/requests", BASE_URL))
        .json(&json!({ "subject": "Beyond repair", "equipment_id": equipment_id }))
        .send()
        .await
        .expect("Failed to create request");
    let request: Value = response.json().await.expect("Failed to parse request");
    let request_id = request["id"].as_str().expect("No request ID");

    // Move to scrap
    let response = client
        .put(format!("{}/requests/{}/status", BASE_URL, request_id))
        .json(&json!({ "status": "scrap" }))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    // Equipment now reports scrapped
    let response = client
        .get(format!("{}/equipment/{}", BASE_URL, equipment_id))
        .send()
        .await
        .expect("Failed to fetch equipment");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "scrapped");

    // Auto-fill is refused
    let response = client
        .get(format!("{}/equipment/{}/defaults", BASE_URL, equipment_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 422);

    // New requests against the equipment are refused
    let response = client
        .post(format!("{}/requests", BASE_URL))
        .json(&json!({ "subject": "One more try", "equipment_id": equipment_id }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 422);

    // Terminal status cannot be exited
    let response = client
        .put(format!("{}/requests/{}/status", BASE_URL, request_id))
        .json(&json!({ "status": "new" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 422);
}

#[tokio::test]
#[ignore]
async fn test_dashboard_stats_shape() {
    let client = Client::new();

    let response = client
        .get(format!("{}/dashboard/stats", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["total"].is_number());
    assert!(body["open"].is_number());
    assert!(body["overdue"].is_number());
    assert!(body["repaired"].is_number());
    assert!(body["completion_rate"].is_number());
    assert!(body["by_team"].is_array());
    assert!(body["by_category"].is_array());
}

#[tokio::test]
#[ignore]
async fn test_reassign_requires_same_team() {
    let client = Client::new();
    let (_, _, equipment_id) = seed_equipment(&client, "reassign").await;

    // Technician on an unrelated team
    let response = client
        .post(format!("{}/teams", BASE_URL))
        .json(&json!({ "name": "Electrical reassign" }))
        .send()
        .await
        .expect("Failed to create team");
    let other_team: Value = response.json().await.expect("Failed to parse team");

    let response = client
        .post(format!("{}/users", BASE_URL))
        .json(&json!({
            "full_name": "Sam Sparks",
            "team_id": other_team["id"]
        }))
        .send()
        .await
        .expect("Failed to create user");
    let outsider: Value = response.json().await.expect("Failed to parse user");

    let response = client
        .post(format!("{}/requests", BASE_URL))
        .json(&json!({ "subject": "Strange noise", "equipment_id": equipment_id }))
        .send()
        .await
        .expect("Failed to create request");
    let request: Value = response.json().await.expect("Failed to parse request");
    let request_id = request["id"].as_str().expect("No request ID");

    let response = client
        .put(format!("{}/requests/{}/technician", BASE_URL, request_id))
        .json(&json!({ "technician_id": outsider["id"] }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);
}
