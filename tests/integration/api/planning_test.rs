//! Planning API integration tests
//!
//! Budget breakdowns and city suggestions.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::TestApp;
use globetrotter::shared::{Activity, Stop, SuggestionItem, TripBudget, MAX_ACTIVITY_COST};

#[tokio::test]
async fn test_japan_trip_budget() {
    let app = TestApp::new().await;
    let trip_id = app.create_trip("Japan Trip", "2025-06-01", "2025-06-10").await;

    let response = app
        .post(&format!("/trip/{}/stop", trip_id), json!({ "city": "Tokyo", "duration_days": 3 }))
        .await;
    assert_status!(response, StatusCode::OK);
    let tokyo: Stop = response.json();
    assert_eq!(tokyo.stop_order, 1);
    assert!(tokyo.activities.is_empty());

    let response = app
        .post(&format!("/stop/{}/activity", tokyo.id), json!({ "name": "Sushi Class", "cost": 80.0 }))
        .await;
    assert_status!(response, StatusCode::OK);
    let sushi: Activity = response.json();
    assert_eq!(sushi.stop_id, tokyo.id);

    let response = app.get(&format!("/trip/{}/budget", trip_id)).await;
    assert_status!(response, StatusCode::OK);
    let budget: TripBudget = response.json();
    assert_eq!(budget.trip_id, trip_id);
    assert_approx_eq!(budget.total_budget, 9080.0);
    assert_eq!(budget.breakdown.len(), 1);
    assert_eq!(budget.breakdown[0].city, "Tokyo");
    assert_approx_eq!(budget.breakdown[0].stay_cost, 9000.0);
    assert_approx_eq!(budget.breakdown[0].activities_cost, 80.0);
}

#[tokio::test]
async fn test_delete_activity_updates_budget() {
    let app = TestApp::new().await;
    let trip_id = app.create_trip("Rome", "2025-04-01", "2025-04-05").await;
    let stop: Stop = app
        .post(&format!("/trip/{}/stop", trip_id), json!({ "city": "Rome", "duration_days": 1 }))
        .await
        .json();
    let activity: Activity = app
        .post(&format!("/stop/{}/activity", stop.id), json!({ "name": "Vatican", "cost": 25.0 }))
        .await
        .json();

    let before: TripBudget = app.get(&format!("/trip/{}/budget", trip_id)).await.json();
    assert_approx_eq!(before.total_budget, 3025.0);

    assert_status!(
        app.delete(&format!("/activity/{}", activity.id)).await,
        StatusCode::NO_CONTENT
    );

    let after: TripBudget = app.get(&format!("/trip/{}/budget", trip_id)).await.json();
    assert_approx_eq!(after.total_budget, 3000.0);
}

#[tokio::test]
async fn test_budget_of_trip_without_stops() {
    let app = TestApp::new().await;
    let trip_id = app.create_trip("Undecided", "2025-09-01", "2025-09-02").await;

    let budget: TripBudget = app.get(&format!("/trip/{}/budget", trip_id)).await.json();
    assert_approx_eq!(budget.total_budget, 0.0);
    assert!(budget.breakdown.is_empty());
}

#[tokio::test]
async fn test_suggestions_normalize_city() {
    let app = TestApp::new().await;

    let canonical: Vec<SuggestionItem> = app.get("/suggestions?city=paris").await.json();
    assert_eq!(canonical.len(), 3);

    let shouted: Vec<SuggestionItem> = app.get("/suggestions?city=PARIS").await.json();
    assert_eq!(shouted, canonical);

    let padded: Vec<SuggestionItem> = app.get("/suggestions?city=%20Paris%20").await.json();
    assert_eq!(padded, canonical);
}

#[tokio::test]
async fn test_suggestions_fallback() {
    let app = TestApp::new().await;

    let response = app.get("/suggestions?city=Reykjavik").await;
    assert_status!(response, StatusCode::OK);
    let items: Vec<SuggestionItem> = response.json();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0].name, "Explore Reykjavik City Center");

    let missing = app.get("/suggestions").await;
    assert_status!(missing, StatusCode::OK);
    let items: Vec<SuggestionItem> = missing.json();
    assert_eq!(items.len(), 3);
}

#[tokio::test]
async fn test_oversized_cost_is_rejected() {
    let app = TestApp::new().await;
    let trip_id = app.create_trip("Japan Trip", "2025-06-01", "2025-06-10").await;
    let stop: Stop = app
        .post(&format!("/trip/{}/stop", trip_id), json!({ "city": "Tokyo", "duration_days": 1 }))
        .await
        .json();

    for _ in 0..2 {
        let response = app
            .post(&format!("/stop/{}/activity", stop.id), json!({ "name": "Yacht", "cost": 1e308 }))
            .await;
        assert_error_body!(response, StatusCode::BAD_REQUEST, "cost");
    }

    let response = app
        .post(
            &format!("/stop/{}/activity", stop.id),
            json!({ "name": "Charter", "cost": MAX_ACTIVITY_COST }),
        )
        .await;
    assert_status!(response, StatusCode::OK);

    let response = app.get(&format!("/trip/{}/budget", trip_id)).await;
    assert_status!(response, StatusCode::OK);
    assert!(response.body["total_budget"].is_number());
    assert!(response.body["breakdown"][0]["total"].is_number());
}
