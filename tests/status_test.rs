//! Integration tests for the derived-status routes and health check.

mod helpers;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use http::StatusCode;

use helpers::TestApp;

fn login_at(hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 3, 4)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

#[tokio::test]
async fn test_user_status_highly_active() {
    let app = TestApp::new();
    app.register("user1", "Alice").await;
    app.record_session("user1", login_at(9), login_at(9) + Duration::minutes(150))
        .await;

    let response = app.request("GET", "/userStatus?userId=user1").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, "User status: Highly active");
}

#[tokio::test]
async fn test_user_status_active() {
    let app = TestApp::new();
    app.record_session("user1", login_at(9), login_at(9) + Duration::minutes(100))
        .await;

    let response = app.request("GET", "/userStatus?userId=user1").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, "User status: Active");
}

#[tokio::test]
async fn test_user_status_inactive_for_negative_total() {
    let app = TestApp::new();
    // Logout two hours before login: total is negative, still Inactive.
    app.record_session("user1", login_at(12), login_at(10)).await;

    let response = app.request("GET", "/userStatus?userId=user1").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, "User status: Inactive");
}

#[tokio::test]
async fn test_user_status_unknown_user() {
    let app = TestApp::new();

    let response = app.request("GET", "/userStatus?userId=notExist").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body, "Invalid data: No sessions found for user");
}

#[tokio::test]
async fn test_user_status_missing_user_id() {
    let app = TestApp::new();

    let response = app.request("GET", "/userStatus").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body, "Missing userId");
}

#[tokio::test]
async fn test_last_session_date_picks_max_logout() {
    let app = TestApp::new();
    // Inserted out of chronological order.
    app.record_session("user1", login_at(9), login_at(10)).await;
    let late = NaiveDate::from_ymd_opt(2025, 3, 20)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap();
    app.record_session("user1", late, late + Duration::hours(1))
        .await;
    app.record_session("user1", login_at(11), login_at(12)).await;

    let response = app.request("GET", "/lastSessionDate?userId=user1").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, "Last session: 2025-03-20");
}

#[tokio::test]
async fn test_last_session_date_without_sessions() {
    let app = TestApp::new();
    app.register("user2", "Bob").await;

    let response = app.request("GET", "/lastSessionDate?userId=user2").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(
        response.body.starts_with("Invalid data: "),
        "body={}",
        response.body
    );
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new();

    let response = app.request("GET", "/health").await;

    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert_eq!(body.get("status").unwrap(), "ok");
    assert!(body.get("version").is_some());
}
