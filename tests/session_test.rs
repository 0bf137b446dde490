//! Integration tests for session recording.

mod helpers;

use chrono::{Duration, Local};
use http::StatusCode;

use helpers::{TestApp, fmt_time};

#[tokio::test]
async fn test_record_session_succeeds() {
    let app = TestApp::new();
    app.register("user1", "Alice").await;
    let now = Local::now().naive_local();

    let response = app
        .request(
            "POST",
            &format!(
                "/recordSession?userId=user1&loginTime={}&logoutTime={}",
                fmt_time(now - Duration::hours(1)),
                fmt_time(now)
            ),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, "Session recorded");
}

#[tokio::test]
async fn test_record_session_missing_user_id() {
    let app = TestApp::new();
    let now = Local::now().naive_local();

    let response = app
        .request(
            "POST",
            &format!(
                "/recordSession?loginTime={}&logoutTime={}",
                fmt_time(now - Duration::hours(1)),
                fmt_time(now)
            ),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body, "Missing parameters");
}

#[tokio::test]
async fn test_record_session_missing_login_time() {
    let app = TestApp::new();
    let now = Local::now().naive_local();

    let response = app
        .request(
            "POST",
            &format!("/recordSession?userId=user1&logoutTime={}", fmt_time(now)),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body, "Missing parameters");
}

#[tokio::test]
async fn test_record_session_missing_logout_time() {
    let app = TestApp::new();
    let now = Local::now().naive_local();

    let response = app
        .request(
            "POST",
            &format!("/recordSession?userId=user1&loginTime={}", fmt_time(now)),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body, "Missing parameters");
}

#[tokio::test]
async fn test_record_session_rejects_date_only_timestamp() {
    let app = TestApp::new();
    let now = Local::now().naive_local();

    let response = app
        .request(
            "POST",
            &format!(
                "/recordSession?userId=user1&loginTime=2025-03-04&logoutTime={}",
                fmt_time(now)
            ),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(
        response.body.starts_with("Invalid data: "),
        "body={}",
        response.body
    );
}

#[tokio::test]
async fn test_record_session_accepts_logout_before_login() {
    let app = TestApp::new();
    let now = Local::now().naive_local();

    let response = app
        .request(
            "POST",
            &format!(
                "/recordSession?userId=user1&loginTime={}&logoutTime={}",
                fmt_time(now),
                fmt_time(now - Duration::hours(2))
            ),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, "Session recorded");
}
